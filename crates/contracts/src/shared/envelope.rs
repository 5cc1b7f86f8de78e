//! Response envelopes used by the backend API.
//!
//! Every collection endpoint wraps its payload as `{ error, data, ... }`;
//! the sales listing additionally carries server-computed aggregates.

use serde::{Deserialize, Serialize};

use crate::domain::sale::Sale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

/// Sales listing with aggregates computed server-side over the same filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_profit: f64,
    pub data: Vec<Sale>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;

    #[test]
    fn envelope_roundtrip() {
        let json = r#"{"error":false,"data":[{"_id":"1","name":"Fundas","isActive":true}]}"#;
        let env: ApiEnvelope<Vec<Category>> = serde_json::from_str(json).unwrap();
        assert!(!env.error);
        assert_eq!(env.data[0].name, "Fundas");
    }

    #[test]
    fn sales_report_aggregates() {
        let json = r#"{"error":false,"count":2,"totalRevenue":75.0,"totalProfit":30.5,"data":[]}"#;
        let report: SalesReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.count, 2);
        assert_eq!(report.total_revenue, 75.0);
        assert_eq!(report.total_profit, 30.5);
    }
}
