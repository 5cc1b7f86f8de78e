use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Line item of a recorded sale, priced by the backend at sale time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_id: String,
    pub variant_id: String,
    pub name: String,
    pub quantity: u32,
    pub price_at_sale: f64,
}

/// A completed sale as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(rename = "_id")]
    pub id: String,
    pub items: Vec<SaleItem>,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Short reference shown in listings ("Venta #a1b2").
    pub fn short_id(&self) -> &str {
        let len = self.id.len();
        &self.id[len.saturating_sub(4)..]
    }
}

/// One line of a sale-creation request. Prices are intentionally omitted:
/// the backend prices at time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequestItem {
    pub product_id: String,
    pub variant_id: String,
    pub quantity: u32,
}

/// Payload sent to record a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRequest {
    pub items: Vec<SaleRequestItem>,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "_id": "66b0c4d2e1f2a3b4c5d6e7f8",
            "items": [
                {"productId":"p1","variantId":"v1","name":"Funda (Negro)","quantity":2,"priceAtSale":25.0}
            ],
            "totalAmount": 50.0,
            "createdAt": "2026-08-01T14:30:00.000Z"
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.comment, None);
        assert_eq!(sale.short_id(), "e7f8");
    }

    #[test]
    fn request_serializes_without_prices() {
        let req = SaleRequest {
            items: vec![SaleRequestItem {
                product_id: "p1".into(),
                variant_id: "v1".into(),
                quantity: 2,
            }],
            comment: String::new(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"productId\":\"p1\""));
        assert!(!json.contains("price"));
    }
}
