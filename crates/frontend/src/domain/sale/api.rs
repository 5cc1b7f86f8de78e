//! Backend calls for recording and listing sales.

use contracts::domain::product::Product;
use contracts::domain::sale::SaleRequest;
use contracts::shared::envelope::SalesReport;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header, check_session, rejection_message};

/// Sales within an optional date range, plus server-computed aggregates.
///
/// A timestamp query parameter defeats intermediary caching: the listing must
/// reflect the sale that was just recorded.
pub async fn fetch_sales(
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<SalesReport, String> {
    let mut query = format!("?t={}", js_sys::Date::now() as u64);
    if let Some(start) = start_date {
        query.push_str(&format!("&startDate={}", urlencoding::encode(start)));
    }
    if let Some(end) = end_date {
        query.push_str(&format!("&endDate={}", urlencoding::encode(end)));
    }

    let auth = auth_header()?;
    let response = Request::get(&api_url(&format!("/api/sales{}", query)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida: {}", e))
}

pub async fn submit_sale(request: &SaleRequest) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::post(&api_url("/api/sales"))
        .header("Authorization", &auth)
        .json(request)
        .map_err(|e| format!("Error serializando: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    Ok(())
}

/// Catalog snapshot for composing a sale: active products only.
pub async fn fetch_active_catalog() -> Result<Vec<Product>, String> {
    let products = crate::domain::product::api::fetch_products().await?;
    Ok(products.into_iter().filter(|p| p.is_active).collect())
}
