//! Backend calls for the product catalog and stock adjustments.

use contracts::domain::product::{Product, ProductDto};
use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::Request;
use serde_json::json;

use crate::shared::api_utils::{api_url, auth_header, check_session, rejection_message};

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let auth = auth_header()?;
    let response = Request::get(&api_url("/api/products"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    let envelope: ApiEnvelope<Vec<Product>> = response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida: {}", e))?;
    Ok(envelope.data)
}

pub async fn fetch_product(id: &str) -> Result<Product, String> {
    let auth = auth_header()?;
    let response = Request::get(&api_url(&format!("/api/products/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    let envelope: ApiEnvelope<Product> = response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida: {}", e))?;
    Ok(envelope.data)
}

pub async fn create_product(dto: &ProductDto) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::post(&api_url("/api/products"))
        .header("Authorization", &auth)
        .json(dto)
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

pub async fn update_product(id: &str, dto: &ProductDto) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::put(&api_url(&format!("/api/products/{}", id)))
        .header("Authorization", &auth)
        .json(dto)
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

pub async fn delete_product(id: &str) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::delete(&api_url(&format!("/api/products/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    Ok(())
}

// Note the segment order: products puts the action before the id, unlike
// categories and colors. The backend routes are wired that way.
pub async fn set_active(id: &str, active: bool) -> Result<(), String> {
    let action = if active { "activate" } else { "deactivate" };
    let auth = auth_header()?;
    let response = Request::patch(&api_url(&format!("/api/products/{}/{}", action, id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    Ok(())
}

/// Adjust one variant's stock by `delta` units. The variant is addressed by
/// its color id; the response carries the product as the server now sees it.
pub async fn adjust_stock(product_id: &str, color_id: &str, delta: i32) -> Result<Product, String> {
    let auth = auth_header()?;
    let body = json!({ "color": color_id, "quantity": delta });
    let response = Request::patch(&api_url(&format!("/api/products/stock/{}", product_id)))
        .header("Authorization", &auth)
        .json(&body)
        .map_err(|e| format!("Error serializando: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    let envelope: ApiEnvelope<Product> = response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida: {}", e))?;
    Ok(envelope.data)
}
