//! Backend calls for the category catalog.

use contracts::domain::category::{Category, CategoryDto};
use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header, check_session, rejection_message};

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let auth = auth_header()?;
    let response = Request::get(&api_url("/api/categories"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    let envelope: ApiEnvelope<Vec<Category>> = response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida: {}", e))?;
    Ok(envelope.data)
}

pub async fn fetch_category(id: &str) -> Result<Category, String> {
    let auth = auth_header()?;
    let response = Request::get(&api_url(&format!("/api/categories/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    let envelope: ApiEnvelope<Category> = response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida: {}", e))?;
    Ok(envelope.data)
}

pub async fn create_category(dto: &CategoryDto) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::post(&api_url("/api/categories"))
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

pub async fn update_category(id: &str, dto: &CategoryDto) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::put(&api_url(&format!("/api/categories/{}", id)))
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

/// Deletion is refused by the backend while any product references the
/// category; the backend message explains that to the user.
pub async fn delete_category(id: &str) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::delete(&api_url(&format!("/api/categories/{}", id)))
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

pub async fn set_active(id: &str, active: bool) -> Result<(), String> {
    let action = if active { "activate" } else { "deactivate" };
    let auth = auth_header()?;
    let response = Request::patch(&api_url(&format!("/api/categories/{}/{}", id, action)))
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
