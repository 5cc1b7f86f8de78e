//! Backend calls for the color palette.

use contracts::domain::color::{Color, ColorDto};
use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header, check_session, rejection_message};

pub async fn fetch_colors() -> Result<Vec<Color>, String> {
    let auth = auth_header()?;
    let response = Request::get(&api_url("/api/colors"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    let envelope: ApiEnvelope<Vec<Color>> = response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida: {}", e))?;
    Ok(envelope.data)
}

pub async fn fetch_color(id: &str) -> Result<Color, String> {
    let auth = auth_header()?;
    let response = Request::get(&api_url(&format!("/api/colors/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;
    check_session(&response)?;
    if !response.ok() {
        return Err(rejection_message(&response).await);
    }
    let envelope: ApiEnvelope<Color> = response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida: {}", e))?;
    Ok(envelope.data)
}

pub async fn create_color(dto: &ColorDto) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::post(&api_url("/api/colors"))
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

pub async fn update_color(id: &str, dto: &ColorDto) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::put(&api_url(&format!("/api/colors/{}", id)))
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

pub async fn delete_color(id: &str) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::delete(&api_url(&format!("/api/colors/{}", id)))
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
    let response = Request::patch(&api_url(&format!("/api/colors/{}/{}", id, action)))
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
