use contracts::system::auth::{AuthError, AuthResponse, LoginRequest, RegisterRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<AuthResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/users/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(rejection_message(response, "Error en las credenciales").await);
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a new account; the backend logs it in immediately
pub async fn register(name: String, email: String, password: String) -> Result<AuthResponse, String> {
    let request = RegisterRequest {
        name,
        email,
        password,
    };

    let response = Request::post(&api_url("/api/users/register"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(rejection_message(response, "Error en el registro").await);
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Prefer the backend's message when the rejection body carries one.
async fn rejection_message(response: gloo_net::http::Response, fallback: &str) -> String {
    match response.json::<AuthError>().await {
        Ok(body) => body.message,
        Err(_) => fallback.to_string(),
    }
}
