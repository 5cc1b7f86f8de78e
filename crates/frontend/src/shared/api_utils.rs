//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs, attaching the session
//! credential, and handling expired sessions globally.

use gloo_net::http::Response;
use serde::Deserialize;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&format!("/api/products/{}", id));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Bearer header for authenticated requests.
pub fn auth_header() -> Result<String, String> {
    storage::get_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "No autenticado".to_string())
}

/// Error message for a rejected request, preferring the backend's own
/// `message` field over a generic status line.
pub async fn rejection_message(response: &Response) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    if let Ok(body) = response.json::<ErrorBody>().await {
        if let Some(message) = body.message {
            return message;
        }
    }
    format!("Error del servidor ({})", response.status())
}

/// Global session-expiry handler: a 401 anywhere clears the persisted
/// session and sends the browser back to the login screen. Every API module
/// funnels its responses through here before inspecting the status further.
pub fn check_session(response: &Response) -> Result<(), String> {
    if response.status() == 401 {
        log::warn!("Sesión expirada, redirigiendo...");
        storage::clear_session();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
        return Err("Sesión expirada".to_string());
    }
    Ok(())
}
