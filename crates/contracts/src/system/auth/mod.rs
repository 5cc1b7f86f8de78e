use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Seller,
    Developer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login and register both answer with the authenticated user plus a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
}

/// Error body the auth endpoints return on rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthError {
    pub message: String,
}

// Client-side field checks matching the backend's rules, so most rejections
// never leave the browser.

pub fn validate_name(name: &str) -> Result<(), String> {
    match name.trim().len() {
        0 => Err("El nombre es obligatorio".into()),
        1..=2 => Err("El nombre debe tener al menos 3 caracteres".into()),
        3..=30 => Ok(()),
        _ => Err("El nombre no puede superar los 30 caracteres".into()),
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("El email es obligatorio".into());
    }
    if email.len() < 3 || email.len() > 30 {
        return Err("El email debe tener entre 3 y 30 caracteres".into());
    }
    // local@domain.tld, no whitespace anywhere
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(l), Some(d), None) => (l, d),
        _ => return Err("El email no es válido".into()),
    };
    let valid = !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace);
    if valid {
        Ok(())
    } else {
        Err("El email no es válido".into())
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    match password.len() {
        0 => Err("La contraseña es obligatoria".into()),
        1..=5 => Err("La contraseña debe tener al menos 6 caracteres".into()),
        6..=30 => Ok(()),
        _ => Err("La contraseña no puede superar los 30 caracteres".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_lowercase_on_the_wire() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":"u1","name":"Ana","email":"ana@nextzone.ar","role":"seller"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Seller);
        assert!(serde_json::to_string(&user).unwrap().contains("\"seller\""));
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("ana@nextzone.ar").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("sin-arroba.com").is_err());
        assert!(validate_email("dos@@arrobas.com").is_err());
        assert!(validate_email("sin@punto").is_err());
        assert!(validate_email("con espacio@mail.com").is_err());
        assert!(validate_email("demasiado.largo.de.verdad@dominio.com").is_err());
    }

    #[test]
    fn password_bounds() {
        assert!(validate_password("").is_err());
        assert!(validate_password("corta").is_err());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password(&"x".repeat(31)).is_err());
    }

    #[test]
    fn name_bounds() {
        assert!(validate_name("Ana").is_ok());
        assert!(validate_name("  ab  ").is_err());
    }
}
