use serde::{Deserialize, Serialize};

/// Color swatch available for product variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub hex: String,
    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Form values for creating or editing a color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorDto {
    pub name: String,
    pub hex: String,
}

impl Default for ColorDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            hex: "#000000".into(),
        }
    }
}

impl ColorDto {
    /// Uppercase the hex code the way the color picker does.
    pub fn normalize(&mut self) {
        self.hex = self.hex.to_uppercase();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().len() < 3 {
            return Err("El nombre debe tener al menos 3 caracteres".into());
        }
        if !is_hex_code(&self.hex) {
            return Err("Debe ser un código hexadecimal válido (ej: #000000)".into());
        }
        Ok(())
    }
}

/// `#` followed by exactly six hex digits.
pub fn is_hex_code(value: &str) -> bool {
    let mut chars = value.chars();
    if chars.next() != Some('#') {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    rest.len() == 6 && rest.iter().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_code_shape() {
        assert!(is_hex_code("#000000"));
        assert!(is_hex_code("#A1b2C3"));
        assert!(!is_hex_code("000000"));
        assert!(!is_hex_code("#00000"));
        assert!(!is_hex_code("#0000000"));
        assert!(!is_hex_code("#GGGGGG"));
    }

    #[test]
    fn dto_validation_and_normalize() {
        let mut dto = ColorDto {
            name: "Azul Marino".into(),
            hex: "#1a2b3c".into(),
        };
        assert!(dto.validate().is_ok());
        dto.normalize();
        assert_eq!(dto.hex, "#1A2B3C");

        let dto = ColorDto {
            name: "Az".into(),
            hex: "#112233".into(),
        };
        assert!(dto.validate().is_err());
    }
}
