use serde::{Deserialize, Serialize};

/// Product category as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Form values for creating or renaming a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().len() < 3 {
            return Err("El nombre debe tener al menos 3 caracteres".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_requires_three_characters() {
        let dto = CategoryDto { name: "ab".into() };
        assert!(dto.validate().is_err());

        let dto = CategoryDto {
            name: "Fundas".into(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn deserializes_mongo_shape() {
        let json = r#"{"_id":"65f1","name":"Fundas iPhone","isActive":false}"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.id, "65f1");
        assert!(!cat.is_active);

        // Older records may predate the isActive flag; default to active.
        let json = r#"{"_id":"65f2","name":"Vidrios"}"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert!(cat.is_active);
    }
}
