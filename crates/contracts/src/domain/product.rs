use serde::{Deserialize, Serialize};

use super::category::Category;
use super::color::Color;

/// Reference to a category, either as a bare id or expanded by the backend.
///
/// Which shape arrives depends on the endpoint (list endpoints populate the
/// reference, mutation responses often do not). Downstream code must use the
/// accessors instead of matching on the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Expanded(Category),
    Id(String),
}

impl CategoryRef {
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Expanded(c) => &c.id,
        }
    }

    /// Category name when the reference was populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryRef::Id(_) => None,
            CategoryRef::Expanded(c) => Some(&c.name),
        }
    }
}

/// Reference to a color, either as a bare id or expanded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRef {
    Expanded(Color),
    Id(String),
}

impl ColorRef {
    pub fn id(&self) -> &str {
        match self {
            ColorRef::Id(id) => id,
            ColorRef::Expanded(c) => &c.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ColorRef::Id(_) => None,
            ColorRef::Expanded(c) => Some(&c.name),
        }
    }

    /// Resolve against a fetched palette when the backend sent a bare id.
    pub fn resolve<'a>(&'a self, palette: &'a [Color]) -> Option<&'a Color> {
        match self {
            ColorRef::Expanded(c) => Some(c),
            ColorRef::Id(id) => palette.iter().find(|c| &c.id == id),
        }
    }

    /// Human-readable name, falling back to a placeholder for unresolved ids.
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("Color...")
    }
}

/// One color/stock/price combination of a product; the smallest sellable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub color: ColorRef,
    pub amount: u32,
    pub price_cost: f64,
    pub price_sell: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub public_id: String,
}

/// Catalog entry with per-color stock and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: CategoryRef,
    pub variants: Vec<ColorVariant>,
    #[serde(default = "default_min_stock")]
    pub min_stock_alert: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_profit: Option<f64>,
}

fn default_min_stock() -> u32 {
    5
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Units in stock across all variants.
    pub fn total_stock(&self) -> u32 {
        self.variants.iter().map(|v| v.amount).sum()
    }

    /// Min/max sell price across variants; `None` for a product without variants.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.variants.iter().map(|v| v.price_sell);
        let first = prices.next()?;
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (p.min(lo), p.max(hi)));
        Some((min, max))
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.total_stock() == 0
    }

    /// Active and at or below the replenishment threshold (but not empty).
    pub fn is_low_stock(&self) -> bool {
        let total = self.total_stock();
        self.is_active && total > 0 && total <= self.min_stock_alert
    }

    /// Category name for grouping in the inventory view.
    pub fn category_name(&self) -> &str {
        self.category.name().unwrap_or("Sin Categoría")
    }
}

/// Variant row as edited in the product form (color as a bare id).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDto {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub color: String,
    pub amount: u32,
    pub price_cost: f64,
    pub price_sell: f64,
}

impl Default for VariantDto {
    fn default() -> Self {
        Self {
            id: None,
            color: String::new(),
            amount: 0,
            price_cost: 0.0,
            price_sell: 0.0,
        }
    }
}

/// Form values for creating or editing a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub category: String,
    pub min_stock_alert: u32,
    pub variants: Vec<VariantDto>,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            min_stock_alert: 5,
            variants: vec![VariantDto::default()],
        }
    }
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.len() < 3 {
            return Err("El nombre debe tener al menos 3 caracteres".into());
        }
        if name.len() > 50 {
            return Err("El nombre no puede superar los 50 caracteres".into());
        }
        if self.category.is_empty() {
            return Err("La categoría es obligatoria".into());
        }
        if self.variants.is_empty() {
            return Err("Agregá al menos una variante".into());
        }
        for variant in &self.variants {
            if variant.color.is_empty() {
                return Err("Cada variante necesita un color".into());
            }
            if variant.price_cost < 0.0 || variant.price_sell < 0.0 {
                return Err("Los precios no pueden ser negativos".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(amount: u32, price_sell: f64) -> ColorVariant {
        ColorVariant {
            id: Some("v1".into()),
            color: ColorRef::Id("c1".into()),
            amount,
            price_cost: 0.0,
            price_sell,
        }
    }

    fn product(variants: Vec<ColorVariant>) -> Product {
        Product {
            id: "p1".into(),
            name: "Funda iPhone 15".into(),
            category: CategoryRef::Id("cat1".into()),
            variants,
            min_stock_alert: 5,
            is_active: true,
            image: None,
            total_profit: None,
        }
    }

    #[test]
    fn color_ref_deserializes_both_shapes() {
        // Bare id, as mutation responses return it.
        let v: ColorVariant = serde_json::from_str(
            r#"{"_id":"v1","color":"65aa","amount":3,"priceCost":10.0,"priceSell":25.0}"#,
        )
        .unwrap();
        assert_eq!(v.color.id(), "65aa");
        assert_eq!(v.color.name(), None);

        // Expanded object, as the populated list endpoint returns it.
        let v: ColorVariant = serde_json::from_str(
            r##"{"_id":"v1","color":{"_id":"65aa","name":"Negro","hex":"#000000"},"amount":3,"priceCost":10.0,"priceSell":25.0}"##,
        )
        .unwrap();
        assert_eq!(v.color.id(), "65aa");
        assert_eq!(v.color.display_name(), "Negro");
    }

    #[test]
    fn color_ref_resolves_against_palette() {
        let palette = vec![Color {
            id: "65aa".into(),
            name: "Negro".into(),
            hex: "#000000".into(),
            is_active: true,
        }];
        let bare = ColorRef::Id("65aa".into());
        assert_eq!(bare.resolve(&palette).unwrap().name, "Negro");
        assert!(ColorRef::Id("other".into()).resolve(&palette).is_none());
    }

    #[test]
    fn stock_helpers() {
        let p = product(vec![variant(3, 25.0), variant(2, 40.0)]);
        assert_eq!(p.total_stock(), 5);
        assert_eq!(p.price_range(), Some((25.0, 40.0)));
        assert!(p.is_low_stock());
        assert!(!p.is_out_of_stock());

        let empty = product(vec![variant(0, 25.0)]);
        assert!(empty.is_out_of_stock());
        assert!(!empty.is_low_stock());

        assert_eq!(product(vec![]).price_range(), None);
    }

    #[test]
    fn dto_validation() {
        let mut dto = ProductDto {
            name: "Funda iPhone 15".into(),
            category: "cat1".into(),
            ..ProductDto::default()
        };
        dto.variants[0].color = "65aa".into();
        assert!(dto.validate().is_ok());

        dto.variants[0].color.clear();
        assert!(dto.validate().is_err());

        let dto = ProductDto {
            name: "ab".into(),
            category: "cat1".into(),
            ..ProductDto::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn variant_dto_omits_missing_id() {
        let dto = VariantDto {
            color: "65aa".into(),
            ..VariantDto::default()
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("_id"));
    }
}
