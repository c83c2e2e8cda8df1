use serde::{Deserialize, Serialize};

use crate::engine::units::Unit;

/// A purchasable raw material, priced per one base unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub base_unit: Unit,
    pub price_per_base_unit: f64,

    #[serde(default)]
    pub supplier: String,

    #[serde(default)]
    pub notes: String,
}

impl Ingredient {
    /// Basic validation: non-empty name and a non-negative finite price.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.price_per_base_unit.is_finite()
            && self.price_per_base_unit >= 0.0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A packaging material, priced per single unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingItem {
    pub id: String,
    pub name: String,
    pub price_per_unit: f64,
}

/// One item-quantity pair inside a packaging set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingLine {
    pub packaging_item_id: String,
    pub qty: f64,
}

/// A named bundle of packaging lines applied to one portion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingSet {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub lines: Vec<PackagingLine>,
}

/// Catalog of everything recipes reference by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub ingredients: Vec<Ingredient>,
    pub packaging_items: Vec<PackagingItem>,
    pub packaging_sets: Vec<PackagingSet>,
}

impl Catalog {
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn packaging_item(&self, id: &str) -> Option<&PackagingItem> {
        self.packaging_items.iter().find(|i| i.id == id)
    }

    pub fn packaging_set(&self, id: &str) -> Option<&PackagingSet> {
        self.packaging_sets.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ingredient() -> Ingredient {
        Ingredient {
            id: "ing_flour".to_string(),
            name: "Flour".to_string(),
            base_unit: Unit::Kg,
            price_per_base_unit: 0.89,
            supplier: "Metro".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_ingredient().is_valid());

        let mut bad = sample_ingredient();
        bad.price_per_base_unit = -1.0;
        assert!(!bad.is_valid());

        let mut unnamed = sample_ingredient();
        unnamed.name = "  ".to_string();
        assert!(!unnamed.is_valid());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog {
            ingredients: vec![sample_ingredient()],
            ..Default::default()
        };
        assert!(catalog.ingredient("ing_flour").is_some());
        assert!(catalog.ingredient("ing_sugar").is_none());
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&sample_ingredient()).unwrap();
        assert!(json.contains("\"baseUnit\":\"kg\""));
        assert!(json.contains("\"pricePerBaseUnit\":0.89"));
    }
}
