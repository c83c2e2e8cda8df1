use serde::{Deserialize, Serialize};

use crate::engine::units::Unit;
use crate::error::{PricingError, Result};

/// VAT category of a sellable product. Food uses the reduced rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatCategory {
    Food,
    Drink,
}

impl VatCategory {
    pub fn label(self) -> &'static str {
        match self {
            VatCategory::Food => "food",
            VatCategory::Drink => "drink",
        }
    }

    /// Parse a category label, rejecting anything outside the closed set.
    pub fn parse(s: &str) -> Result<VatCategory> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(VatCategory::Food),
            "drink" => Ok(VatCategory::Drink),
            other => Err(PricingError::InvalidVatCategory(other.to_string())),
        }
    }
}

/// One ingredient reference with the quantity used per portion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    pub ingredient_id: String,
    pub qty: f64,
    pub unit: Unit,
}

/// Pricing state carried on a recipe: the absolute margin target plus the
/// last market and sell prices the user entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipePricing {
    pub target_margin: Option<f64>,
    pub last_market_gross: Option<f64>,
    pub last_sell_gross: Option<f64>,
}

/// A priced product. One recipe is exactly one portion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub vat_category: VatCategory,

    /// Waste/shrink fraction; the settings default applies when absent.
    #[serde(default)]
    pub loss_percent: Option<f64>,

    #[serde(default)]
    pub packaging_set_id: Option<String>,

    #[serde(default)]
    pub pricing: RecipePricing,

    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

impl Recipe {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Basic validation: a name, at least one line, all quantities positive.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.ingredients.is_empty()
            && self
                .ingredients
                .iter()
                .all(|line| line.qty.is_finite() && line.qty > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "rec_soup".to_string(),
            name: "Tomato Soup".to_string(),
            vat_category: VatCategory::Food,
            loss_percent: None,
            packaging_set_id: Some("pack_default".to_string()),
            pricing: RecipePricing::default(),
            ingredients: vec![IngredientLine {
                ingredient_id: "ing_tomato".to_string(),
                qty: 300.0,
                unit: Unit::G,
            }],
        }
    }

    #[test]
    fn test_vat_category_parse() {
        assert_eq!(VatCategory::parse("food").unwrap(), VatCategory::Food);
        assert_eq!(VatCategory::parse(" Drink ").unwrap(), VatCategory::Drink);
        assert!(matches!(
            VatCategory::parse("snack"),
            Err(PricingError::InvalidVatCategory(_))
        ));
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_recipe().is_valid());

        let mut empty = sample_recipe();
        empty.ingredients.clear();
        assert!(!empty.is_valid());

        let mut zero_qty = sample_recipe();
        zero_qty.ingredients[0].qty = 0.0;
        assert!(!zero_qty.is_valid());
    }

    #[test]
    fn test_pricing_defaults_backfill() {
        let json = r#"{
            "id": "rec_x",
            "name": "X",
            "vatCategory": "drink",
            "ingredients": []
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.vat_category, VatCategory::Drink);
        assert!(recipe.pricing.target_margin.is_none());
        assert!(recipe.packaging_set_id.is_none());
    }
}
