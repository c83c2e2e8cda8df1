use crate::engine::finite_or_zero;
use crate::engine::fixed::allocate_fixed_costs;
use crate::engine::packaging::packaging_cost_per_portion;
use crate::engine::units::convert;
use crate::error::{PricingError, Result};
use crate::models::{Catalog, Recipe, Settings, Snapshot, VatCategory};

/// Per-portion cost components for a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub ingredient_cost: f64,
    pub packaging_cost: f64,
    pub fixed_cost: f64,
    pub total_cost_per_portion: f64,
    pub vat_rate: f64,
    pub vat_category: VatCategory,
}

/// Ingredient cost for one portion, loss multiplier applied.
///
/// Every line must resolve to a catalog ingredient and convert into its
/// base unit; the first failure aborts the whole sum.
pub fn ingredient_cost_per_portion(
    settings: &Settings,
    catalog: &Catalog,
    recipe: &Recipe,
) -> Result<f64> {
    let loss_pct = recipe
        .loss_percent
        .filter(|p| p.is_finite())
        .unwrap_or(settings.defaults.loss_percent);
    let loss_factor = 1.0 + loss_pct.max(0.0);

    let mut portion_cost = 0.0;
    for line in &recipe.ingredients {
        let ingredient = catalog
            .ingredient(&line.ingredient_id)
            .ok_or_else(|| PricingError::IngredientNotFound(line.ingredient_id.clone()))?;

        let qty_in_base = convert(line.qty, line.unit, ingredient.base_unit)?;
        portion_cost += qty_in_base * finite_or_zero(ingredient.price_per_base_unit);
    }

    Ok(portion_cost * loss_factor)
}

/// Full per-portion cost of a recipe: ingredients + packaging + fixed costs.
///
/// Fails fast in a fixed order: volume assumptions, packaging set, then the
/// ingredient lines. No partial breakdown is returned on failure.
pub fn compute_cost(snapshot: &Snapshot, recipe: &Recipe) -> Result<CostBreakdown> {
    let vat_rate = snapshot.settings.vat_rate(recipe.vat_category);

    let fixed = allocate_fixed_costs(&snapshot.cost_model)?;
    let packaging_cost =
        packaging_cost_per_portion(&snapshot.catalog, recipe.packaging_set_id.as_deref())?;
    let ingredient_cost =
        ingredient_cost_per_portion(&snapshot.settings, &snapshot.catalog, recipe)?;

    let total_cost_per_portion = ingredient_cost + packaging_cost + fixed.per_portion;

    Ok(CostBreakdown {
        ingredient_cost,
        packaging_cost,
        fixed_cost: fixed.per_portion,
        total_cost_per_portion,
        vat_rate,
        vat_category: recipe.vat_category,
    })
}
