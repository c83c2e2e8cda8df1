use crate::engine::finite_or_zero;
use crate::error::{PricingError, Result};
use crate::models::Catalog;

/// Packaging cost for one portion.
///
/// An absent or empty set id means no packaging and costs nothing. A line
/// whose packaging item no longer exists contributes nothing; a missing set
/// is an error. This asymmetry with the strict ingredient lookup is
/// intentional.
pub fn packaging_cost_per_portion(catalog: &Catalog, packaging_set_id: Option<&str>) -> Result<f64> {
    let id = match packaging_set_id {
        Some(id) if !id.is_empty() => id,
        _ => return Ok(0.0),
    };

    let set = catalog
        .packaging_set(id)
        .ok_or_else(|| PricingError::PackagingSetNotFound(id.to_string()))?;

    let total = set
        .lines
        .iter()
        .filter_map(|line| {
            catalog
                .packaging_item(&line.packaging_item_id)
                .map(|item| finite_or_zero(line.qty) * finite_or_zero(item.price_per_unit))
        })
        .sum();

    Ok(total)
}
