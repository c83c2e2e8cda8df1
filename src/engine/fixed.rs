use crate::engine::finite_or_zero;
use crate::error::{PricingError, Result};
use crate::models::CostModel;

/// Monthly fixed costs amortized over the expected portion volume.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedCostAllocation {
    pub per_portion: f64,
    pub monthly_total: f64,
    pub monthly_portions: f64,
}

/// Allocate monthly fixed costs to a single portion.
///
/// A positive override of monthly portions wins over the open-days
/// calculation; an override that is present but invalid blocks pricing
/// rather than falling back.
pub fn allocate_fixed_costs(cost_model: &CostModel) -> Result<FixedCostAllocation> {
    let fixed = &cost_model.fixed_costs_monthly;
    let standard_total: f64 = fixed.standard.values().into_iter().map(finite_or_zero).sum();
    let custom_total: f64 = fixed.custom.iter().map(|c| finite_or_zero(c.amount)).sum();
    let monthly_total = standard_total + custom_total;

    let vol = &cost_model.volume_assumptions;
    let monthly_portions = match vol.override_monthly_portions {
        Some(ov) if ov.is_finite() && ov > 0.0 => ov,
        Some(_) => return Err(PricingError::InvalidVolumeAssumptions),
        None => {
            let days = vol.open_days_per_month;
            let per_day = vol.expected_portions_per_open_day;
            if days.is_finite() && days > 0.0 && per_day.is_finite() && per_day > 0.0 {
                days * per_day
            } else {
                return Err(PricingError::InvalidVolumeAssumptions);
            }
        }
    };

    Ok(FixedCostAllocation {
        per_portion: monthly_total / monthly_portions,
        monthly_total,
        monthly_portions,
    })
}
