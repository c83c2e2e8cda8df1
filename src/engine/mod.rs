pub mod cost;
pub mod fixed;
pub mod packaging;
pub mod pricing;
pub mod units;

pub use cost::{compute_cost, ingredient_cost_per_portion, CostBreakdown};
pub use fixed::{allocate_fixed_costs, FixedCostAllocation};
pub use packaging::packaging_cost_per_portion;
pub use pricing::{
    derive_price, evaluate_sell_price, round_up_to_step, PricePolicy, PriceResult, SellEvaluation,
};
pub use units::{convert, Unit, UnitGroup};

/// Amounts read from the snapshot are untrusted; non-finite values count as 0.
pub(crate) fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
