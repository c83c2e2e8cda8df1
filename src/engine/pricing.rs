use crate::error::{PricingError, Result};

/// Round a price up to the next multiple of `step`.
///
/// Integer-scaled to dodge floating-point step-division artifacts:
/// `ceil(value * round(1/step)) / round(1/step)`.
pub fn round_up_to_step(value: f64, step: f64) -> f64 {
    let inv = (1.0 / step).round();
    (value * inv).ceil() / inv
}

/// How the minimum price for a recipe is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricePolicy {
    /// Fixed contribution margin in currency per portion.
    TargetMargin(f64),
    /// Contribution margin as a share of net revenue, strictly between 0 and 1.
    TargetMarginPct(f64),
}

/// Minimum sellable price and the margin it actually realizes.
///
/// `realized_margin_amount` is computed from the rounded gross price, so it
/// is never below the requested margin.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceResult {
    pub gross_rounded: f64,
    pub net_implied: f64,
    pub realized_margin_amount: f64,
    pub realized_margin_pct: f64,
}

/// Derive the minimum gross price for a cost under the given policy.
///
/// The gross price only ever rounds up, so the realized margin share of net
/// revenue is at least the requested one.
pub fn derive_price(
    cost_per_portion: f64,
    vat_rate: f64,
    policy: PricePolicy,
    rounding_step: f64,
) -> Result<PriceResult> {
    let net = match policy {
        PricePolicy::TargetMargin(amount) => {
            if !amount.is_finite() || amount <= 0.0 {
                return Err(PricingError::InvalidTarget);
            }
            cost_per_portion + amount
        }
        PricePolicy::TargetMarginPct(pct) => {
            if !pct.is_finite() || pct <= 0.0 || pct >= 1.0 {
                return Err(PricingError::InvalidMarginPercent);
            }
            cost_per_portion / (1.0 - pct)
        }
    };

    let gross_raw = net * (1.0 + vat_rate);
    let gross_rounded = round_up_to_step(gross_raw, rounding_step);
    let net_implied = gross_rounded / (1.0 + vat_rate);

    let realized_margin_amount = net_implied - cost_per_portion;
    let realized_margin_pct = if net_implied > 0.0 {
        realized_margin_amount / net_implied
    } else {
        0.0
    };

    Ok(PriceResult {
        gross_rounded,
        net_implied,
        realized_margin_amount,
        realized_margin_pct,
    })
}

/// Implied net price and margin for a manually entered gross sell price.
#[derive(Debug, Clone, PartialEq)]
pub struct SellEvaluation {
    pub net: f64,
    pub margin_amount: f64,
    pub margin_pct: f64,
}

/// Evaluate a gross sell price against the cost per portion.
pub fn evaluate_sell_price(cost_per_portion: f64, vat_rate: f64, sell_gross: f64) -> SellEvaluation {
    let net = sell_gross / (1.0 + vat_rate);
    let margin_amount = net - cost_per_portion;
    let margin_pct = if net > 0.0 { margin_amount / net } else { 0.0 };

    SellEvaluation {
        net,
        margin_amount,
        margin_pct,
    }
}
