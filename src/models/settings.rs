use serde::{Deserialize, Serialize};

use crate::models::recipe::VatCategory;

/// VAT rates per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VatRates {
    pub food: f64,
    pub drink: f64,
}

impl Default for VatRates {
    fn default() -> Self {
        Self {
            food: 0.07,
            drink: 0.19,
        }
    }
}

/// Price rounding policy. Prices only ever round up, in multiples of `step`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rounding {
    pub step: f64,
}

impl Default for Rounding {
    fn default() -> Self {
        Self { step: 0.10 }
    }
}

/// Fallback values applied when a recipe leaves a field unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Defaults {
    pub vat_category: VatCategory,
    pub packaging_set_id: String,
    pub loss_percent: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            vat_category: VatCategory::Food,
            packaging_set_id: "pack_default".to_string(),
            loss_percent: 0.02,
        }
    }
}

/// Session-wide configuration read by every calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub vat_rates: VatRates,
    pub rounding: Rounding,
    pub defaults: Defaults,
}

impl Settings {
    pub fn vat_rate(&self, category: VatCategory) -> f64 {
        match category {
            VatCategory::Food => self.vat_rates.food,
            VatCategory::Drink => self.vat_rates.drink,
        }
    }
}

/// The standard monthly fixed-cost buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedBuckets {
    pub rent: f64,
    pub insurance: f64,
    pub phone_internet: f64,
    pub equipment_leasing: f64,
    pub accounting: f64,
    pub other: f64,
}

impl FixedBuckets {
    pub fn values(&self) -> [f64; 6] {
        [
            self.rent,
            self.insurance,
            self.phone_internet,
            self.equipment_leasing,
            self.accounting,
            self.other,
        ]
    }
}

/// A user-labeled monthly fixed cost outside the standard buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCost {
    pub label: String,
    pub amount: f64,
}

/// Standard buckets plus arbitrary custom lines, all monthly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedCostsMonthly {
    pub standard: FixedBuckets,
    pub custom: Vec<CustomCost>,
}

/// Expected sales volume, used to amortize fixed costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeAssumptions {
    pub open_days_per_month: f64,
    pub expected_portions_per_open_day: f64,

    /// Direct monthly-portion count; wins over the per-day calculation.
    pub override_monthly_portions: Option<f64>,
}

impl Default for VolumeAssumptions {
    fn default() -> Self {
        Self {
            open_days_per_month: 12.0,
            expected_portions_per_open_day: 80.0,
            override_monthly_portions: None,
        }
    }
}

/// Fixed operating costs and the volume they are spread over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostModel {
    pub fixed_costs_monthly: FixedCostsMonthly,
    pub volume_assumptions: VolumeAssumptions,
}
