mod catalog;
mod recipe;
mod settings;
mod snapshot;

pub use catalog::{Catalog, Ingredient, PackagingItem, PackagingLine, PackagingSet};
pub use recipe::{IngredientLine, Recipe, RecipePricing, VatCategory};
pub use settings::{
    CostModel, CustomCost, Defaults, FixedBuckets, FixedCostsMonthly, Rounding, Settings,
    VatRates, VolumeAssumptions,
};
pub use snapshot::{Snapshot, DEFAULT_PACKAGING_SET_ID};
