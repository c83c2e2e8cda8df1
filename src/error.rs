use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Invalid VAT category: {0}")]
    InvalidVatCategory(String),

    #[error("Open days/portions per day must be > 0 (or override monthly portions)")]
    InvalidVolumeAssumptions,

    #[error("Packaging set not found: {0}")]
    PackagingSetNotFound(String),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Unit conversion not possible: {0} -> {1}")]
    IncompatibleUnits(String, String),

    #[error("Target margin must be > 0")]
    InvalidTarget,

    #[error("Target margin % must be between 0 and <100")]
    InvalidMarginPercent,

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PricingError>;
