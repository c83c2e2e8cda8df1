pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{PricingError, Result};
pub use models::{Recipe, Snapshot};
