use clap::{Parser, Subcommand};

/// FoodtruckPricing: cost and minimum-price calculator for one-portion recipes.
#[derive(Parser, Debug)]
#[command(name = "foodtruck_pricing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the pricing data JSON file.
    #[arg(short, long, default_value = "pricing_data.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cost a recipe and derive its minimum sellable price.
    Calc {
        /// Recipe name; prompted for when omitted.
        recipe: Option<String>,

        /// Price for a target margin share of net revenue (e.g. 25 for 25%)
        /// instead of the recipe's absolute margin target.
        #[arg(long)]
        margin_pct: Option<f64>,

        /// Evaluate a sell price against the market afterwards.
        #[arg(long)]
        check_price: bool,
    },

    /// List the ingredient catalog.
    Ingredients {
        /// Interactively add a new ingredient.
        #[arg(long)]
        add: bool,
    },

    /// List recipes.
    Recipes {
        /// Interactively add a new recipe.
        #[arg(long)]
        add: bool,
    },

    /// Write the whole data snapshot to a JSON file.
    Export { path: String },

    /// Replace the data snapshot from a JSON file.
    Import { path: String },

    /// Write the ingredient catalog to a CSV file.
    ExportCsv { path: String },

    /// Merge ingredients from a CSV file into the catalog.
    ImportCsv { path: String },

    /// Replace the store with an empty snapshot.
    Reset,
}

impl Default for Command {
    fn default() -> Self {
        Command::Calc {
            recipe: None,
            margin_pct: None,
            check_price: false,
        }
    }
}
