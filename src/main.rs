use clap::Parser;
use std::path::Path;

use foodtruck_pricing_rs::cli::{Cli, Command};
use foodtruck_pricing_rs::engine::{compute_cost, derive_price, evaluate_sell_price, PricePolicy};
use foodtruck_pricing_rs::error::Result;
use foodtruck_pricing_rs::interface::{
    collect_new_ingredient, collect_new_recipe, display_cost_breakdown, display_ingredient_list,
    display_price_result, display_recipe_list, display_sell_evaluation, prompt_optional_number,
    prompt_select_recipe, prompt_yes_no,
};
use foodtruck_pricing_rs::models::Snapshot;
use foodtruck_pricing_rs::state::{
    export_ingredients_csv, import_ingredients_csv, load_or_init, load_snapshot, save_snapshot,
    SnapshotManager,
};
use foodtruck_pricing_rs::PricingError;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calc {
            recipe,
            margin_pct,
            check_price,
        } => cmd_calc(&cli.file, recipe.as_deref(), margin_pct, check_price),
        Command::Ingredients { add } => cmd_ingredients(&cli.file, add),
        Command::Recipes { add } => cmd_recipes(&cli.file, add),
        Command::Export { path } => cmd_export(&cli.file, &path),
        Command::Import { path } => cmd_import(&cli.file, &path),
        Command::ExportCsv { path } => cmd_export_csv(&cli.file, &path),
        Command::ImportCsv { path } => cmd_import_csv(&cli.file, &path),
        Command::Reset => cmd_reset(&cli.file),
    }
}

/// Cost a recipe, derive its minimum price, optionally check a sell price.
fn cmd_calc(
    file_path: &str,
    recipe_name: Option<&str>,
    margin_pct: Option<f64>,
    check_price: bool,
) -> Result<()> {
    let snapshot = load_or_init(file_path)?;
    let mut manager = SnapshotManager::new(snapshot);

    if manager.snapshot().recipes.is_empty() {
        println!("No recipes yet. Add one with 'recipes --add'.");
        return Ok(());
    }

    let recipe = match recipe_name {
        Some(name) => manager
            .recipe_by_name(name)
            .ok_or_else(|| PricingError::RecipeNotFound(name.to_string()))?
            .clone(),
        None => prompt_select_recipe(&manager.snapshot().recipes)?.clone(),
    };

    let breakdown = compute_cost(manager.snapshot(), &recipe)?;
    display_cost_breakdown(&recipe.name, &breakdown);

    // An absent margin target surfaces as InvalidTarget, like any other
    // unusable target value.
    let policy = match margin_pct {
        Some(pct) => PricePolicy::TargetMarginPct(pct / 100.0),
        None => PricePolicy::TargetMargin(recipe.pricing.target_margin.unwrap_or(f64::NAN)),
    };

    let step = manager.snapshot().settings.rounding.step;
    match derive_price(breakdown.total_cost_per_portion, breakdown.vat_rate, policy, step) {
        Ok(price) => display_price_result(&price),
        // The cost breakdown above stays valid; only pricing failed.
        Err(e) => println!("\nPricing: {}", e),
    }

    if check_price {
        let sell_gross = prompt_optional_number("Your sell price, gross (Enter to skip)")?;
        let market_gross = prompt_optional_number("Market price, gross (Enter to skip)")?;

        if let Some(sell) = sell_gross {
            let eval =
                evaluate_sell_price(breakdown.total_cost_per_portion, breakdown.vat_rate, sell);
            let gap = market_gross.map(|market| sell - market);
            display_sell_evaluation(sell, &eval, gap);
        }

        if sell_gross.is_some() || market_gross.is_some() {
            let mut updated = recipe.clone();
            updated.pricing.last_sell_gross = sell_gross.or(updated.pricing.last_sell_gross);
            updated.pricing.last_market_gross = market_gross.or(updated.pricing.last_market_gross);
            manager.upsert_recipe(updated);

            if prompt_yes_no("Remember these prices on the recipe?", true)? {
                save_snapshot(file_path, manager.snapshot())?;
                println!("Saved.");
            }
        }
    }

    Ok(())
}

/// List the ingredient catalog, or add to it.
fn cmd_ingredients(file_path: &str, add: bool) -> Result<()> {
    let snapshot = load_or_init(file_path)?;
    let mut manager = SnapshotManager::new(snapshot);

    if !add {
        display_ingredient_list(&manager.snapshot().catalog.ingredients);
        return Ok(());
    }

    let mut ingredient = collect_new_ingredient()?;
    ingredient.id = SnapshotManager::new_id("ing");
    println!("Added: {} ({} per {})", ingredient.name, ingredient.price_per_base_unit, ingredient.base_unit);

    manager.upsert_ingredient(ingredient);
    save_snapshot(file_path, manager.snapshot())?;
    println!("Saved.");

    Ok(())
}

/// List recipes, or add one interactively.
fn cmd_recipes(file_path: &str, add: bool) -> Result<()> {
    let snapshot = load_or_init(file_path)?;
    let mut manager = SnapshotManager::new(snapshot);

    if !add {
        display_recipe_list(&manager.snapshot().recipes);
        return Ok(());
    }

    if manager.snapshot().catalog.ingredients.is_empty() {
        println!("The catalog is empty. Add ingredients first with 'ingredients --add'.");
        return Ok(());
    }

    let mut recipe = collect_new_recipe(
        &manager.snapshot().catalog.ingredients,
        &manager.snapshot().catalog.packaging_sets,
        &manager.snapshot().settings.defaults,
    )?;
    recipe.id = SnapshotManager::new_id("rec");
    println!("Added: {} ({} lines)", recipe.name, recipe.ingredients.len());

    manager.upsert_recipe(recipe);
    save_snapshot(file_path, manager.snapshot())?;
    println!("Saved.");

    Ok(())
}

/// Write the snapshot to another JSON file.
fn cmd_export(file_path: &str, target: &str) -> Result<()> {
    let snapshot = load_or_init(file_path)?;
    save_snapshot(target, &snapshot)?;
    println!("Exported snapshot to {}", target);
    Ok(())
}

/// Replace the store with a snapshot read from another JSON file.
fn cmd_import(file_path: &str, source: &str) -> Result<()> {
    if !Path::new(source).exists() {
        println!("File not found: {}", source);
        return Ok(());
    }

    let snapshot = load_snapshot(source)?;

    if Path::new(file_path).exists()
        && !prompt_yes_no("This replaces the current store. Continue?", false)?
    {
        return Ok(());
    }

    save_snapshot(file_path, &snapshot)?;
    println!(
        "Imported {} ingredients and {} recipes.",
        snapshot.catalog.ingredients.len(),
        snapshot.recipes.len()
    );
    Ok(())
}

/// Write the ingredient catalog as CSV.
fn cmd_export_csv(file_path: &str, target: &str) -> Result<()> {
    let snapshot = load_or_init(file_path)?;
    export_ingredients_csv(target, &snapshot.catalog.ingredients)?;
    println!(
        "Exported {} ingredients to {}",
        snapshot.catalog.ingredients.len(),
        target
    );
    Ok(())
}

/// Merge ingredients from a CSV file into the catalog.
fn cmd_import_csv(file_path: &str, source: &str) -> Result<()> {
    if !Path::new(source).exists() {
        println!("File not found: {}", source);
        return Ok(());
    }

    let snapshot = load_or_init(file_path)?;
    let mut manager = SnapshotManager::new(snapshot);

    let imported = import_ingredients_csv(source)?;
    let count = manager.import_ingredients(imported);

    save_snapshot(file_path, manager.snapshot())?;
    println!("Imported {} ingredients.", count);
    Ok(())
}

/// Replace the store with an empty snapshot.
fn cmd_reset(file_path: &str) -> Result<()> {
    if Path::new(file_path).exists()
        && !prompt_yes_no("This deletes all stored data. Continue?", false)?
    {
        return Ok(());
    }

    save_snapshot(file_path, &Snapshot::empty())?;
    println!("Store reset.");
    Ok(())
}
