use crate::engine::{CostBreakdown, PriceResult, SellEvaluation};
use crate::models::{Ingredient, Recipe};

/// Format a currency amount with two decimals.
pub fn format_money(v: f64) -> String {
    format!("{:.2} EUR", v)
}

/// Format a fraction as a percentage with one decimal.
pub fn format_pct(v: f64) -> String {
    format!("{:.1} %", v * 100.0)
}

/// Display the per-portion cost components of a recipe.
pub fn display_cost_breakdown(name: &str, breakdown: &CostBreakdown) {
    println!();
    println!("=== Cost per portion: {} ===", name);
    println!();
    println!("  Ingredients : {:>10}", format_money(breakdown.ingredient_cost));
    println!("  Packaging   : {:>10}", format_money(breakdown.packaging_cost));
    println!("  Fixed costs : {:>10}", format_money(breakdown.fixed_cost));
    println!("  Total       : {:>10}", format_money(breakdown.total_cost_per_portion));
    println!();
    println!(
        "  VAT: {} ({})",
        format_pct(breakdown.vat_rate),
        breakdown.vat_category.label()
    );
}

/// Display the derived minimum price and the margin it realizes.
pub fn display_price_result(price: &PriceResult) {
    println!();
    println!("--- Minimum price ---");
    println!("  Gross (rounded up) : {:>10}", format_money(price.gross_rounded));
    println!("  Net implied        : {:>10}", format_money(price.net_implied));
    println!(
        "  Realized margin    : {:>10}  ({} of net)",
        format_money(price.realized_margin_amount),
        format_pct(price.realized_margin_pct)
    );
}

/// Display the evaluation of a manually entered sell price.
pub fn display_sell_evaluation(sell_gross: f64, eval: &SellEvaluation, gap_to_market: Option<f64>) {
    println!();
    println!("--- Sell price check ---");
    println!("  Sell price (gross) : {:>10}", format_money(sell_gross));
    println!("  Net                : {:>10}", format_money(eval.net));
    println!(
        "  Margin             : {:>10}  ({} of net)",
        format_money(eval.margin_amount),
        format_pct(eval.margin_pct)
    );
    if let Some(gap) = gap_to_market {
        println!("  Gap to market      : {:>10}", format_money(gap));
    }
}

/// Display the ingredient catalog as an aligned table.
pub fn display_ingredient_list(ingredients: &[Ingredient]) {
    if ingredients.is_empty() {
        println!("No ingredients yet. Add one with 'ingredients --add'.");
        return;
    }

    println!();
    println!("=== Ingredients ({}) ===", ingredients.len());
    println!();

    let max_name_len = ingredients.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for ing in ingredients {
        let supplier = if ing.supplier.is_empty() {
            String::new()
        } else {
            format!("  [{}]", ing.supplier)
        };

        println!(
            "  {:<width$}  {:>10} / {}{}",
            ing.name,
            format_money(ing.price_per_base_unit),
            ing.base_unit,
            supplier,
            width = max_name_len
        );
    }

    println!();
}

/// Display the recipe list with category and margin target.
pub fn display_recipe_list(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes yet. Add one with 'recipes --add'.");
        return;
    }

    println!();
    println!("=== Recipes ({}) ===", recipes.len());
    println!();

    let max_name_len = recipes.iter().map(|r| r.name.len()).max().unwrap_or(10);

    for recipe in recipes {
        let target = match recipe.pricing.target_margin {
            Some(margin) => format_money(margin),
            None => "-".to_string(),
        };

        println!(
            "  {:<width$}  {:<5}  {} lines  target {}",
            recipe.name,
            recipe.vat_category.label(),
            recipe.ingredients.len(),
            target,
            width = max_name_len
        );
    }

    println!();
}
