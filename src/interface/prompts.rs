use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::engine::units::{Unit, UnitGroup};
use crate::error::{PricingError, Result};
use crate::models::{
    Defaults, Ingredient, IngredientLine, PackagingSet, Recipe, RecipePricing, VatCategory,
};

/// Parse a number the way users type it: `3.50` and `3,50` both work.
///
/// Locale tolerance lives only at this prompt boundary; the engine accepts
/// already-normalized values.
pub fn parse_number(input: &str) -> Option<f64> {
    let mut s: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if s.is_empty() {
        return None;
    }

    if s.contains(',') && s.contains('.') {
        // German style: dot groups thousands, comma is the decimal mark
        s = s.replace('.', "").replace(',', ".");
    } else if s.contains(',') {
        s = s.replace(',', ".");
    }

    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Prompt for a number, with a default shown in the prompt.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_number(&input).ok_or_else(|| PricingError::InvalidInput(format!("'{}'", input.trim())))
}

/// Prompt for an optional number; empty input means none.
pub fn prompt_optional_number(prompt: &str) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    if input.trim().is_empty() {
        return Ok(None);
    }

    parse_number(&input)
        .map(Some)
        .ok_or_else(|| PricingError::InvalidInput(format!("'{}'", input.trim())))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a unit with a sensible default preselected.
pub fn prompt_unit(prompt: &str, default: Unit) -> Result<Unit> {
    let labels: Vec<&str> = Unit::ALL.iter().map(|u| u.label()).collect();
    let default_idx = Unit::ALL.iter().position(|u| *u == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default_idx)
        .interact()?;

    Ok(Unit::ALL[selection])
}

/// The usual recipe-line unit for an ingredient's base-unit group.
pub fn suggested_line_unit(base_unit: Unit) -> Unit {
    match base_unit.group() {
        UnitGroup::Mass => Unit::G,
        UnitGroup::Volume => Unit::Ml,
        UnitGroup::Count => Unit::Pc,
    }
}

/// Prompt for a VAT category.
pub fn prompt_vat_category(default: VatCategory) -> Result<VatCategory> {
    let options = [VatCategory::Food, VatCategory::Drink];
    let labels: Vec<&str> = options.iter().map(|c| c.label()).collect();
    let default_idx = options.iter().position(|c| *c == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("VAT category")
        .items(&labels)
        .default(default_idx)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for an ingredient by name with fuzzy matching.
///
/// Empty input returns `None`. Exact (case-insensitive) matches win; close
/// names are offered as candidates.
pub fn prompt_ingredient<'a>(ingredients: &'a [Ingredient]) -> Result<Option<&'a Ingredient>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let exact = ingredients
            .iter()
            .find(|i| i.name.to_lowercase() == input.to_lowercase());
        if let Some(ingredient) = exact {
            return Ok(Some(ingredient));
        }

        let mut candidates: Vec<(&Ingredient, f64)> = ingredients
            .iter()
            .map(|i| (i, jaro_winkler(&i.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching ingredient found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let ingredient = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", ingredient.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(ingredient));
            }
            continue;
        }

        let mut options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(i, _)| i.name.clone())
            .collect();
        let shown = options.len();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < shown {
            return Ok(Some(candidates[selection].0));
        }
    }
}

/// Collect a new catalog ingredient. The caller assigns the id.
pub fn collect_new_ingredient() -> Result<Ingredient> {
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let base_unit = prompt_unit("Base unit (price is per one of these)", Unit::Kg)?;
    let price = prompt_number(&format!("Price per {}", base_unit), 0.0)?;
    let supplier: String = Input::new()
        .with_prompt("Supplier")
        .allow_empty(true)
        .interact_text()?;
    let notes: String = Input::new()
        .with_prompt("Notes")
        .allow_empty(true)
        .interact_text()?;

    let ingredient = Ingredient {
        id: String::new(),
        name: name.trim().to_string(),
        base_unit,
        price_per_base_unit: price,
        supplier: supplier.trim().to_string(),
        notes: notes.trim().to_string(),
    };

    if !ingredient.is_valid() {
        return Err(PricingError::InvalidInput(
            "name and a non-negative price are required".to_string(),
        ));
    }

    Ok(ingredient)
}

/// Collect the ingredient lines of a recipe, one per loop iteration.
pub fn collect_recipe_lines(ingredients: &[Ingredient]) -> Result<Vec<IngredientLine>> {
    let mut lines = Vec::new();

    while let Some(ingredient) = prompt_ingredient(ingredients)? {
        let unit = prompt_unit("Unit", suggested_line_unit(ingredient.base_unit))?;
        let qty = prompt_number(&format!("Quantity ({} per portion)", unit), 0.0)?;

        if !qty.is_finite() || qty <= 0.0 {
            println!("Quantity must be > 0, line skipped.");
            continue;
        }

        lines.push(IngredientLine {
            ingredient_id: ingredient.id.clone(),
            qty,
            unit,
        });
        println!("Added: {} {} {}", qty, unit, ingredient.name);
    }

    Ok(lines)
}

/// Collect a whole new recipe. The caller assigns the id.
pub fn collect_new_recipe(
    ingredients: &[Ingredient],
    packaging_sets: &[PackagingSet],
    defaults: &Defaults,
) -> Result<Recipe> {
    let name: String = Input::new().with_prompt("Recipe name").interact_text()?;
    let vat_category = prompt_vat_category(defaults.vat_category)?;

    let loss_percent =
        prompt_optional_number("Loss percent as a fraction, e.g. 0.05 (Enter for default)")?;

    let packaging_set_id = prompt_packaging_set(packaging_sets, &defaults.packaging_set_id)?;
    let target_margin = prompt_optional_number("Target margin per portion (Enter for none)")?;

    println!("Now add the ingredient lines for one portion.");
    let lines = collect_recipe_lines(ingredients)?;

    let recipe = Recipe {
        id: String::new(),
        name: name.trim().to_string(),
        vat_category,
        loss_percent,
        packaging_set_id,
        pricing: RecipePricing {
            target_margin,
            last_market_gross: None,
            last_sell_gross: None,
        },
        ingredients: lines,
    };

    if !recipe.is_valid() {
        return Err(PricingError::InvalidInput(
            "a recipe needs a name and at least one ingredient line".to_string(),
        ));
    }

    Ok(recipe)
}

/// Prompt for a packaging set; "none" is always an option.
pub fn prompt_packaging_set(
    packaging_sets: &[PackagingSet],
    default_id: &str,
) -> Result<Option<String>> {
    let mut labels: Vec<String> = packaging_sets.iter().map(|s| s.name.clone()).collect();
    labels.push("(no packaging)".to_string());

    let default_idx = packaging_sets
        .iter()
        .position(|s| s.id == default_id)
        .unwrap_or(labels.len() - 1);

    let selection = Select::new()
        .with_prompt("Packaging set")
        .items(&labels)
        .default(default_idx)
        .interact()?;

    Ok(packaging_sets.get(selection).map(|s| s.id.clone()))
}

/// Prompt to pick one recipe out of the stored list.
pub fn prompt_select_recipe<'a>(recipes: &'a [Recipe]) -> Result<&'a Recipe> {
    let labels: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Recipe")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(&recipes[selection])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_plain() {
        assert_eq!(parse_number("3.50"), Some(3.5));
        assert_eq!(parse_number("  12 "), Some(12.0));
    }

    #[test]
    fn test_parse_number_comma_decimal() {
        assert_eq!(parse_number("3,50"), Some(3.5));
        assert_eq!(parse_number("0,02"), Some(0.02));
    }

    #[test]
    fn test_parse_number_thousands_and_decimal() {
        assert_eq!(parse_number("1.234,56"), Some(1234.56));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_suggested_line_unit() {
        assert_eq!(suggested_line_unit(Unit::Kg), Unit::G);
        assert_eq!(suggested_line_unit(Unit::L), Unit::Ml);
        assert_eq!(suggested_line_unit(Unit::Pc), Unit::Pc);
    }
}
