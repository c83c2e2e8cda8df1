use rand::Rng;

use crate::models::{Ingredient, Recipe, Snapshot};

/// Owns the working snapshot and provides catalog/recipe bookkeeping. The
/// engine never sees this type; it reads the snapshot borrowed per call.
pub struct SnapshotManager {
    snapshot: Snapshot,
}

impl SnapshotManager {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }

    /// Fresh entity id with a random hex suffix, e.g. `ing_1f3a9c2e`.
    pub fn new_id(prefix: &str) -> String {
        let suffix: u32 = rand::thread_rng().r#gen();
        format!("{}_{:08x}", prefix, suffix)
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.snapshot.catalog.ingredient(id)
    }

    /// Find an ingredient by name, case-insensitive.
    pub fn ingredient_by_name(&self, name: &str) -> Option<&Ingredient> {
        let key = name.to_lowercase();
        self.snapshot.catalog.ingredients.iter().find(|i| i.key() == key)
    }

    /// Insert or replace an ingredient, matching on id.
    pub fn upsert_ingredient(&mut self, ingredient: Ingredient) {
        let ingredients = &mut self.snapshot.catalog.ingredients;
        match ingredients.iter_mut().find(|i| i.id == ingredient.id) {
            Some(existing) => *existing = ingredient,
            None => ingredients.push(ingredient),
        }
    }

    /// Remove an ingredient. Recipes keep their references; costing reports
    /// them as missing until the lines are edited.
    pub fn remove_ingredient(&mut self, id: &str) -> bool {
        let ingredients = &mut self.snapshot.catalog.ingredients;
        let before = ingredients.len();
        ingredients.retain(|i| i.id != id);
        ingredients.len() < before
    }

    /// Merge imported ingredients into the catalog, assigning fresh ids to
    /// rows that came in without one. Returns the number of rows applied.
    pub fn import_ingredients(&mut self, imported: Vec<Ingredient>) -> usize {
        let count = imported.len();
        for mut ingredient in imported {
            if ingredient.id.is_empty() {
                ingredient.id = Self::new_id("ing");
            }
            self.upsert_ingredient(ingredient);
        }
        count
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.snapshot.recipe(id)
    }

    pub fn recipe_by_name(&self, name: &str) -> Option<&Recipe> {
        self.snapshot.recipe_by_name(name)
    }

    /// Insert or replace a recipe, matching on id.
    pub fn upsert_recipe(&mut self, recipe: Recipe) {
        let recipes = &mut self.snapshot.recipes;
        match recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => *existing = recipe,
            None => recipes.push(recipe),
        }
    }

    pub fn remove_recipe(&mut self, id: &str) -> bool {
        let recipes = &mut self.snapshot.recipes;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        recipes.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::units::Unit;

    fn sample_ingredient(id: &str, name: &str) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: name.to_string(),
            base_unit: Unit::Kg,
            price_per_base_unit: 1.0,
            supplier: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_upsert_inserts_then_replaces() {
        let mut manager = SnapshotManager::new(Snapshot::empty());
        manager.upsert_ingredient(sample_ingredient("ing_a", "Salt"));
        manager.upsert_ingredient(sample_ingredient("ing_b", "Pepper"));

        let mut updated = sample_ingredient("ing_a", "Sea Salt");
        updated.price_per_base_unit = 2.5;
        manager.upsert_ingredient(updated);

        assert_eq!(manager.snapshot().catalog.ingredients.len(), 2);
        assert_eq!(manager.ingredient("ing_a").unwrap().name, "Sea Salt");
    }

    #[test]
    fn test_lookup_by_name_case_insensitive() {
        let mut manager = SnapshotManager::new(Snapshot::empty());
        manager.upsert_ingredient(sample_ingredient("ing_a", "Salt"));

        assert!(manager.ingredient_by_name("SALT").is_some());
        assert!(manager.ingredient_by_name("sugar").is_none());
    }

    #[test]
    fn test_remove_ingredient_leaves_recipe_reference() {
        use crate::models::{IngredientLine, RecipePricing, VatCategory};

        let mut manager = SnapshotManager::new(Snapshot::empty());
        manager.upsert_ingredient(sample_ingredient("ing_a", "Salt"));
        manager.upsert_recipe(Recipe {
            id: "rec_x".to_string(),
            name: "Fries".to_string(),
            vat_category: VatCategory::Food,
            loss_percent: None,
            packaging_set_id: None,
            pricing: RecipePricing::default(),
            ingredients: vec![IngredientLine {
                ingredient_id: "ing_a".to_string(),
                qty: 5.0,
                unit: Unit::G,
            }],
        });

        assert!(manager.remove_ingredient("ing_a"));
        // The dangling reference stays; the engine reports it at costing time.
        assert_eq!(manager.recipe("rec_x").unwrap().ingredients.len(), 1);
    }

    #[test]
    fn test_import_assigns_missing_ids() {
        let mut manager = SnapshotManager::new(Snapshot::empty());
        let count = manager.import_ingredients(vec![sample_ingredient("", "Salt")]);

        assert_eq!(count, 1);
        let imported = &manager.snapshot().catalog.ingredients[0];
        assert!(imported.id.starts_with("ing_"));
    }

    #[test]
    fn test_new_id_prefix() {
        let id = SnapshotManager::new_id("rec");
        assert!(id.starts_with("rec_"));
        assert_eq!(id.len(), 4 + 8);
    }
}
