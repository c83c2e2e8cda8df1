use foodtruck_pricing_rs::engine::Unit;
use foodtruck_pricing_rs::models::{Ingredient, Snapshot, VatCategory};
use foodtruck_pricing_rs::state::{
    export_ingredients_csv, import_ingredients_csv, load_or_init, load_snapshot, save_snapshot,
    SnapshotManager,
};

fn sample_ingredient(id: &str, name: &str) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        base_unit: Unit::Kg,
        price_per_base_unit: 2.49,
        supplier: "Metro".to_string(),
        notes: "organic".to_string(),
    }
}

#[test]
fn test_snapshot_roundtrip_preserves_everything() {
    let mut snapshot = Snapshot::empty();
    snapshot
        .catalog
        .ingredients
        .push(sample_ingredient("ing_flour", "Flour"));
    snapshot.settings.rounding.step = 0.05;
    snapshot.cost_model.fixed_costs_monthly.standard.rent = 750.0;

    let file = tempfile::NamedTempFile::new().unwrap();
    save_snapshot(file.path(), &snapshot).unwrap();
    let reloaded = load_snapshot(file.path()).unwrap();

    assert_eq!(reloaded.settings.rounding.step, 0.05);
    assert_eq!(reloaded.cost_model.fixed_costs_monthly.standard.rent, 750.0);
    assert_eq!(reloaded.catalog.ingredients[0].notes, "organic");
}

#[test]
fn test_partial_document_is_backfilled() {
    // A minimal hand-written store: only a recipe list, everything else absent.
    let json = r#"{
        "recipes": [{
            "id": "rec_cola",
            "name": "Cola",
            "vatCategory": "drink",
            "ingredients": [{"ingredientId": "ing_cola", "qty": 1, "unit": "stk"}]
        }]
    }"#;

    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), json).unwrap();

    let snapshot = load_snapshot(file.path()).unwrap();
    assert_eq!(snapshot.settings.vat_rates.drink, 0.19);
    assert_eq!(snapshot.recipes[0].vat_category, VatCategory::Drink);
    // The legacy piece spelling maps onto the canonical unit.
    assert_eq!(snapshot.recipes[0].ingredients[0].unit, Unit::Pc);
}

#[test]
fn test_load_or_init_seeds_default_packaging_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pricing_data.json");

    let snapshot = load_or_init(&path).unwrap();
    assert!(snapshot.catalog.packaging_set("pack_default").is_some());

    // Second load reads the file it just wrote.
    let again = load_or_init(&path).unwrap();
    assert_eq!(
        again.catalog.packaging_sets.len(),
        snapshot.catalog.packaging_sets.len()
    );
}

#[test]
fn test_csv_roundtrip_and_merge() {
    let mut manager = SnapshotManager::new(Snapshot::empty());
    manager.upsert_ingredient(sample_ingredient("ing_flour", "Flour"));
    manager.upsert_ingredient(sample_ingredient("ing_sugar", "Sugar"));

    let file = tempfile::NamedTempFile::new().unwrap();
    export_ingredients_csv(file.path(), &manager.snapshot().catalog.ingredients).unwrap();

    let mut other = SnapshotManager::new(Snapshot::empty());
    let imported = import_ingredients_csv(file.path()).unwrap();
    assert_eq!(other.import_ingredients(imported), 2);

    let flour = other.ingredient("ing_flour").unwrap();
    assert_eq!(flour.name, "Flour");
    assert_eq!(flour.base_unit, Unit::Kg);
    assert_eq!(flour.price_per_base_unit, 2.49);
    assert_eq!(flour.supplier, "Metro");
}
