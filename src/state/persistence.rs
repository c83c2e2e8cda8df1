use std::fs;
use std::path::Path;

use crate::engine::units::Unit;
use crate::error::{PricingError, Result};
use crate::models::{Ingredient, Snapshot};

/// Load a snapshot from a JSON file.
///
/// Missing sections are backfilled with their defaults, so documents written
/// by older versions still load.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let content = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&content)?;
    Ok(snapshot)
}

/// Load the snapshot, creating and saving an empty store if the file does
/// not exist yet.
pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let path = path.as_ref();
    if !path.exists() {
        let snapshot = Snapshot::empty();
        save_snapshot(path, &snapshot)?;
        return Ok(snapshot);
    }
    load_snapshot(path)
}

/// Save a snapshot as pretty-printed JSON. Last write wins.
pub fn save_snapshot<P: AsRef<Path>>(path: P, snapshot: &Snapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

const CSV_HEADER: [&str; 6] = ["id", "name", "baseUnit", "pricePerBaseUnit", "supplier", "notes"];

/// Export the ingredient catalog as delimited rows.
pub fn export_ingredients_csv<P: AsRef<Path>>(path: P, ingredients: &[Ingredient]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for ing in ingredients {
        let price = ing.price_per_base_unit.to_string();
        writer.write_record([
            ing.id.as_str(),
            ing.name.as_str(),
            ing.base_unit.label(),
            price.as_str(),
            ing.supplier.as_str(),
            ing.notes.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Import ingredients from a CSV file written by [`export_ingredients_csv`].
///
/// Rows may leave the id blank; the caller assigns fresh ids on upsert.
pub fn import_ingredients_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Ingredient>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut ingredients = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("").trim().to_string();

        let base_unit = Unit::parse(&field(2)).ok_or_else(|| {
            PricingError::InvalidInput(format!("row {}: unknown unit '{}'", row + 2, field(2)))
        })?;
        let price: f64 = field(3).parse().map_err(|_| {
            PricingError::InvalidInput(format!("row {}: invalid price '{}'", row + 2, field(3)))
        })?;

        ingredients.push(Ingredient {
            id: field(0),
            name: field(1),
            base_unit,
            price_per_base_unit: price,
            supplier: field(4),
            notes: field(5),
        });
    }

    Ok(ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_ingredient() -> Ingredient {
        Ingredient {
            id: "ing_flour".to_string(),
            name: "Flour".to_string(),
            base_unit: Unit::Kg,
            price_per_base_unit: 0.89,
            supplier: "Metro".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut snapshot = Snapshot::empty();
        snapshot.catalog.ingredients.push(sample_ingredient());

        let file = NamedTempFile::new().unwrap();
        save_snapshot(file.path(), &snapshot).unwrap();

        let reloaded = load_snapshot(file.path()).unwrap();
        assert_eq!(reloaded.catalog.ingredients.len(), 1);
        assert_eq!(reloaded.catalog.ingredients[0].name, "Flour");
    }

    #[test]
    fn test_load_or_init_creates_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricing_data.json");

        let snapshot = load_or_init(&path).unwrap();
        assert!(path.exists());
        assert!(snapshot.catalog.packaging_sets.iter().any(|s| s.id == "pack_default"));
    }

    #[test]
    fn test_csv_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        export_ingredients_csv(file.path(), &[sample_ingredient()]).unwrap();

        let imported = import_ingredients_csv(file.path()).unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].base_unit, Unit::Kg);
        assert_eq!(imported[0].price_per_base_unit, 0.89);
    }

    #[test]
    fn test_csv_rejects_unknown_unit() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            "id,name,baseUnit,pricePerBaseUnit,supplier,notes\n,Flour,oz,0.89,,\n",
        )
        .unwrap();

        assert!(import_ingredients_csv(file.path()).is_err());
    }
}
