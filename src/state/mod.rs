mod manager;
mod persistence;

pub use manager::SnapshotManager;
pub use persistence::{
    export_ingredients_csv, import_ingredients_csv, load_or_init, load_snapshot, save_snapshot,
};
