use std::{io::Write, path::PathBuf};

use tempfile::TempDir;
use wayfarer_core::{store::seed::sample_plans, PlanStore, PlanStoreBuilder};

/// Store seeded with the built-in sample collection, independent of any
/// user-level seed file.
pub fn create_sample_store() -> PlanStore {
    PlanStoreBuilder::new()
        .with_plans(sample_plans())
        .build()
        .expect("Failed to build store")
}

/// Write `contents` to a seed file inside a fresh temporary directory.
pub fn write_seed_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("seed.json");
    let mut file = std::fs::File::create(&path).expect("Failed to create seed file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write seed file");
    (temp_dir, path)
}
