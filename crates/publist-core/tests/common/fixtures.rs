//! Test fixture loading utilities

use std::path::PathBuf;

use publist_core::Dataset;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load the sample publication dataset
pub fn load_dataset() -> Dataset {
    Dataset::from_json(&load_fixture("publications.json"))
        .unwrap_or_else(|e| panic!("Invalid publications fixture: {}", e))
}
