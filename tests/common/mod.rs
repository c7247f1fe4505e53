// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use cookbook::{Catalog, NewEntry};

/// Seed file describing a small brunch menu.
pub const BRUNCH_SEED: &str = r#"
[[entry]]
type = "ingredient"
name = "Egg"
cookTime = 5

[[entry]]
type = "ingredient"
name = "Bread"
cookTime = 2

[[entry]]
type = "recipe"
name = "Omelette"
requiredItems = [{ name = "Egg", quantity = 2 }]

[[entry]]
type = "recipe"
name = "Brunch"
requiredItems = [{ name = "Omelette", quantity = 3 }]

[[entry]]
type = "recipe"
name = "Eggy Toast"
requiredItems = [
    { name = "Bread", quantity = 2 },
    { name = "Egg", quantity = 1 },
]
"#;

/// Create a catalog holding Egg{5}, Omelette[Egg x2] and Brunch[Omelette x3].
pub fn brunch_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(NewEntry::ingredient("Egg", 5)).unwrap();
    catalog
        .insert(NewEntry::recipe("Omelette", &[("Egg", 2)]))
        .unwrap();
    catalog
        .insert(NewEntry::recipe("Brunch", &[("Omelette", 3)]))
        .unwrap();
    catalog
}

/// Write `content` to a file inside a fresh temp dir.
///
/// Returns (TempDir, path) - keep the TempDir alive to prevent cleanup.
pub fn write_temp_file(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
