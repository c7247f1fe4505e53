// src/catalog/seed.rs

//! Catalog seed files
//!
//! A seed file is a TOML document listing entries in insertion order, using
//! the same field names as the HTTP insertion payload:
//!
//! ```toml
//! [[entry]]
//! type = "ingredient"
//! name = "Egg"
//! cookTime = 5
//!
//! [[entry]]
//! type = "recipe"
//! name = "Omelette"
//! requiredItems = [{ name = "Egg", quantity = 2 }]
//! ```
//!
//! Every entry goes through the regular validator. Seeding is read-only with
//! respect to the file; nothing is ever written back.

use super::{Catalog, NewEntry};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Parsed seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default, rename = "entry")]
    pub entries: Vec<NewEntry>,
}

impl SeedFile {
    /// Load a seed file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse seed file: {}", path.display()))
    }

    /// Parse seed entries from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Insert every entry into `catalog`, in file order
    ///
    /// Stops at the first rejected entry. Entries before it stay inserted.
    pub fn apply(self, catalog: &mut Catalog) -> Result<usize> {
        let count = self.entries.len();

        for (index, entry) in self.entries.into_iter().enumerate() {
            let label = entry
                .name
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "<unnamed>".to_string());

            catalog
                .insert(entry)
                .with_context(|| format!("Seed entry #{} ({}) was rejected", index + 1, label))?;
        }

        info!("Seeded catalog with {} entries", count);
        Ok(count)
    }
}

impl Catalog {
    /// Build a catalog from a seed file
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let mut catalog = Self::new();
        SeedFile::load(path)?.apply(&mut catalog)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EntryKind, RequiredItem};
    use crate::error::CatalogError;

    const BRUNCH: &str = r#"
[[entry]]
type = "ingredient"
name = "Egg"
cookTime = 5

[[entry]]
type = "recipe"
name = "Omelette"
requiredItems = [{ name = "Egg", quantity = 2 }]

[[entry]]
type = "recipe"
name = "Brunch"
requiredItems = [{ name = "Omelette", quantity = 3 }]
"#;

    #[test]
    fn test_parse_and_apply() {
        let seed = SeedFile::parse(BRUNCH).unwrap();
        assert_eq!(seed.entries.len(), 3);

        let mut catalog = Catalog::new();
        assert_eq!(seed.apply(&mut catalog).unwrap(), 3);
        assert_eq!(catalog.get("Egg").unwrap().kind(), EntryKind::Ingredient);

        let brunch = catalog.get("Brunch").and_then(|e| e.as_recipe()).unwrap();
        assert_eq!(brunch.required_items, vec![RequiredItem::new("Omelette", 3)]);
    }

    #[test]
    fn test_empty_seed() {
        let seed = SeedFile::parse("").unwrap();
        let mut catalog = Catalog::new();
        assert_eq!(seed.apply(&mut catalog).unwrap(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rejected_entry_aborts() {
        let content = r#"
[[entry]]
type = "ingredient"
name = "Egg"
cookTime = 5

[[entry]]
type = "ingredient"
name = "Egg"
cookTime = 6
"#;
        let mut catalog = Catalog::new();
        let err = SeedFile::parse(content)
            .unwrap()
            .apply(&mut catalog)
            .unwrap_err();

        assert!(err.to_string().contains("#2"));
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::DuplicateName("Egg".to_string()))
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, BRUNCH).unwrap();

        let catalog = Catalog::from_seed_file(&path).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_missing_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_seed_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read seed file"));
    }
}
