// src/catalog/mod.rs

//! In-memory recipe catalog
//!
//! The catalog maps an entry name to either an ingredient (a leaf with a
//! fixed cook time) or a recipe (a list of named sub-items with quantities).
//!
//! # Invariants
//!
//! - Entry names are unique keys and never change once inserted
//! - A recipe's required items have pairwise-distinct names
//! - Entries are only ever added, through [`Catalog::insert`]
//!
//! Required items may name entries that do not exist yet. Those forward
//! references are only checked when a recipe is resolved.

mod seed;
mod validate;

pub use seed::SeedFile;
pub use validate::NewEntry;

use crate::error::CatalogError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Kind of a catalog entry, as named on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Recipe,
    Ingredient,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Ingredient => "ingredient",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recipe" => Ok(Self::Recipe),
            "ingredient" => Ok(Self::Ingredient),
            other => Err(CatalogError::UnsupportedType(other.to_string())),
        }
    }
}

/// A base ingredient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Time to prepare one unit
    pub cook_time: u64,
}

/// One line of a recipe: another entry referenced by name, times a quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A composite entry built from other entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Ingredient(_) => EntryKind::Ingredient,
            Self::Recipe(_) => EntryKind::Recipe,
        }
    }

    /// The recipe inside this entry, if it is one
    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Recipe(recipe) => Some(recipe),
            Self::Ingredient(_) => None,
        }
    }
}

/// Entry counts by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub recipes: usize,
    pub ingredients: usize,
}

/// The catalog store
#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, Entry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a new entry
    ///
    /// Insertion is atomic: on any rejection the catalog is left untouched.
    pub fn insert(&mut self, entry: NewEntry) -> Result<(), CatalogError> {
        let entry = entry.validate(self)?;
        debug!("Adding {} '{}' to catalog", entry.kind(), entry.name());
        self.entries.insert(entry.name().to_string(), entry);
        Ok(())
    }

    /// Look up an entry by exact name
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count entries of each kind
    pub fn counts(&self) -> CatalogCounts {
        self.entries
            .values()
            .fold(CatalogCounts::default(), |mut counts, entry| {
                match entry.kind() {
                    EntryKind::Recipe => counts.recipes += 1,
                    EntryKind::Ingredient => counts.ingredients += 1,
                }
                counts
            })
    }
}
