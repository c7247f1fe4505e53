// src/lib.rs

//! Cookbook catalog service
//!
//! An in-memory catalog of ingredients and recipes that resolves a recipe
//! into its total cook time and flattened base-ingredient quantities.
//!
//! # Architecture
//!
//! - Normalizer: free-form text to canonical display names
//! - Catalog: name-keyed store of entries with validated insertion
//! - Resolver: recursive expansion of recipes with multiplier propagation
//! - Server (feature `server`): HTTP + JSON transport over the above

pub mod catalog;
mod error;
pub mod normalize;
pub mod resolver;

#[cfg(feature = "server")]
pub mod server;

pub use catalog::{
    Catalog, CatalogCounts, Entry, EntryKind, Ingredient, NewEntry, Recipe, RequiredItem, SeedFile,
};
pub use error::{CatalogError, Error, ResolveError, Result};
pub use normalize::normalize_name;
pub use resolver::{IngredientQuantity, IngredientTotals, Summary, resolve};
