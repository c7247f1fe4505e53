// src/error.rs

//! Error types for catalog operations
//!
//! Every error here is scoped to the single request that triggered it.
//! Nothing is retried and nothing is fatal to the process.

use thiserror::Error;

/// Rejections raised while admitting a new entry into the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid name.")]
    InvalidName,

    #[error("Please make entry names unique! '{0}' already exists")]
    DuplicateName(String),

    #[error("You can only add recipes or ingredients into the cookbook (got '{0}')")]
    UnsupportedType(String),

    #[error("requiredItems should consist of name and quantity, try again!")]
    MalformedRequiredItem,

    #[error("Items can only have one element per name ('{0}' repeated)")]
    DuplicateRequiredItem(String),

    #[error("The cooking time should be greater than or equal to zero.")]
    InvalidCookTime,
}

/// Failures while resolving a recipe into its summary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Recipe not found or is not a recipe: '{0}'")]
    NotFound(String),

    /// Some required item (at any depth) is missing from the catalog.
    /// The missing name is logged at the point of detection.
    #[error("Recipe contains unknown items")]
    UnknownItem,

    #[error("Recipe contains a cyclic reference: {}", .0.join(" -> "))]
    CyclicReference(Vec<String>),

    #[error("Quantities in recipe '{0}' are too large to total")]
    Overflow(String),
}

/// Crate-level error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Invalid recipe name: '{0}' normalizes to nothing")]
    InvalidNormalizationInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
