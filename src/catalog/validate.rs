// src/catalog/validate.rs

//! Admission checks for new catalog entries
//!
//! [`NewEntry`] mirrors the loosely typed insertion payload as it arrives on
//! the wire (or from a seed file). Validation turns it into a typed [`Entry`]
//! or rejects it. Checks run in a fixed order and stop at the first failure:
//!
//! 1. name is a non-empty string
//! 2. name is not already taken
//! 3. type is `recipe` or `ingredient`
//! 4. recipe items each carry a name and quantity, with no repeated names
//! 5. ingredient cook time is a non-negative integer

use super::{Catalog, Entry, EntryKind, Ingredient, Recipe, RequiredItem};
use crate::error::CatalogError;
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashSet;

/// Insertion payload for a catalog entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    /// `"recipe"` or `"ingredient"`
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    /// Recipes only; a missing list means no items
    #[serde(default)]
    pub required_items: Option<Value>,
    /// Ingredients only
    #[serde(default)]
    pub cook_time: Option<Value>,
}

impl NewEntry {
    /// Payload for an ingredient
    pub fn ingredient(name: &str, cook_time: i64) -> Self {
        Self {
            kind: Some(json!("ingredient")),
            name: Some(json!(name)),
            required_items: None,
            cook_time: Some(json!(cook_time)),
        }
    }

    /// Payload for a recipe from `(name, quantity)` pairs
    pub fn recipe(name: &str, items: &[(&str, u64)]) -> Self {
        let items = items
            .iter()
            .map(|(item, quantity)| json!({ "name": item, "quantity": quantity }))
            .collect();

        Self {
            kind: Some(json!("recipe")),
            name: Some(json!(name)),
            required_items: Some(Value::Array(items)),
            cook_time: None,
        }
    }

    /// Check this payload against `catalog` and build the typed entry
    pub(super) fn validate(&self, catalog: &Catalog) -> Result<Entry, CatalogError> {
        let name = match &self.name {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => return Err(CatalogError::InvalidName),
        };

        if catalog.contains(&name) {
            return Err(CatalogError::DuplicateName(name));
        }

        let kind: EntryKind = match &self.kind {
            Some(Value::String(kind)) => kind.parse()?,
            Some(other) => return Err(CatalogError::UnsupportedType(other.to_string())),
            None => return Err(CatalogError::UnsupportedType(String::new())),
        };

        match kind {
            EntryKind::Recipe => Ok(Entry::Recipe(Recipe {
                name,
                required_items: self.parse_required_items()?,
            })),
            EntryKind::Ingredient => {
                let cook_time = self
                    .cook_time
                    .as_ref()
                    .and_then(Value::as_u64)
                    .ok_or(CatalogError::InvalidCookTime)?;
                Ok(Entry::Ingredient(Ingredient { name, cook_time }))
            }
        }
    }

    fn parse_required_items(&self) -> Result<Vec<RequiredItem>, CatalogError> {
        let items = match &self.required_items {
            None => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(CatalogError::MalformedRequiredItem),
        };

        let mut seen = HashSet::with_capacity(items.len());
        let mut parsed = Vec::with_capacity(items.len());

        for value in items {
            let item = parse_required_item(value)?;
            if !seen.insert(item.name.clone()) {
                return Err(CatalogError::DuplicateRequiredItem(item.name));
            }
            parsed.push(item);
        }

        Ok(parsed)
    }
}

fn parse_required_item(value: &Value) -> Result<RequiredItem, CatalogError> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .ok_or(CatalogError::MalformedRequiredItem)?;
    let quantity = value
        .get("quantity")
        .and_then(Value::as_u64)
        .ok_or(CatalogError::MalformedRequiredItem)?;

    Ok(RequiredItem::new(name, quantity))
}
