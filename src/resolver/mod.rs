// src/resolver/mod.rs

//! Recipe resolution
//!
//! Resolving a recipe expands its required items depth-first. Every item's
//! quantity is scaled by the multiplier of the recipe that contains it, so a
//! sub-recipe needed three times contributes three times its own totals.
//! Ingredients add `cook_time * quantity` to the total time and their
//! quantity to the ingredient totals; sub-recipes are expanded once and their
//! result is scaled into every recipe that needs them.
//!
//! The expansion walks an explicit stack of frames rather than recursing, so
//! arbitrarily deep catalogs never grow the thread's call stack. Each
//! recipe's expansion is computed once per resolution and reused, which keeps
//! shared sub-recipes (diamonds) linear in the size of the catalog.
//!
//! # Failure
//!
//! Resolution is all-or-nothing. The first unknown item, cycle or arithmetic
//! overflow aborts the whole expansion and no partial summary is returned.
//! A sub-recipe whose own totals overflow fails the resolution even when it
//! is needed zero times.
//!
//! # Cycles
//!
//! The chain of recipes currently being expanded is tracked; meeting one of
//! them again is reported as [`ResolveError::CyclicReference`]. The same
//! sub-recipe reached along two separate branches (a diamond) is not a cycle.

mod totals;

pub use totals::{IngredientQuantity, IngredientTotals};

use crate::catalog::{Catalog, Entry, Ingredient, Recipe};
use crate::error::ResolveError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Fully resolved recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    /// Total cook time across every base ingredient
    pub cook_time: u64,
    /// Base ingredients with total quantities, ordered by name
    pub ingredients: Vec<IngredientQuantity>,
}

/// Resolve the recipe called `name` into its summary
pub fn resolve(catalog: &Catalog, name: &str) -> Result<Summary, ResolveError> {
    let recipe = catalog
        .get(name)
        .and_then(Entry::as_recipe)
        .ok_or_else(|| ResolveError::NotFound(name.to_string()))?;

    let expansion = Resolver::new(catalog).expand(recipe)?;
    debug!(
        "Resolved '{}': cook time {}, {} base ingredients",
        recipe.name,
        expansion.cook_time,
        expansion.totals.len()
    );

    Ok(Summary {
        name: recipe.name.clone(),
        cook_time: expansion.cook_time,
        ingredients: expansion.totals.into_quantities(),
    })
}

/// Cook time and ingredient totals of one recipe, made once
#[derive(Debug, Default)]
struct Expansion {
    cook_time: u64,
    totals: IngredientTotals,
}

impl Expansion {
    /// Add `quantity` units of a base ingredient
    ///
    /// Returns `None` on overflow, leaving the expansion unchanged.
    fn add_ingredient(&mut self, ingredient: &Ingredient, quantity: u64) -> Option<()> {
        let cook_time = ingredient
            .cook_time
            .checked_mul(quantity)?
            .checked_add(self.cook_time)?;
        self.totals.add(&ingredient.name, quantity)?;
        self.cook_time = cook_time;
        Some(())
    }

    /// Add `other`, needed `factor` times
    ///
    /// Returns `None` on overflow, leaving the expansion unchanged.
    fn absorb(&mut self, other: &Expansion, factor: u64) -> Option<()> {
        let cook_time = other
            .cook_time
            .checked_mul(factor)?
            .checked_add(self.cook_time)?;
        self.totals.merge_scaled(&other.totals, factor)?;
        self.cook_time = cook_time;
        Some(())
    }
}

/// A recipe whose required items are being expanded
struct Frame<'a> {
    recipe: &'a Recipe,
    /// How many times the enclosing recipe needs this one
    quantity: u64,
    /// Index of the next required item
    next: usize,
    expansion: Expansion,
}

struct Resolver<'a> {
    catalog: &'a Catalog,
    /// Recipes currently being expanded, outermost first
    stack: Vec<Frame<'a>>,
    on_stack: HashSet<&'a str>,
    /// Finished expansions, keyed by recipe name
    resolved: HashMap<&'a str, Expansion>,
}

impl<'a> Resolver<'a> {
    fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            stack: Vec::new(),
            on_stack: HashSet::new(),
            resolved: HashMap::new(),
        }
    }

    fn expand(mut self, root: &'a Recipe) -> Result<Expansion, ResolveError> {
        let catalog = self.catalog;
        self.enter(root, 1)?;

        while let Some(frame) = self.stack.last_mut() {
            let recipe = frame.recipe;
            let Some(item) = recipe.required_items.get(frame.next) else {
                self.leave()?;
                continue;
            };
            frame.next += 1;

            let overflow = || ResolveError::Overflow(recipe.name.clone());
            match catalog.get(&item.name) {
                None => {
                    warn!("Recipe '{}' requires unknown item '{}'", recipe.name, item.name);
                    return Err(ResolveError::UnknownItem);
                }
                Some(Entry::Ingredient(ingredient)) => {
                    frame
                        .expansion
                        .add_ingredient(ingredient, item.quantity)
                        .ok_or_else(overflow)?;
                }
                Some(Entry::Recipe(sub_recipe)) => {
                    match self.resolved.get(sub_recipe.name.as_str()) {
                        Some(done) => frame
                            .expansion
                            .absorb(done, item.quantity)
                            .ok_or_else(overflow)?,
                        None => self.enter(sub_recipe, item.quantity)?,
                    }
                }
            }
        }

        Ok(self.resolved.remove(root.name.as_str()).unwrap_or_default())
    }

    /// Push a frame for `recipe`, failing if it is already being expanded
    fn enter(&mut self, recipe: &'a Recipe, quantity: u64) -> Result<(), ResolveError> {
        if !self.on_stack.insert(recipe.name.as_str()) {
            let start = self
                .stack
                .iter()
                .position(|frame| frame.recipe.name == recipe.name)
                .unwrap_or(0);
            let mut cycle: Vec<String> = self.stack[start..]
                .iter()
                .map(|frame| frame.recipe.name.clone())
                .collect();
            cycle.push(recipe.name.clone());
            warn!("Cyclic reference while resolving: {}", cycle.join(" -> "));
            return Err(ResolveError::CyclicReference(cycle));
        }

        self.stack.push(Frame {
            recipe,
            quantity,
            next: 0,
            expansion: Expansion::default(),
        });
        Ok(())
    }

    /// Pop the finished top frame and scale it into its parent
    fn leave(&mut self) -> Result<(), ResolveError> {
        let Some(frame) = self.stack.pop() else {
            return Ok(());
        };
        let recipe: &'a Recipe = frame.recipe;
        self.on_stack.remove(recipe.name.as_str());

        if let Some(parent) = self.stack.last_mut() {
            parent
                .expansion
                .absorb(&frame.expansion, frame.quantity)
                .ok_or_else(|| ResolveError::Overflow(parent.recipe.name.clone()))?;
        }

        self.resolved.insert(recipe.name.as_str(), frame.expansion);
        Ok(())
    }
}
