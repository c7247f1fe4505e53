// src/resolver/totals.rs

//! Per-ingredient quantity accumulator

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Quantity of one base ingredient in a resolved summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: u64,
}

/// Running totals of base-ingredient quantities
///
/// Keys iterate in ascending name order, which is also the order of the
/// summary output. Every update is all-or-nothing: when a total would
/// overflow, the accumulator is left exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientTotals {
    totals: BTreeMap<String, u64>,
}

impl IngredientTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` to the running total for `name`
    ///
    /// Returns the new total, or `None` on overflow.
    pub fn add(&mut self, name: &str, quantity: u64) -> Option<u64> {
        let total = self.total_after(name, quantity)?;
        self.totals.insert(name.to_string(), total);
        Some(total)
    }

    /// Sum every total of `other`, multiplied by `factor`, into this one
    ///
    /// Returns `None` on overflow, before anything is changed.
    pub fn merge_scaled(&mut self, other: &IngredientTotals, factor: u64) -> Option<()> {
        let updated = other
            .totals
            .iter()
            .map(|(name, quantity)| {
                let total = self.total_after(name, quantity.checked_mul(factor)?)?;
                Some((name.clone(), total))
            })
            .collect::<Option<Vec<_>>>()?;

        self.totals.extend(updated);
        Some(())
    }

    fn total_after(&self, name: &str, quantity: u64) -> Option<u64> {
        self.totals
            .get(name)
            .copied()
            .unwrap_or(0)
            .checked_add(quantity)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn into_quantities(self) -> Vec<IngredientQuantity> {
        self.totals
            .into_iter()
            .map(|(name, quantity)| IngredientQuantity { name, quantity })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity(name: &str, quantity: u64) -> IngredientQuantity {
        IngredientQuantity {
            name: name.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_add_sums_on_conflict() {
        let mut totals = IngredientTotals::new();
        assert_eq!(totals.add("Egg", 2), Some(2));
        assert_eq!(totals.add("Egg", 3), Some(5));
        assert_eq!(totals.add("Flour", 1), Some(1));
        assert_eq!(totals.len(), 2);
        assert_eq!(
            totals.into_quantities(),
            vec![quantity("Egg", 5), quantity("Flour", 1)]
        );
    }

    #[test]
    fn test_merge_scaled() {
        let mut left = IngredientTotals::new();
        left.add("Egg", 2);
        left.add("Milk", 1);

        let mut right = IngredientTotals::new();
        right.add("Egg", 4);
        right.add("Butter", 1);

        left.merge_scaled(&right, 3).unwrap();
        assert_eq!(
            left.into_quantities(),
            vec![
                quantity("Butter", 3),
                quantity("Egg", 14),
                quantity("Milk", 1),
            ]
        );
    }

    #[test]
    fn test_add_overflow_leaves_total_unchanged() {
        let mut totals = IngredientTotals::new();
        totals.add("Salt", u64::MAX);
        assert_eq!(totals.add("Salt", 1), None);
        assert_eq!(totals.into_quantities(), vec![quantity("Salt", u64::MAX)]);
    }

    #[test]
    fn test_merge_overflow_leaves_totals_unchanged() {
        let mut totals = IngredientTotals::new();
        totals.add("Apple", 1);
        totals.add("Salt", u64::MAX);

        let mut other = IngredientTotals::new();
        other.add("Apple", 1);
        other.add("Pepper", 1);
        other.add("Salt", 1);

        let before = totals.clone();
        assert_eq!(totals.merge_scaled(&other, 1), None);
        assert_eq!(totals, before);

        let mut huge = IngredientTotals::new();
        huge.add("Pepper", 2);
        assert_eq!(totals.merge_scaled(&huge, u64::MAX), None);
        assert_eq!(totals, before);
    }

    #[test]
    fn test_empty() {
        let totals = IngredientTotals::new();
        assert!(totals.is_empty());
        assert!(totals.into_quantities().is_empty());
    }
}
