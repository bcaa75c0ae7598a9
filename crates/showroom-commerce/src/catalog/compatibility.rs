//! Option compatibility rules.

use crate::catalog::VehicleOption;
use crate::ids::OptionId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of mutually-exclusive option pairs.
///
/// Built from the one-sided declarations on option records, stored as a
/// symmetric closure: a pair declared from either side conflicts in both
/// directions. Administrators edit the relation through `insert` and
/// `remove`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompatibilitySet {
    pairs: HashSet<(OptionId, OptionId)>,
}

impl CompatibilitySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the symmetric closure from option records.
    pub fn from_options<'a>(options: impl IntoIterator<Item = &'a VehicleOption>) -> Self {
        let mut set = Self::new();
        for option in options {
            for other in &option.incompatible_with {
                set.insert(option.id.clone(), other.clone());
            }
        }
        set
    }

    /// Declare two options mutually exclusive. Self-pairs are ignored.
    pub fn insert(&mut self, a: OptionId, b: OptionId) {
        if a == b {
            return;
        }
        self.pairs.insert(Self::canonical(a, b));
    }

    /// Remove a rule. Returns true if the pair was present.
    pub fn remove(&mut self, a: &OptionId, b: &OptionId) -> bool {
        self.pairs
            .remove(&Self::canonical(a.clone(), b.clone()))
    }

    /// Check whether two options are mutually exclusive.
    pub fn are_incompatible(&self, a: &OptionId, b: &OptionId) -> bool {
        a != b && self.pairs.contains(&Self::canonical(a.clone(), b.clone()))
    }

    /// Collect the members of `selected` that conflict with `candidate`,
    /// sorted for deterministic reporting.
    pub fn conflicts_with<'a>(
        &self,
        candidate: &OptionId,
        selected: impl IntoIterator<Item = &'a OptionId>,
    ) -> Vec<OptionId> {
        let mut conflicts: Vec<OptionId> = selected
            .into_iter()
            .filter(|id| self.are_incompatible(candidate, id))
            .cloned()
            .collect();
        conflicts.sort();
        conflicts
    }

    /// Number of declared pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if no rules are declared.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn canonical(a: OptionId, b: OptionId) -> (OptionId, OptionId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn option(id: &str) -> VehicleOption {
        let mut opt = VehicleOption::new(id, Money::new(100, Currency::XAF));
        opt.id = OptionId::new(id);
        opt
    }

    #[test]
    fn test_symmetric_closure_from_one_sided_data() {
        let mut a = option("a");
        let b = option("b");
        a.declare_incompatibility(b.id.clone());

        let set = CompatibilitySet::from_options([&a, &b]);

        assert!(set.are_incompatible(&a.id, &b.id));
        assert!(set.are_incompatible(&b.id, &a.id));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_both_sided_declaration_stored_once() {
        let mut a = option("a");
        let mut b = option("b");
        a.declare_incompatibility(b.id.clone());
        b.declare_incompatibility(a.id.clone());

        let set = CompatibilitySet::from_options([&a, &b]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_conflicts_with_reports_all() {
        let mut set = CompatibilitySet::new();
        set.insert(OptionId::new("x"), OptionId::new("a"));
        set.insert(OptionId::new("x"), OptionId::new("c"));

        let selected = vec![OptionId::new("a"), OptionId::new("b"), OptionId::new("c")];
        let conflicts = set.conflicts_with(&OptionId::new("x"), selected.iter());

        assert_eq!(conflicts, vec![OptionId::new("a"), OptionId::new("c")]);
    }

    #[test]
    fn test_option_never_conflicts_with_itself() {
        let mut set = CompatibilitySet::new();
        set.insert(OptionId::new("a"), OptionId::new("a"));

        assert!(set.is_empty());
        assert!(!set.are_incompatible(&OptionId::new("a"), &OptionId::new("a")));
    }

    #[test]
    fn test_remove_rule() {
        let mut set = CompatibilitySet::new();
        set.insert(OptionId::new("a"), OptionId::new("b"));

        // Removal works from either side
        assert!(set.remove(&OptionId::new("b"), &OptionId::new("a")));
        assert!(!set.are_incompatible(&OptionId::new("a"), &OptionId::new("b")));
        assert!(!set.remove(&OptionId::new("a"), &OptionId::new("b")));
    }
}
