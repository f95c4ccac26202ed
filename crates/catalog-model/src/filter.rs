//! Filter selections over the catalog.
//!
//! `FilterState` is pure data; the predicate evaluation lives in
//! `catalog-core`. The category selection is a set, and an *empty* set is a
//! defined state that matches no record at all. Pre-populating the set with
//! every known category (the "show everything" default) is a UI concern,
//! supported here by [`FilterState::with_all_categories`].

use crate::record::{OrphanFlag, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Orphan filter selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrphanChoice {
    /// Every record passes the orphan predicate.
    #[default]
    All,
    Yes,
    No,
}

impl OrphanChoice {
    /// All selector values, in UI order.
    pub const fn all() -> &'static [OrphanChoice] {
        &[Self::All, Self::Yes, Self::No]
    }

    /// Display name for UI.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Whether a record with the given flag passes this selector.
    pub fn matches(&self, flag: OrphanFlag) -> bool {
        match self {
            Self::All => true,
            Self::Yes => flag == OrphanFlag::Yes,
            Self::No => flag == OrphanFlag::No,
        }
    }
}

/// The current combination of orphan and category filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub orphan: OrphanChoice,
    /// Category membership set. Empty means "match nothing", not "match all".
    pub categories: BTreeSet<String>,
}

impl FilterState {
    /// Filter that passes every record: orphan `All`, categories
    /// pre-populated with every category present in `records`.
    pub fn with_all_categories(records: &[Record]) -> Self {
        Self {
            orphan: OrphanChoice::All,
            categories: records.iter().map(|r| r.category.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orphan_choice_matches() {
        assert!(OrphanChoice::All.matches(OrphanFlag::Yes));
        assert!(OrphanChoice::All.matches(OrphanFlag::No));
        assert!(OrphanChoice::Yes.matches(OrphanFlag::Yes));
        assert!(!OrphanChoice::Yes.matches(OrphanFlag::No));
        assert!(!OrphanChoice::No.matches(OrphanFlag::Yes));
    }

    #[test]
    fn default_filter_has_empty_category_set() {
        let filter = FilterState::default();
        assert_eq!(filter.orphan, OrphanChoice::All);
        assert!(filter.categories.is_empty());
    }
}
