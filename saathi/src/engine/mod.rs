//! # List Filter/Sort Engine
//!
//! Pure functions deriving display-ready subsequences from the in-memory
//! lists the views hold (inventory, mandi prices, crop recommendations).
//!
//! Shared contract across all three modules:
//!
//! - The source slice is never mutated; results are fresh vectors.
//! - Active predicates combine with logical AND (search ∧ category ∧
//!   toggles); sentinel values ("no filter", empty search) are the
//!   identity.
//! - Sorting is stable (`slice::sort_by` is a stable sort), so ties keep
//!   their source order.
//! - Unknown category/sort-key strings parse to `None`/the default key and
//!   behave as pass-through — stale view state must never panic.
//! - Empty source in, empty result out.
//!
//! [`FilterOutcome`] carries both the surviving items and whether any
//! filter was active, so a caller can tell "nothing to show" apart from
//! "nothing matched".

pub mod inventory;
pub mod market;
pub mod recommend;

/// Result of applying a filter state to a source list.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<T> {
    /// Surviving records, in sorted order.
    pub items: Vec<T>,
    /// True when at least one non-sentinel filter was applied. Lets the UI
    /// show "no results" rather than "no data" for an empty `items`.
    pub filtered: bool,
}

impl<T> FilterOutcome<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Case-insensitive substring match used by every search box.
pub(crate) fn matches_search(haystacks: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    haystacks
        .iter()
        .any(|hay| hay.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_search_empty_term_is_identity() {
        assert!(matches_search(&["DAP Fertilizer"], ""));
    }

    #[test]
    fn test_matches_search_case_insensitive() {
        assert!(matches_search(&["DAP Fertilizer", "डीएपी उर्वरक"], "dap"));
        assert!(matches_search(&["DAP Fertilizer", "डीएपी उर्वरक"], "उर्वरक"));
        assert!(!matches_search(&["DAP Fertilizer", "डीएपी उर्वरक"], "urea"));
    }
}
