//! Pure filtering of catalog entries.

use scout_core::{Entry, ServerType};

/// The current combination of active search criteria.
///
/// Mutated only by input-event handlers; the filtered view is recomputed
/// from scratch on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search term. Trimmed and matched case-insensitively;
    /// empty matches everything.
    pub search_term: String,
    /// Exact category key, or `None` to match all categories.
    pub category: Option<String>,
    /// Exact server type, or `None` to match both.
    pub server_type: Option<ServerType>,
}

impl FilterState {
    /// Reset to the initial all-empty state (no active criteria).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether no criteria are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.category.is_none()
            && self.server_type.is_none()
    }

    /// Whether `entry` satisfies all active criteria (logical AND).
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        let term = self.search_term.trim().to_lowercase();
        let matches_search = term.is_empty()
            || entry.name.to_lowercase().contains(&term)
            || entry.description.to_lowercase().contains(&term)
            || entry.category.to_lowercase().contains(&term);

        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|category| entry.category == category);

        let matches_type = self
            .server_type
            .is_none_or(|server_type| entry.server_type == server_type);

        matches_search && matches_category && matches_type
    }
}

/// Compute the filtered subset of `entries` satisfying `state`.
///
/// A stable filter: the result is an ordered subsequence of `entries`, no
/// re-sort. With no active criteria the result equals the input.
#[must_use]
pub fn filter(entries: &[Entry], state: &FilterState) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| state.matches(entry))
        .cloned()
        .collect()
}
