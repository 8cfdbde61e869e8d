//! Two-state grid view.
//!
//! After every filter pass the view is rebuilt from scratch: either the
//! grid is shown with one card per entry, or the dedicated empty state is
//! shown instead. There are no other states.

use std::collections::BTreeMap;

use scout_core::{CategoryInfo, Entry};

use crate::html::server_card;

/// Which of the two mutually exclusive display states is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridState {
    /// The grid is visible and the empty-state panel hidden.
    ResultsShown,
    /// The grid is hidden and the empty-state panel shown.
    EmptyState,
}

/// The rendered view of one filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    /// Display state, determined solely by whether the filtered set is empty.
    pub state: GridState,
    /// Visible count of matching entries.
    pub count: usize,
    /// Concatenated card fragments; empty in the empty state.
    pub grid_html: String,
}

impl GridView {
    /// Build the view for a filtered set.
    #[must_use]
    pub fn render(filtered: &[Entry], categories: &BTreeMap<String, CategoryInfo>) -> Self {
        if filtered.is_empty() {
            return Self {
                state: GridState::EmptyState,
                count: 0,
                grid_html: String::new(),
            };
        }

        let grid_html = filtered
            .iter()
            .map(|entry| server_card(entry, categories))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            state: GridState::ResultsShown,
            count: filtered.len(),
            grid_html,
        }
    }

    /// Render the view as an HTML fragment: the result counter plus either
    /// the visible grid or the dedicated empty-state panel.
    #[must_use]
    pub fn to_fragment(&self) -> String {
        let counter = format!(
            r#"<p class="results-count"><span id="resultCount">{}</span> servers</p>"#,
            self.count
        );
        match self.state {
            GridState::ResultsShown => format!(
                "{counter}\n<div class=\"servers-grid\" id=\"serversGrid\">\n{}\n</div>",
                self.grid_html
            ),
            GridState::EmptyState => format!(
                "{counter}\n<div class=\"no-results\" id=\"noResults\"><i class=\"fas fa-search\"></i><p>No servers match the current filters.</p></div>"
            ),
        }
    }
}
