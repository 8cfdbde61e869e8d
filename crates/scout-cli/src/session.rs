//! The input-event pipeline: input event → recompute filtered view → render.
//!
//! A [`Session`] owns the loaded catalog and the current filter state, the
//! only mutable state in the program. Category and type changes recompute
//! immediately; text changes go through the debouncer and recompute when
//! [`InputEvent::DebounceElapsed`] arrives on the session channel.

use std::time::Duration;

use scout_core::{Catalog, Entry, ServerType};
use scout_render::GridView;
use scout_search::{Debouncer, FilterState, filter};
use tokio::sync::mpsc;

/// One user input change, decoupled from any UI toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The search text changed. Recomputes after the quiet period.
    SearchChanged(String),
    /// The category selection changed (`None` clears it). Recomputes
    /// immediately.
    CategorySelected(Option<String>),
    /// The type selection changed (`None` clears it). Recomputes
    /// immediately.
    TypeSelected(Option<ServerType>),
    /// Reset all criteria and show the full catalog.
    ClearFilters,
    /// The debounce quiet period elapsed; run the deferred recompute.
    DebounceElapsed,
}

/// The outcome of one filter pass: the filtered subset and its rendered
/// view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPass {
    pub filtered: Vec<Entry>,
    pub view: GridView,
}

/// Owns the catalog, the filter state, and the debounce timer.
pub struct Session {
    catalog: Catalog,
    filter_state: FilterState,
    debouncer: Debouncer<InputEvent>,
}

impl Session {
    /// Create a session over a loaded catalog. Debounce messages are
    /// delivered on `tx`; the caller owns the receiving end and feeds them
    /// back through [`Session::apply`].
    #[must_use]
    pub fn new(catalog: Catalog, quiet_period: Duration, tx: mpsc::Sender<InputEvent>) -> Self {
        Self {
            catalog,
            filter_state: FilterState::default(),
            debouncer: Debouncer::new(quiet_period, tx),
        }
    }

    /// Apply one input event. Returns the new filter pass when the event
    /// triggered a recompute, or `None` when the recompute was deferred to
    /// the debouncer.
    pub fn apply(&mut self, event: InputEvent) -> Option<FilterPass> {
        match event {
            InputEvent::SearchChanged(text) => {
                self.filter_state.search_term = text;
                self.debouncer.schedule(InputEvent::DebounceElapsed);
                None
            }
            InputEvent::CategorySelected(category) => {
                self.filter_state.category = category;
                Some(self.refresh())
            }
            InputEvent::TypeSelected(server_type) => {
                self.filter_state.server_type = server_type;
                Some(self.refresh())
            }
            InputEvent::ClearFilters => {
                self.debouncer.cancel();
                self.filter_state.clear();
                Some(self.refresh())
            }
            InputEvent::DebounceElapsed => Some(self.refresh()),
        }
    }

    /// Run a filter pass from the current state and render it.
    #[must_use]
    pub fn refresh(&self) -> FilterPass {
        let filtered = filter(&self.catalog.servers, &self.filter_state);
        tracing::debug!(
            matched = filtered.len(),
            total = self.catalog.len(),
            "filter pass"
        );
        let view = GridView::render(&filtered, &self.catalog.categories);
        FilterPass { filtered, view }
    }

    #[must_use]
    pub fn filter_state(&self) -> &FilterState {
        &self.filter_state
    }
}
