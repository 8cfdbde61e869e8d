//! Helpers shared across command handlers.

use anyhow::Context;
use scout_catalog::{CatalogClient, CatalogSource};
use scout_core::{Catalog, Entry, ServerType};
use scout_search::FilterState;
use serde::Serialize;

use crate::cli::root_commands::FilterArgs;
use crate::progress::Progress;

/// User-facing message shown when the catalog cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load MCP servers. Please try again later.";

/// Load the catalog once, with a spinner on interactive terminals.
pub async fn load_catalog(source: &CatalogSource) -> anyhow::Result<Catalog> {
    let progress = Progress::spinner("loading catalog...");
    let result = CatalogClient::new().load(source).await;
    match &result {
        Ok(catalog) => {
            progress.finish_clear();
            tracing::debug!(entries = catalog.len(), "catalog loaded");
        }
        Err(_) => progress.finish_err("catalog load failed"),
    }
    result.context("failed to load catalog")
}

/// Build a [`FilterState`] from one-shot CLI filter flags.
pub fn filter_state_from_args(args: &FilterArgs) -> anyhow::Result<FilterState> {
    let server_type = match args.server_type.as_deref() {
        None => None,
        Some(value) => Some(ServerType::parse(value).with_context(|| {
            format!("invalid server type '{value}' (expected 'local' or 'remote')")
        })?),
    };

    Ok(FilterState {
        search_term: args.search.clone(),
        category: args.category.clone(),
        server_type,
    })
}

/// One row of `scout list` / `scout browse` output.
#[derive(Debug, Serialize)]
pub struct ListRow {
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub server_type: String,
    pub description: String,
}

/// Map filtered entries to output rows, applying the result limit
/// (0 = unlimited).
#[must_use]
pub fn rows_from_entries(entries: &[Entry], limit: u32) -> Vec<ListRow> {
    let take = if limit == 0 {
        entries.len()
    } else {
        usize::try_from(limit).unwrap_or(usize::MAX)
    };
    entries
        .iter()
        .take(take)
        .map(|entry| ListRow {
            name: entry.name.clone(),
            category: entry.category.clone(),
            server_type: entry.server_type.to_string(),
            description: entry.description.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn filter_state_from_empty_args_is_empty() {
        let state = filter_state_from_args(&FilterArgs::default()).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn filter_state_parses_server_type() {
        let args = FilterArgs {
            search: "alp".to_string(),
            category: Some("db".to_string()),
            server_type: Some("remote".to_string()),
            limit: None,
        };
        let state = filter_state_from_args(&args).unwrap();
        assert_eq!(state.search_term, "alp");
        assert_eq!(state.category.as_deref(), Some("db"));
        assert_eq!(state.server_type, Some(ServerType::Remote));
    }

    #[test]
    fn filter_state_rejects_unknown_server_type() {
        let args = FilterArgs {
            server_type: Some("hybrid".to_string()),
            ..FilterArgs::default()
        };
        let error = filter_state_from_args(&args).unwrap_err();
        assert!(error.to_string().contains("hybrid"));
    }

    #[test]
    fn rows_respect_limit() {
        let catalog: Catalog = serde_json::from_str(
            r#"{
                "servers": [
                    { "name": "Alpha", "description": "a", "category": "db", "type": "Local" },
                    { "name": "Beta", "description": "b", "category": "web", "type": "Remote" },
                    { "name": "Gamma", "description": "c", "category": "db", "type": "Local" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(rows_from_entries(&catalog.servers, 0).len(), 3);
        let limited = rows_from_entries(&catalog.servers, 2);
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].name, "Alpha");
        assert_eq!(limited[1].server_type, "Remote");
    }
}
