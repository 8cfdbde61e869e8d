//! Catalog document types.
//!
//! The catalog is a single static JSON document of shape
//! `{ "servers": [...], "categories": {...} }`. It is deserialized once at
//! startup and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::ServerType;

/// One catalog record describing a listed MCP server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub description: String,
    /// Category key into [`Catalog::categories`].
    pub category: String,
    #[serde(rename = "type")]
    pub server_type: ServerType,
    /// Source repository URL, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Live endpoint URL for remotely hosted servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<EntryLinks>,
}

/// Optional named outbound links attached to an entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub releases: Option<String>,
}

/// Display metadata for a category, keyed by category key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Human-readable category name.
    pub name: String,
    /// Icon identifier (e.g. `fas fa-database`).
    pub icon: String,
}

/// The full catalog document: entries plus category metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    pub servers: Vec<Entry>,
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryInfo>,
}

impl Catalog {
    /// Number of entries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Look up display metadata for a category key.
    #[must_use]
    pub fn category_info(&self, key: &str) -> Option<&CategoryInfo> {
        self.categories.get(key)
    }
}
