//! Server type enum for Scout.
//!
//! The wire representation matches the catalog document exactly (`Local` /
//! `Remote`); [`ServerType::parse`] additionally accepts the lowercase forms
//! typed at the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ServerType
// ---------------------------------------------------------------------------

/// Whether a catalog entry runs locally or is hosted remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerType {
    Local,
    Remote,
}

impl ServerType {
    /// Return the string representation used in the catalog document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Remote => "Remote",
        }
    }

    /// Parse a user-typed value, case-insensitively. Returns `None` for
    /// anything that is not `local` or `remote`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Some(Self::Local),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
