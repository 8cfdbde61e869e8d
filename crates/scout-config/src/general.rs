//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default debounce quiet period in milliseconds.
const fn default_debounce_ms() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Quiet period before a text change triggers a filter recompute.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Default result limit for list output. 0 means unlimited.
    #[serde(default)]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            default_limit: 0,
        }
    }
}
