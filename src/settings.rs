//! Catalog settings
//!
//! Where the snapshot lives and how long it stays fresh.

use serde::{Deserialize, Serialize};

use crate::consts::{STORAGE_KEY, TTL_MS};

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key under which the whole catalog snapshot is stored
    pub storage_key: String,
    /// Freshness window for the stored snapshot (ms)
    pub ttl_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            ttl_ms: TTL_MS,
        }
    }
}

impl Settings {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_ttl_days(mut self, days: u64) -> Self {
        self.ttl_ms = days.saturating_mul(DAY_MS);
        self
    }
}
