//! Stored snapshot format

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Timestamped wrapper around a catalog snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEnvelope {
    pub data: Catalog,
    /// Epoch ms of the write
    pub timestamp: u64,
}

impl CacheEnvelope {
    pub fn new(data: Catalog, timestamp: u64) -> Self {
        Self { data, timestamp }
    }

    /// Age of the snapshot at `now_ms`; a timestamp in the future counts as 0
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.timestamp)
    }

    /// Strictly older than the freshness window
    pub fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }
}

/// Anything that may be found under the storage key
///
/// Snapshots written before the envelope existed are a bare catalog array
/// and carry no timestamp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StoredSnapshot {
    Envelope(CacheEnvelope),
    Legacy(Catalog),
}

impl StoredSnapshot {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
