//! Catalog snapshot persistence
//!
//! Features:
//! - Timestamped JSON envelope (`{ data, timestamp }`)
//! - Fixed freshness window; expired snapshots are evicted on read
//! - Pre-envelope (bare catalog) snapshots still load
//! - Corruption and quota failures degrade to the caller's fallback

pub mod cache;
pub mod envelope;
pub mod error;

pub use cache::{LoadOutcome, PersistenceCache};
pub use envelope::{CacheEnvelope, StoredSnapshot};
pub use error::CacheError;
