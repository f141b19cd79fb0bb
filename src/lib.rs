//! Taxlaw Catalog - searchable acquisition-tax statute references
//!
//! Core modules:
//! - `catalog`: Law sections/entries, live search, keyword mutation
//! - `keywords`: Keyword editing draft (trim, dedupe, cap)
//! - `persistence`: Timestamped envelope with expiry over a key-value store
//! - `platform`: Browser/native storage, clock and link handling
//! - `settings`: Storage key and freshness window

pub mod catalog;
pub mod keywords;
pub mod persistence;
pub mod platform;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use catalog::{
    Catalog, CatalogError, CatalogOrigin, CatalogStore, EntryId, LawEntry, LawSection,
    default_catalog, filter,
};
pub use keywords::KeywordDraft;
pub use persistence::{CacheEnvelope, CacheError, LoadOutcome, PersistenceCache};
pub use settings::Settings;

/// Catalog constants
pub mod consts {
    /// LocalStorage key holding the catalog snapshot
    pub const STORAGE_KEY: &str = "acquisitionTaxLaws";

    /// Freshness window for a stored snapshot: 2 years in ms (365-day years)
    pub const TTL_MS: u64 = 2 * 365 * 24 * 60 * 60 * 1000;

    /// Maximum keyword tags per law entry
    pub const MAX_KEYWORDS: usize = 7;
}
