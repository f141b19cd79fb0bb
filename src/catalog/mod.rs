//! Statute catalog
//!
//! - `model`: sections, entries, stable entry ids, keyword invariants
//! - `filter`: pure case-insensitive search
//! - `store`: live catalog with persisted keyword edits
//! - `defaults`: compiled-in dataset

pub mod defaults;
pub mod filter;
pub mod model;
pub mod store;

pub use defaults::default_catalog;
pub use filter::filter;
pub use model::{
    Catalog, CatalogError, EntryId, LawEntry, LawSection, normalize_keywords, validate_keywords,
};
pub use store::{CatalogOrigin, CatalogStore};
