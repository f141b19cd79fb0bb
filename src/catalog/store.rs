//! Catalog store
//!
//! Owns the live catalog for one view instance. Reads the persisted override
//! once at startup, and re-persists the whole catalog after every keyword
//! edit. All calls run to completion on the caller's thread.

use super::filter::filter;
use super::model::{Catalog, CatalogError, EntryId, LawEntry};
use crate::persistence::{LoadOutcome, PersistenceCache};
use crate::platform::{Clock, KeyValueStore, open_external};
use crate::settings::Settings;

/// Where the live catalog came from at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Compiled-in dataset (nothing stored, expired, or unreadable)
    Default,
    /// Fresh stored envelope
    Cached,
    /// Pre-envelope stored snapshot
    Legacy,
}

pub struct CatalogStore<S, C> {
    catalog: Catalog,
    fallback: Catalog,
    origin: CatalogOrigin,
    cache: PersistenceCache<S, C>,
    storage_key: String,
}

impl<S: KeyValueStore, C: Clock> CatalogStore<S, C> {
    /// Load the stored catalog if present and fresh, else `fallback`
    pub fn initialize(store: S, clock: C, settings: &Settings, fallback: Catalog) -> Self {
        let cache = PersistenceCache::new(store, clock, settings.ttl_ms);
        let key = settings.storage_key.clone();

        let (catalog, origin) = match cache.try_load(&key) {
            Ok(LoadOutcome::Fresh(catalog)) => (catalog, CatalogOrigin::Cached),
            Ok(LoadOutcome::Legacy(catalog)) => (catalog, CatalogOrigin::Legacy),
            Ok(LoadOutcome::Absent | LoadOutcome::Expired) => {
                (fallback.clone(), CatalogOrigin::Default)
            }
            Err(e) => {
                log::error!("Failed to load '{}' from storage: {}", key, e);
                (fallback.clone(), CatalogOrigin::Default)
            }
        };
        log::info!(
            "Catalog ready: {} sections, {} laws ({:?})",
            catalog.sections().len(),
            catalog.entry_count(),
            origin
        );

        Self {
            catalog,
            fallback,
            origin,
            cache,
            storage_key: key,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn entry(&self, id: EntryId) -> Option<&LawEntry> {
        self.catalog.entry(id)
    }

    /// Live search view of the current catalog
    pub fn filter(&self, query: &str) -> Catalog {
        filter(&self.catalog, query)
    }

    /// Number of laws matching `query`
    pub fn result_count(&self, query: &str) -> usize {
        self.filter(query).entry_count()
    }

    /// Replace one entry's keywords and persist the catalog
    ///
    /// Ids from a filtered view address the same entry here. On error the
    /// catalog and the stored snapshot are unchanged. A failed write is
    /// logged only; the edit stays in memory for the session.
    pub fn set_keywords(&mut self, id: EntryId, keywords: Vec<String>) -> Result<(), CatalogError> {
        if let Err(e) = self.catalog.set_keywords(id, keywords) {
            log::warn!("Rejected keyword edit: {}", e);
            return Err(e);
        }
        self.persist();
        Ok(())
    }

    /// Positional variant; indices must come from the unfiltered catalog
    pub fn set_keywords_at(
        &mut self,
        section: usize,
        law: usize,
        keywords: Vec<String>,
    ) -> Result<(), CatalogError> {
        if let Err(e) = self.catalog.set_keywords_at(section, law, keywords) {
            log::warn!("Rejected keyword edit: {}", e);
            return Err(e);
        }
        self.persist();
        Ok(())
    }

    /// Open the entry's reference page; unknown ids are ignored
    pub fn open_law(&self, id: EntryId) {
        match self.catalog.entry(id) {
            Some(law) => open_external(&law.url),
            None => log::warn!("No law entry with id {}", id),
        }
    }

    /// Back to the compiled-in dataset, dropping the stored snapshot
    pub fn reset(&mut self) {
        self.catalog = self.fallback.clone();
        self.origin = CatalogOrigin::Default;
        if let Err(e) = self.cache.clear(&self.storage_key) {
            log::error!("Failed to clear '{}': {}", self.storage_key, e);
        }
    }

    fn persist(&self) {
        self.cache.save(&self.storage_key, &self.catalog);
    }
}
