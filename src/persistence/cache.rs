//! Expiring catalog cache over a key-value store
//!
//! Entry lifecycle: absent -> (save) -> fresh -> (ttl elapsed) -> expired
//! -> (next load evicts) -> absent. Each write stores the whole envelope as
//! one value, so there are no partial snapshots.

use super::envelope::{CacheEnvelope, StoredSnapshot};
use super::error::CacheError;
use crate::catalog::Catalog;
use crate::platform::{Clock, KeyValueStore};

/// Result of reading the storage key
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Nothing stored
    Absent,
    /// Envelope within the freshness window
    Fresh(Catalog),
    /// Bare catalog from before envelopes; never expires
    Legacy(Catalog),
    /// Envelope past the freshness window; the key has been removed
    Expired,
}

impl LoadOutcome {
    /// The usable catalog, if any
    pub fn into_catalog(self) -> Option<Catalog> {
        match self {
            LoadOutcome::Fresh(c) | LoadOutcome::Legacy(c) => Some(c),
            LoadOutcome::Absent | LoadOutcome::Expired => None,
        }
    }
}

/// Persistence cache for one catalog snapshot per key
pub struct PersistenceCache<S, C> {
    store: S,
    clock: C,
    ttl_ms: u64,
}

impl<S: KeyValueStore, C: Clock> PersistenceCache<S, C> {
    pub fn new(store: S, clock: C, ttl_ms: u64) -> Self {
        Self {
            store,
            clock,
            ttl_ms,
        }
    }

    /// Read and classify whatever is stored under `key`
    ///
    /// An expired envelope is removed from the store before returning. A
    /// snapshot that breaks catalog invariants is reported as
    /// [`CacheError::Invalid`] and left in place.
    pub fn try_load(&self, key: &str) -> Result<LoadOutcome, CacheError> {
        let Some(raw) = self.store.get(key).map_err(CacheError::Read)? else {
            return Ok(LoadOutcome::Absent);
        };

        match StoredSnapshot::parse(&raw).map_err(CacheError::Corrupt)? {
            StoredSnapshot::Envelope(envelope) => {
                let now = self.clock.now_ms();
                if envelope.is_expired(now, self.ttl_ms) {
                    log::info!(
                        "Snapshot '{}' expired ({} ms old), removing",
                        key,
                        envelope.age_ms(now)
                    );
                    if let Err(e) = self.store.remove(key) {
                        log::warn!("Failed to remove expired snapshot '{}': {}", key, e);
                    }
                    return Ok(LoadOutcome::Expired);
                }
                envelope.data.validate().map_err(CacheError::Invalid)?;
                Ok(LoadOutcome::Fresh(envelope.data))
            }
            StoredSnapshot::Legacy(catalog) => {
                catalog.validate().map_err(CacheError::Invalid)?;
                Ok(LoadOutcome::Legacy(catalog))
            }
        }
    }

    /// Stored catalog if present and fresh, otherwise `fallback`
    ///
    /// Never fails; read errors are logged.
    pub fn load(&self, key: &str, fallback: Catalog) -> Catalog {
        match self.try_load(key) {
            Ok(outcome) => outcome.into_catalog().unwrap_or(fallback),
            Err(e) => {
                log::error!("Failed to load '{}' from storage: {}", key, e);
                fallback
            }
        }
    }

    /// Write `catalog` under `key`, stamped with the current time
    pub fn try_save(&self, key: &str, catalog: &Catalog) -> Result<(), CacheError> {
        let envelope = CacheEnvelope::new(catalog.clone(), self.clock.now_ms());
        let raw = serde_json::to_string(&envelope).map_err(CacheError::Encode)?;
        self.store.set(key, &raw).map_err(CacheError::Write)
    }

    /// Like [`try_save`](Self::try_save), but failures are logged and dropped
    pub fn save(&self, key: &str, catalog: &Catalog) {
        match self.try_save(key, catalog) {
            Ok(()) => log::info!("Saved '{}' ({} laws)", key, catalog.entry_count()),
            Err(e) => log::error!("Failed to save '{}' to storage: {}", key, e),
        }
    }

    /// Drop the stored snapshot
    pub fn clear(&self, key: &str) -> Result<(), CacheError> {
        self.store.remove(key).map_err(CacheError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LawEntry, LawSection, default_catalog};
    use crate::consts::TTL_MS;
    use crate::platform::{ManualClock, MemoryStore, StorageError};

    const NOW: u64 = 1_750_000_000_000;

    fn one_entry() -> Catalog {
        Catalog::new(vec![LawSection::new(
            "A",
            vec![LawEntry::new("X", "https://law/x", vec!["foo".to_string()])],
        )])
    }

    fn cache<'a>(
        store: &'a MemoryStore,
        clock: &'a ManualClock,
    ) -> PersistenceCache<&'a MemoryStore, &'a ManualClock> {
        PersistenceCache::new(store, clock, TTL_MS)
    }

    #[test]
    fn test_ttl_is_two_years() {
        assert_eq!(TTL_MS, 63_072_000_000);
    }

    #[test]
    fn test_absent_returns_fallback() {
        let store = MemoryStore::new();
        let clock = ManualClock::new(NOW);
        let cache = cache(&store, &clock);
        assert_eq!(cache.try_load("key").unwrap(), LoadOutcome::Absent);
        assert_eq!(cache.load("key", default_catalog()), default_catalog());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = MemoryStore::new();
        let clock = ManualClock::new(NOW);
        let cache = cache(&store, &clock);

        cache.save("key", &one_entry());
        clock.advance(TTL_MS);
        assert_eq!(cache.load("key", default_catalog()), one_entry());
    }

    #[test]
    fn test_envelope_is_stamped_with_now() {
        let store = MemoryStore::new();
        let clock = ManualClock::new(NOW);
        cache(&store, &clock).save("key", &one_entry());

        let raw = store.get("key").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["timestamp"], NOW);
        assert!(json["data"].is_array());
    }

    #[test]
    fn test_expired_returns_fallback_and_evicts() {
        let store = MemoryStore::new();
        let clock = ManualClock::new(NOW);
        let envelope = CacheEnvelope::new(one_entry(), NOW - TTL_MS - 1);
        store
            .set("key", &serde_json::to_string(&envelope).unwrap())
            .unwrap();

        let cache = cache(&store, &clock);
        assert_eq!(cache.load("key", default_catalog()), default_catalog());
        assert!(!store.contains("key"));
        assert_eq!(cache.try_load("key").unwrap(), LoadOutcome::Absent);
    }

    #[test]
    fn test_exactly_ttl_old_is_fresh() {
        let store = MemoryStore::new();
        let clock = ManualClock::new(NOW);
        let envelope = CacheEnvelope::new(one_entry(), NOW - TTL_MS);
        store
            .set("key", &serde_json::to_string(&envelope).unwrap())
            .unwrap();

        let outcome = cache(&store, &clock).try_load("key").unwrap();
        assert_eq!(outcome, LoadOutcome::Fresh(one_entry()));
    }

    #[test]
    fn test_truncated_bytes_return_fallback() {
        let store = MemoryStore::new();
        let clock = ManualClock::new(NOW);
        let cache = cache(&store, &clock);

        cache.save("key", &one_entry());
        let raw = store.get("key").unwrap().unwrap();
        store.set("key", &raw[..raw.len() / 2]).unwrap();

        assert!(matches!(cache.try_load("key"), Err(CacheError::Corrupt(_))));
        assert_eq!(cache.load("key", default_catalog()), default_catalog());
    }

    #[test]
    fn test_legacy_snapshot_loads_without_expiry() {
        let store = MemoryStore::new();
        let clock = ManualClock::new(NOW);
        store
            .set("key", &serde_json::to_string(&one_entry()).unwrap())
            .unwrap();

        let cache = cache(&store, &clock);
        clock.advance(10 * TTL_MS);
        assert_eq!(cache.try_load("key").unwrap(), LoadOutcome::Legacy(one_entry()));
        assert!(store.contains("key"));
    }

    #[test]
    fn test_snapshot_breaking_invariants_is_invalid() {
        let store = MemoryStore::new();
        let clock = ManualClock::new(NOW);
        let twins = Catalog::new(vec![LawSection::new("A", vec![]), LawSection::new("A", vec![])]);
        store
            .set("key", &serde_json::to_string(&CacheEnvelope::new(twins, NOW)).unwrap())
            .unwrap();

        let cache = cache(&store, &clock);
        let err = cache.try_load("key").unwrap_err();
        assert!(matches!(err, CacheError::Invalid(_)));
        assert!(err.is_read());
        assert_eq!(cache.load("key", one_entry()), one_entry());
        assert!(store.contains("key"));
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("QuotaExceededError".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_storage_failures_degrade() {
        let clock = ManualClock::new(NOW);
        let cache = PersistenceCache::new(FailingStore, &clock, TTL_MS);

        let err = cache.try_load("key").unwrap_err();
        assert!(err.is_read());
        assert_eq!(cache.load("key", one_entry()), one_entry());

        let err = cache.try_save("key", &one_entry()).unwrap_err();
        assert!(matches!(err, CacheError::Write(StorageError::Backend(_))));
        assert!(!err.is_read());
        // Must not panic
        cache.save("key", &one_entry());
    }
}
