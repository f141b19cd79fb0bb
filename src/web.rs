//! JavaScript bindings
//!
//! The host page owns layout and dialogs; it drives this view with the live
//! search string, keyword edits and link clicks, and supplies a "back"
//! callback. Catalog views are returned as JSON with entry ids attached.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::catalog::{Catalog, CatalogStore, EntryId, default_catalog};
use crate::platform::{KeyValueStore, LocalStorage, MemoryStore, StorageError, SystemClock};
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Storage for this session: LocalStorage, or memory when the browser
/// refuses it (private mode, disabled storage)
enum Backend {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl KeyValueStore for Backend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Backend::Local(s) => s.get(key),
            Backend::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Backend::Local(s) => s.set(key, value),
            Backend::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Backend::Local(s) => s.remove(key),
            Backend::Memory(s) => s.remove(key),
        }
    }
}

#[derive(Serialize)]
struct EntryView<'a> {
    id: u32,
    title: &'a str,
    url: &'a str,
    keywords: &'a [String],
}

#[derive(Serialize)]
struct SectionView<'a> {
    title: &'a str,
    laws: Vec<EntryView<'a>>,
}

fn to_json(catalog: &Catalog) -> Result<String, JsValue> {
    let sections: Vec<SectionView<'_>> = catalog
        .sections()
        .iter()
        .map(|section| SectionView {
            title: &section.title,
            laws: section
                .laws
                .iter()
                .map(|law| EntryView {
                    id: law.id.0,
                    title: &law.title,
                    url: &law.url,
                    keywords: &law.keywords,
                })
                .collect(),
        })
        .collect();
    serde_json::to_string(&sections).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct LawCatalogView {
    store: CatalogStore<Backend, SystemClock>,
    on_back: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl LawCatalogView {
    #[wasm_bindgen(constructor)]
    pub fn new(on_back: Option<js_sys::Function>) -> Self {
        let backend = match LocalStorage::open() {
            Ok(local) => Backend::Local(local),
            Err(e) => {
                log::warn!("{}; keyword edits will not survive reload", e);
                Backend::Memory(MemoryStore::new())
            }
        };
        let store =
            CatalogStore::initialize(backend, SystemClock, &Settings::default(), default_catalog());
        Self { store, on_back }
    }

    /// Full catalog as JSON
    pub fn catalog(&self) -> Result<String, JsValue> {
        to_json(self.store.catalog())
    }

    /// Catalog filtered by the live search string, as JSON
    pub fn filter(&self, query: &str) -> Result<String, JsValue> {
        to_json(&self.store.filter(query))
    }

    pub fn result_count(&self, query: &str) -> usize {
        self.store.result_count(query)
    }

    /// Replace an entry's keywords; trims each, rejects more than 7, blanks and duplicates
    pub fn set_keywords(&mut self, entry_id: u32, keywords: Vec<String>) -> Result<(), JsValue> {
        self.store
            .set_keywords(EntryId(entry_id), keywords)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn open_law(&self, entry_id: u32) {
        self.store.open_law(EntryId(entry_id));
    }

    /// Invoke the host's navigate-back callback
    pub fn back(&self) {
        if let Some(on_back) = &self.on_back {
            if let Err(e) = on_back.call0(&JsValue::NULL) {
                log::error!("Back callback failed: {:?}", e);
            }
        }
    }
}
