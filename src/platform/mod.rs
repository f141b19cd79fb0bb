//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Key-value storage (LocalStorage on web, files on native)
//! - Wall-clock time
//! - Opening external links

pub mod link;
pub mod storage;
pub mod time;

pub use link::open_external;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use time::{Clock, ManualClock, SystemClock};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
