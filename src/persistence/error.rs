use crate::catalog::CatalogError;
use crate::platform::StorageError;

/// Persistence failure, split by direction
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Backend could not be read
    #[error("failed to read snapshot: {0}")]
    Read(#[source] StorageError),

    /// Stored bytes are not a valid envelope or catalog
    #[error("corrupt snapshot: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// Stored catalog parses but breaks a catalog invariant
    #[error("invalid snapshot: {0}")]
    Invalid(#[source] CatalogError),

    /// Backend rejected the write (quota, unavailable)
    #[error("failed to write snapshot: {0}")]
    Write(#[source] StorageError),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CacheError {
    /// True for failures on the read path
    pub fn is_read(&self) -> bool {
        matches!(
            self,
            CacheError::Read(_) | CacheError::Corrupt(_) | CacheError::Invalid(_)
        )
    }
}
