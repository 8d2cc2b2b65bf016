//! Storage adapter seam.
//!
//! The page persists everything in the host's synchronous key-value string
//! store. `KeyValueStore` is that contract; the browser implementation lives
//! in the frontend crate and `MemoryStore` backs native tests.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

/// Failure reported by the host store. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove `{key}`: {reason}")]
    Remove { key: String, reason: String },
}

/// Synchronous string-keyed store with no transactional guarantees beyond a
/// single `set` being atomic.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
