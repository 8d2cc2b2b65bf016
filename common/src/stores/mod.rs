//! Persisted stores.
//!
//! Each store owns its in-memory value and a handle to the storage adapter.
//! Every mutation builds the next value, writes it, and only then replaces the
//! in-memory copy, so the two never diverge even when the write fails.

mod letters;
mod note;
mod photos;

pub use letters::LetterStore;
pub use note::NoteStore;
pub use photos::PhotoStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("saved data under `{key}` is unreadable: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode data for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON value, defaulting when the key is absent.
fn read_json<S, T>(storage: &S, key: &str) -> Result<T, StoreError>
where
    S: KeyValueStore,
    T: DeserializeOwned + Default,
{
    match storage.get(key)? {
        None => Ok(T::default()),
        Some(text) => serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        }),
    }
}

fn write_json<S, T>(storage: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let text = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &text)?;
    Ok(())
}
