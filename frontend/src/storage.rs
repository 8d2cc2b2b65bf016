//! Browser local storage behind the `KeyValueStore` seam.

use common::storage::{KeyValueStore, StorageError};
use wasm_bindgen::{JsCast, JsValue};

/// Handle to `window.localStorage`.
///
/// Opening never fails: when the browser denies storage (private mode,
/// disabled cookies) every operation reports `StorageError::Unavailable`
/// and the page keeps running with empty stores.
#[derive(Clone)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        Self {
            inner: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

fn describe(err: JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                reason: describe(err),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // quota exceeded surfaces here
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: describe(err),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Remove {
                key: key.to_string(),
                reason: describe(err),
            })
    }
}
