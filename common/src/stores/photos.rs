use super::{StoreError, read_json, write_json};
use crate::storage::KeyValueStore;

/// Ordered photos, each a data URL. Identity is the position in the list.
#[derive(Debug, Clone)]
pub struct PhotoStore<S> {
    storage: S,
    key: String,
    photos: Vec<String>,
}

impl<S: KeyValueStore> PhotoStore<S> {
    pub fn load(storage: S, key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        let photos = read_json(&storage, &key)?;
        Ok(Self {
            storage,
            key,
            photos,
        })
    }

    /// An empty store over `storage` that leaves the persisted value alone
    /// until the next mutation.
    pub fn empty(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            photos: Vec::new(),
        }
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.photos.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn add(&mut self, data_url: impl Into<String>) -> Result<(), StoreError> {
        let mut next = self.photos.clone();
        next.push(data_url.into());
        self.commit(next)
    }

    /// Removes the photo at `index`. Out-of-range indexes change nothing.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<String>, StoreError> {
        if index >= self.photos.len() {
            return Ok(None);
        }
        let mut next = self.photos.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(Some(removed))
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.commit(Vec::new())
    }

    pub fn replace_all(&mut self, photos: Vec<String>) -> Result<(), StoreError> {
        self.commit(photos)
    }

    fn commit(&mut self, next: Vec<String>) -> Result<(), StoreError> {
        write_json(&self.storage, &self.key, &next)?;
        self.photos = next;
        Ok(())
    }
}
