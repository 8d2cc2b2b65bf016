use super::StoreError;
use crate::storage::KeyValueStore;

/// The appreciation note: one block of rich-text markup, stored verbatim
/// (not JSON-encoded).
#[derive(Debug, Clone)]
pub struct NoteStore<S> {
    storage: S,
    key: String,
    markup: String,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub fn load(storage: S, key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        let markup = storage.get(&key)?.unwrap_or_default();
        Ok(Self {
            storage,
            key,
            markup,
        })
    }

    pub fn empty(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            markup: String::new(),
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn save(&mut self, markup: impl Into<String>) -> Result<(), StoreError> {
        let markup = markup.into();
        self.storage.set(&self.key, &markup)?;
        self.markup = markup;
        Ok(())
    }

    /// Resets the note and drops the persisted value entirely.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.storage.remove(&self.key)?;
        self.markup.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const KEY: &str = "note";

    #[test]
    fn markup_round_trips_verbatim() {
        let storage = MemoryStore::new();
        let mut note = NoteStore::load(storage.clone(), KEY).unwrap();
        assert_eq!(note.markup(), "");

        note.save("<b>thank you</b><br>for everything").unwrap();
        assert_eq!(
            storage.raw(KEY).as_deref(),
            Some("<b>thank you</b><br>for everything")
        );
        let reloaded = NoteStore::load(storage, KEY).unwrap();
        assert_eq!(reloaded.markup(), note.markup());
    }

    #[test]
    fn clear_removes_the_key() {
        let storage = MemoryStore::new();
        let mut note = NoteStore::load(storage.clone(), KEY).unwrap();
        note.save("hello").unwrap();
        note.clear().unwrap();
        assert_eq!(note.markup(), "");
        assert_eq!(storage.raw(KEY), None);
    }
}
