use super::{StoreError, read_json, write_json};
use crate::model::letter::Letter;
use crate::storage::KeyValueStore;
use crate::view::letters::storage_index;

/// Letters in insertion order (oldest first). The letters view shows them
/// newest first, so deletions arrive as display positions.
#[derive(Debug, Clone)]
pub struct LetterStore<S> {
    storage: S,
    key: String,
    letters: Vec<Letter>,
}

impl<S: KeyValueStore> LetterStore<S> {
    pub fn load(storage: S, key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        let letters = read_json(&storage, &key)?;
        Ok(Self {
            storage,
            key,
            letters,
        })
    }

    pub fn empty(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            letters: Vec::new(),
        }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Appends a letter stamped `created`. Returns `Ok(false)` and changes
    /// nothing when the title or body is blank.
    pub fn add(&mut self, title: &str, body: &str, created: i64) -> Result<bool, StoreError> {
        let Some(letter) = Letter::compose(title, body, created) else {
            return Ok(false);
        };
        let mut next = self.letters.clone();
        next.push(letter);
        self.commit(next)?;
        Ok(true)
    }

    /// Removes the letter shown at `display_index` (0 = newest).
    pub fn remove_at_display(&mut self, display_index: usize) -> Result<Option<Letter>, StoreError> {
        let Some(index) = storage_index(self.letters.len(), display_index) else {
            return Ok(None);
        };
        let mut next = self.letters.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(Some(removed))
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.commit(Vec::new())
    }

    pub fn replace_all(&mut self, letters: Vec<Letter>) -> Result<(), StoreError> {
        self.commit(letters)
    }

    fn commit(&mut self, next: Vec<Letter>) -> Result<(), StoreError> {
        write_json(&self.storage, &self.key, &next)?;
        self.letters = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const KEY: &str = "letters";

    fn titles(store: &LetterStore<MemoryStore>) -> Vec<&str> {
        store.letters().iter().map(|l| l.title.as_str()).collect()
    }

    #[test]
    fn first_letter_is_persisted_as_json() {
        let storage = MemoryStore::new();
        let mut store = LetterStore::load(storage.clone(), KEY).unwrap();
        assert!(store.add("Hi", "There", 1700000000000).unwrap());

        assert_eq!(
            storage.raw(KEY).unwrap(),
            r#"[{"title":"Hi","body":"There","created":1700000000000}]"#
        );
    }

    #[test]
    fn blank_fields_leave_the_store_unchanged() {
        let storage = MemoryStore::new();
        let mut store = LetterStore::load(storage.clone(), KEY).unwrap();
        store.add("Keep", "me", 1).unwrap();
        let before = storage.raw(KEY);

        assert!(!store.add("  ", "body", 2).unwrap());
        assert!(!store.add("title", " \n ", 3).unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(storage.raw(KEY), before);
    }

    #[test]
    fn deleting_newest_removes_last_inserted() {
        for count in 1..6 {
            let storage = MemoryStore::new();
            let mut store = LetterStore::load(storage.clone(), KEY).unwrap();
            for i in 0..count {
                store.add(&format!("L{}", i), "body", i).unwrap();
            }
            let removed = store.remove_at_display(0).unwrap().unwrap();
            assert_eq!(removed.title, format!("L{}", count - 1));

            let reloaded = LetterStore::load(storage, KEY).unwrap();
            assert_eq!(reloaded.len(), count as usize - 1);
            assert!(reloaded.letters().iter().all(|l| l.title != removed.title));
        }
    }

    #[test]
    fn add_two_then_delete_display_zero_keeps_the_first() {
        let storage = MemoryStore::new();
        let mut store = LetterStore::load(storage.clone(), KEY).unwrap();
        store.add("A", "first", 1).unwrap();
        store.add("B", "second", 2).unwrap();

        store.remove_at_display(0).unwrap();
        assert_eq!(titles(&store), ["A"]);
        let reloaded = LetterStore::load(storage, KEY).unwrap();
        assert_eq!(titles(&reloaded), ["A"]);
    }

    #[test]
    fn deleting_oldest_by_display_position() {
        let mut store = LetterStore::load(MemoryStore::new(), KEY).unwrap();
        store.add("A", "1", 1).unwrap();
        store.add("B", "2", 2).unwrap();
        store.add("C", "3", 3).unwrap();

        store.remove_at_display(2).unwrap();
        assert_eq!(titles(&store), ["B", "C"]);
        assert_eq!(store.remove_at_display(2).unwrap(), None);
    }

    #[test]
    fn round_trip_and_clear() {
        let storage = MemoryStore::new();
        let mut store = LetterStore::load(storage.clone(), KEY).unwrap();
        store.add("A", "1", 1).unwrap();
        store.add("B", "2", 2).unwrap();
        let reloaded = LetterStore::load(storage.clone(), KEY).unwrap();
        assert_eq!(reloaded.letters(), store.letters());

        store.clear().unwrap();
        assert!(LetterStore::load(storage, KEY).unwrap().is_empty());
    }

    #[test]
    fn malformed_value_is_reported() {
        let storage = MemoryStore::new();
        storage.set(KEY, "{\"title\":").unwrap();
        assert!(matches!(
            LetterStore::load(storage, KEY),
            Err(StoreError::Corrupt { .. })
        ));
    }
}
