//! Full-screen photo viewer state.

use crate::storage::KeyValueStore;
use crate::stores::{PhotoStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSlide<'a> {
    pub src: &'a str,
    /// 1-based "i of N".
    pub caption: String,
}

/// Holds at most one open photo index; `None` means the viewer is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoViewer {
    open: Option<usize>,
}

impl PhotoViewer {
    pub fn current(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Opens the viewer on `index`; ignored when there is no such photo.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.open = Some(index);
        }
        self.is_open()
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// What the viewer shows. A closed viewer has no image source.
    pub fn slide<'a, S: KeyValueStore>(
        &self,
        photos: &'a PhotoStore<S>,
    ) -> Option<ViewerSlide<'a>> {
        let index = self.open?;
        photos.get(index).map(|src| ViewerSlide {
            src,
            caption: format!("{} of {}", index + 1, photos.len()),
        })
    }

    /// Deletes the photo being viewed and closes the viewer. Does nothing when
    /// the viewer is closed. The viewer stays open if the write fails.
    pub fn delete_current<S: KeyValueStore>(
        &mut self,
        store: &mut PhotoStore<S>,
    ) -> Result<Option<String>, StoreError> {
        let Some(index) = self.open else {
            return Ok(None);
        };
        let removed = store.remove_at(index)?;
        self.close();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store_with(n: usize) -> PhotoStore<MemoryStore> {
        let mut store = PhotoStore::load(MemoryStore::new(), "photos").unwrap();
        for i in 0..n {
            store.add(format!("data:image/png;base64,{}", i)).unwrap();
        }
        store
    }

    #[test]
    fn caption_is_one_based() {
        let store = store_with(3);
        let mut viewer = PhotoViewer::default();
        assert!(viewer.open(1, store.len()));
        let slide = viewer.slide(&store).unwrap();
        assert_eq!(slide.caption, "2 of 3");
        assert_eq!(slide.src, "data:image/png;base64,1");
    }

    #[test]
    fn closing_detaches_the_source() {
        let store = store_with(1);
        let mut viewer = PhotoViewer::default();
        viewer.open(0, store.len());
        viewer.close();
        assert_eq!(viewer.current(), None);
        assert_eq!(viewer.slide(&store), None);
    }

    #[test]
    fn slide_follows_the_store_after_a_delete() {
        let mut store = store_with(2);
        let mut viewer = PhotoViewer::default();
        viewer.open(1, store.len());
        store.remove_at(0).unwrap();

        // the open index now points past the end
        assert_eq!(viewer.slide(&store), None);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut viewer = PhotoViewer::default();
        assert!(!viewer.open(0, 0));
    }

    #[test]
    fn deleting_viewed_photo_removes_it_and_closes() {
        let mut store = store_with(3);
        let mut viewer = PhotoViewer::default();
        viewer.open(2, store.len());

        let removed = viewer.delete_current(&mut store).unwrap();
        assert_eq!(removed.as_deref(), Some("data:image/png;base64,2"));
        assert_eq!(store.len(), 2);
        assert!(!viewer.is_open());

        assert_eq!(viewer.delete_current(&mut store).unwrap(), None);
        assert_eq!(store.len(), 2);
    }
}
