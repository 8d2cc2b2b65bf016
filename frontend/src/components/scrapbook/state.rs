//! Component state for the scrapbook page.
//!
//! The stores are owned here, by the page root, and every section renders
//! from them. Fields are `pub` because they are accessed by the `view`,
//! `update` and section modules.

use std::fmt::Display;

use common::autosave::{Autosave, SaveIndicator};
use common::config::ScrapbookConfig;
use common::stores::{LetterStore, NoteStore, PhotoStore};
use common::view::viewer::PhotoViewer;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::storage::LocalStorage;

use super::helpers::{compute_md5, report_error};

pub struct ScrapbookComponent {
    pub config: ScrapbookConfig,

    pub photos: PhotoStore<LocalStorage>,
    pub letters: LetterStore<LocalStorage>,
    pub note: NoteStore<LocalStorage>,

    /// Index of the photo shown full screen, if any.
    pub viewer: PhotoViewer,

    /// Draft contents of the letter form.
    pub letter_title: String,
    pub letter_body: String,

    pub indicator: SaveIndicator,
    pub autosave: Autosave,
    /// The single live debounce timer. Replacing or dropping it cancels it.
    pub autosave_timer: Option<Timeout>,
    /// MD5 of the note markup at the last successful save.
    pub saved_note_md5: String,

    pub photo_input_ref: NodeRef,
    pub backup_input_ref: NodeRef,
    /// The note's `contenteditable` surface.
    pub note_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl ScrapbookComponent {
    /// Loads every store from local storage. A store whose saved value cannot
    /// be read is reported and starts empty; the saved value stays untouched
    /// until that store is next modified.
    pub fn new(config: ScrapbookConfig) -> Self {
        let storage = LocalStorage::open();
        let keys = &config.keys;

        let photos = PhotoStore::load(storage.clone(), keys.photos).unwrap_or_else(|err| {
            report_load_error("photos", &err);
            PhotoStore::empty(storage.clone(), keys.photos)
        });
        let letters = LetterStore::load(storage.clone(), keys.letters).unwrap_or_else(|err| {
            report_load_error("letters", &err);
            LetterStore::empty(storage.clone(), keys.letters)
        });
        let note = NoteStore::load(storage.clone(), keys.note).unwrap_or_else(|err| {
            report_load_error("appreciation note", &err);
            NoteStore::empty(storage, keys.note)
        });
        let saved_note_md5 = compute_md5(note.markup());

        Self {
            config,
            photos,
            letters,
            note,
            viewer: PhotoViewer::default(),
            letter_title: String::new(),
            letter_body: String::new(),
            indicator: SaveIndicator::Idle,
            autosave: Autosave::default(),
            autosave_timer: None,
            saved_note_md5,
            photo_input_ref: Default::default(),
            backup_input_ref: Default::default(),
            note_ref: Default::default(),
            loaded: false,
        }
    }

    /// Current markup of the note surface, verbatim.
    pub fn surface_markup(&self) -> String {
        self.note_ref
            .cast::<HtmlElement>()
            .map(|surface| surface.inner_html())
            .unwrap_or_default()
    }

    pub fn set_surface_markup(&self, markup: &str) {
        if let Some(surface) = self.note_ref.cast::<HtmlElement>() {
            surface.set_inner_html(markup);
        }
    }

    /// True while the surface holds edits that are not yet persisted.
    pub fn note_is_dirty(&self) -> bool {
        compute_md5(&self.surface_markup()) != self.saved_note_md5
    }

    /// Stops any pending autosave.
    pub fn cancel_autosave(&mut self) {
        self.autosave.cancel();
        self.autosave_timer = None;
    }
}

/// Clears a file input so picking the same file again fires `change`.
pub fn reset_file_input(input_ref: &NodeRef) {
    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

fn report_load_error(what: &str, err: &impl Display) {
    report_error(&format!("Could not load saved {}, starting empty", what), err);
}
