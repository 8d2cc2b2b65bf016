//! Platform-independent core of the scrapbook: persisted stores, the
//! view-model projections the frontend renders, and the small state machines
//! (autosave, background playback) that drive the page.

pub mod autosave;
pub mod config;
pub mod model;
pub mod playback;
pub mod storage;
pub mod stores;
pub mod view;
