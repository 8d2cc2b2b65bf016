//! Pure projections from store state to what the page shows. The frontend
//! binds these to Yew markup; nothing here touches the DOM.

pub mod gallery;
pub mod letters;
pub mod viewer;
