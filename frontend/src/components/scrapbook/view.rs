//! View rendering for the scrapbook component.
//!
//! The page is a column of sections (gallery, letters, appreciation note,
//! backup) followed by the full-screen photo viewer. Each section re-renders
//! entirely from the stores; there is no incremental diffing of our own.

use yew::prelude::*;

use super::dialogs::viewer::photo_viewer;
use super::sections::backup::backup_section;
use super::sections::gallery::gallery_section;
use super::sections::letters::letters_section;
use super::sections::note::note_section;
use super::state::ScrapbookComponent;

pub fn view(component: &ScrapbookComponent, ctx: &Context<ScrapbookComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="scrapbook-root">
            { gallery_section(component, link) }
            { letters_section(component, link) }
            { note_section(component, link) }
            { backup_section(component, link) }
            { photo_viewer(component, link) }
        </div>
    }
}
