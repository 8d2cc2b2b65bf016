use common::view::gallery::GalleryView;
use num_format::{Locale, ToFormattedString};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::scrapbook::{Msg, ScrapbookComponent};
use crate::photo_grid::PhotoGrid;

pub fn gallery_section(component: &ScrapbookComponent, link: &Scope<ScrapbookComponent>) -> Html {
    let count = component.photos.len();
    let count_label = format!(
        "{} {}",
        count.to_formatted_string(&Locale::en),
        if count == 1 { "photo" } else { "photos" }
    );

    html! {
        <section class="gallery">
            <header class="section-header">
                <h2>{"Our Photos"}</h2>
                <span class="muted">{ count_label }</span>
            </header>
            <div class="section-actions">
                <input
                    id="photo-input"
                    type="file"
                    accept="image/*"
                    ref={component.photo_input_ref.clone()}
                    onchange={link.batch_callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        input.files().and_then(|files| files.get(0)).map(Msg::PhotoSelected)
                    })}
                />
                <button class="btn ghost" onclick={link.callback(|_| Msg::ClearPhotos)}>
                    {"Clear photos"}
                </button>
            </div>
            { gallery_body(component, link) }
        </section>
    }
}

fn gallery_body(component: &ScrapbookComponent, link: &Scope<ScrapbookComponent>) -> Html {
    match GalleryView::project(component.photos.photos()) {
        GalleryView::Empty { message } => html! { <p class="muted">{ message }</p> },
        GalleryView::Tiles(tiles) => html! {
            <PhotoGrid>
                {
                    for tiles.into_iter().map(|tile| {
                        let index = tile.index;
                        html! {
                            <div class="item" key={index}>
                                <img
                                    src={tile.src.to_string()}
                                    alt={tile.alt}
                                    onclick={link.callback(move |_| Msg::OpenViewer(index))}
                                />
                            </div>
                        }
                    })
                }
            </PhotoGrid>
        },
    }
}
