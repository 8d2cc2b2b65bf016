use yew::html::Scope;
use yew::prelude::*;

use crate::components::scrapbook::{Msg, ScrapbookComponent};

/// The editable surface has no virtual children, so re-renders never touch
/// what the user typed; its markup is injected once after the first render.
pub fn note_section(component: &ScrapbookComponent, link: &Scope<ScrapbookComponent>) -> Html {
    html! {
        <section class="appreciation">
            <header class="section-header">
                <h2>{"Appreciation"}</h2>
            </header>
            <div
                id="appreciation-box"
                class="appreciation-box"
                contenteditable="true"
                ref={component.note_ref.clone()}
                oninput={link.callback(|_: InputEvent| Msg::NoteEdited)}
                style="min-height: 120px; padding: 8px; border: 1px solid #ddd; border-radius: 4px;"
            />
            <div class="section-actions">
                <button class="btn" onclick={link.callback(|_| Msg::SaveNote)}>{"Save"}</button>
                <button class="btn ghost" onclick={link.callback(|_| Msg::ClearNote)}>{"Clear"}</button>
                <span id="app-save-indicator" class="muted">{ component.indicator.to_string() }</span>
            </div>
        </section>
    }
}
