use common::view::letters::{LetterCard, LettersView};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::scrapbook::helpers::format_timestamp;
use crate::components::scrapbook::{Msg, ScrapbookComponent};

pub fn letters_section(component: &ScrapbookComponent, link: &Scope<ScrapbookComponent>) -> Html {
    html! {
        <section class="letters">
            <header class="section-header">
                <h2>{"Letters"}</h2>
            </header>
            <form
                id="letter-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::SubmitLetter
                })}
            >
                <input
                    id="letter-title"
                    type="text"
                    placeholder="Title"
                    value={component.letter_title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetLetterTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <textarea
                    id="letter-body"
                    placeholder="Write your letter..."
                    rows={5}
                    value={component.letter_body.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetLetterBody(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
                <div class="section-actions">
                    <button type="submit" class="btn">{"Save letter"}</button>
                    <button
                        type="button"
                        class="btn ghost"
                        onclick={link.callback(|_| Msg::ClearLetters)}
                    >
                        {"Clear letters"}
                    </button>
                </div>
            </form>
            <div id="letters-list">
                {
                    match LettersView::project(component.letters.letters()) {
                        LettersView::Empty { message } => html! { <p class="muted">{ message }</p> },
                        LettersView::Cards(cards) => cards
                            .into_iter()
                            .map(|card| letter_card(card, link))
                            .collect::<Html>(),
                    }
                }
            </div>
        </section>
    }
}

fn letter_card(card: LetterCard<'_>, link: &Scope<ScrapbookComponent>) -> Html {
    let display_index = card.display_index;
    html! {
        <article class="card">
            <h3>{ card.title.to_string() }</h3>
            <p style="white-space: pre-wrap;">{ card.body.to_string() }</p>
            <div style="margin-top:8px;display:flex;justify-content:space-between;">
                <small class="muted">{ format_timestamp(card.created) }</small>
                <button
                    class="btn ghost"
                    onclick={link.callback(move |_| Msg::DeleteLetter(display_index))}
                >
                    {"Delete"}
                </button>
            </div>
        </article>
    }
}
