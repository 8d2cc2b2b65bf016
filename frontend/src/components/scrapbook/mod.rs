//! Scrapbook page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Own the three persisted stores (photos, letters, appreciation note) and
//!   the photo viewer state.
//! - Delegate message handling to `update::update` and rendering to `view::view`.
//! - On first render, inject the saved note into its editable surface and start
//!   the background music.

use common::autosave::SaveIndicator;
use gloo_console as console;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod sections;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ScrapbookProps;
pub use state::ScrapbookComponent;

impl Component for ScrapbookComponent {
    type Message = Msg;
    type Properties = ScrapbookProps;

    fn create(ctx: &Context<Self>) -> Self {
        ScrapbookComponent::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.set_surface_markup(self.note.markup());

            match crate::audio::start(&self.config.audio) {
                Ok(()) => ctx.link().send_message(Msg::SetIndicator(SaveIndicator::MusicEnabled)),
                Err(err) => console::warn!("Failed to initialize background music", err),
            }
        }
    }
}
