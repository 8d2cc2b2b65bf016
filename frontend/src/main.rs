use crate::app::App;

mod app;
mod audio;
mod components;
mod overlay;
mod photo_grid;
mod storage;

fn main() {
    yew::Renderer::<App>::new().render();
}
