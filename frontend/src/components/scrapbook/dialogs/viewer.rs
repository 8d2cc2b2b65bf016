use yew::html::Scope;
use yew::prelude::*;

use crate::components::scrapbook::{Msg, ScrapbookComponent};
use crate::overlay::Overlay;

/// Full-screen viewer for one photo. When closed it renders no image at all.
pub fn photo_viewer(component: &ScrapbookComponent, link: &Scope<ScrapbookComponent>) -> Html {
    let slide = component.viewer.slide(&component.photos);

    html! {
        <Overlay open={slide.is_some()} on_dismiss={link.callback(|_| Msg::CloseViewer)}>
            {
                if let Some(slide) = slide {
                    html! {
                        <>
                            <button
                                id="modal-close"
                                onclick={link.callback(|_| Msg::CloseViewer)}
                                style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                            >
                                { "✕" }
                            </button>
                            <img
                                id="modal-img"
                                src={slide.src.to_string()}
                                alt={slide.caption.clone()}
                                style="max-width:90vw;max-height:75vh;margin-bottom:16px;"
                            />
                            <div id="modal-caption" style="color:#fff;margin-bottom:16px;">{ slide.caption }</div>
                            <button
                                id="delete-photo"
                                style="padding:0.5rem 1rem;font-size:1rem;background:#d32f2f;color:#fff;border:none;border-radius:4px;cursor:pointer;"
                                onclick={link.callback(|_| Msg::DeleteViewedPhoto)}
                            >
                                { "Delete photo" }
                            </button>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </Overlay>
    }
}
