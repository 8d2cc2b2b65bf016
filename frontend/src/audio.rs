//! Background music controller.
//!
//! Creates a hidden looping `<audio>` element and tries unmuted playback.
//! When the browser blocks it, playback restarts muted and is unmuted on the
//! first click or touch anywhere in the document. Every failure is logged to
//! the console and otherwise ignored; the page never depends on audio.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::config::AudioConfig;
use common::playback::{PlaybackEvent, PlaybackState};
use gloo_console as console;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlAudioElement};

const GESTURE_EVENTS: [&str; 2] = ["click", "touchstart"];

/// Attaches the audio element and starts the playback attempt in the
/// background. An `Err` means the element could not be created at all.
pub fn start(config: &AudioConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let audio: HtmlAudioElement = document
        .create_element("audio")?
        .dyn_into()
        .map_err(JsValue::from)?;
    audio.set_src(config.src);
    audio.set_loop(true);
    audio.set_preload("auto");
    audio.set_volume(config.volume);
    audio.set_muted(false);
    audio.style().set_property("display", "none")?;
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&audio)?;

    let state = Rc::new(Cell::new(PlaybackState::default()));
    let src = config.src;
    spawn_local(async move {
        match play(&audio).await {
            Ok(()) => {
                state.set(state.get().on(PlaybackEvent::Started));
                console::log!("Background music playing unmuted:", src);
            }
            Err(_) => {
                console::warn!("Autoplay blocked, starting muted background music");
                state.set(state.get().on(PlaybackEvent::Blocked));
                audio.set_muted(true);
                if let Err(err) = arm_gesture_unmute(&document, audio.clone(), state.clone()) {
                    console::warn!("Could not listen for a user gesture", err);
                }
                if let Err(err) = play(&audio).await {
                    console::warn!("Muted play failed", err);
                }
            }
        }
    });

    Ok(())
}

async fn play(audio: &HtmlAudioElement) -> Result<(), JsValue> {
    let promise = audio.play()?;
    JsFuture::from(promise).await.map(|_| ())
}

/// Registers one listener for every gesture event. The first gesture
/// detaches all of them, so the unmute happens once.
fn arm_gesture_unmute(
    document: &Document,
    audio: HtmlAudioElement,
    state: Rc<Cell<PlaybackState>>,
) -> Result<(), JsValue> {
    let armed: Rc<RefCell<Option<js_sys::Function>>> = Rc::default();

    let handler = {
        let armed = armed.clone();
        let document = document.clone();
        Closure::<dyn FnMut()>::new(move || {
            let Some(listener) = armed.borrow_mut().take() else {
                return;
            };
            for event in GESTURE_EVENTS {
                let _ = document.remove_event_listener_with_callback(event, &listener);
            }
            if !state.get().awaits_gesture() {
                return;
            }
            state.set(state.get().on(PlaybackEvent::Gesture));
            audio.set_muted(false);
            let audio = audio.clone();
            spawn_local(async move {
                if let Err(err) = play(&audio).await {
                    console::warn!("Play after gesture failed", err);
                }
            });
        })
    };

    let listener: js_sys::Function = handler.as_ref().unchecked_ref::<js_sys::Function>().clone();
    for event in GESTURE_EVENTS {
        document.add_event_listener_with_callback(event, &listener)?;
    }
    *armed.borrow_mut() = Some(listener);

    // The closure must outlive this call; once fired it only returns early.
    handler.forget();
    Ok(())
}
