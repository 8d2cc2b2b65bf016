//! Utility functions for the scrapbook component.
//!
//! - **User Feedback**: temporary "toast" notifications and blocking
//!   confirmation prompts for destructive actions.
//! - **Time Formatting**: local date/time strings for letter cards and the
//!   note's save indicator, via the browser's `Date`.
//! - **Downloads**: saving a generated backup through a temporary object URL.
//! - **Dirty Tracking**: MD5 digests of the note markup, mirrored into the
//!   global `app_dirty` flag read by the page's `beforeunload` handler.

use std::fmt::Display;

use gloo_console as console;
use gloo_file::{Blob, ObjectUrl};
use js_sys::{Date, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlElement};

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast is a styled `div` appended to the body that removes itself after
/// a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Logs `err` to the console and shows it to the user.
pub fn report_error(context: &str, err: &dyn Display) {
    let message = format!("{}: {}", context, err);
    console::error!(message.clone());
    show_toast(&message);
}

/// Blocking yes/no prompt. Anything but an explicit "yes" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn now_millis() -> i64 {
    Date::now() as i64
}

/// Local date and time for a timestamp in milliseconds.
pub fn format_timestamp(millis: i64) -> String {
    let date = Date::new(&JsValue::from_f64(millis as f64));
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}

/// Local time of day, for the save indicator.
pub fn local_time() -> String {
    String::from(Date::new_0().to_locale_time_string("default"))
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    let now = Date::new_0();
    calendar_date(now.get_full_year(), now.get_month(), now.get_date())
}

/// Formats a `Date`'s local calendar fields; `month` is zero-based.
fn calendar_date(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month + 1, day)
}

/// Offers `text` as a file download named `file_name`.
pub fn download_text(file_name: &str, text: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let url = ObjectUrl::from(Blob::new_with_options(text, Some("text/plain")));
    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    // revoke only once the browser has picked the download up
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(1000).await;
        drop(url);
    });
    Ok(())
}

/// Computes the MD5 hash of a string and returns it as a hex digest.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Sets the global `app_dirty` flag.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}
