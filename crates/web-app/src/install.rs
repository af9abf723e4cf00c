//! Detection of the app's install state. Used to hide install prompts when
//! the app already runs as an installed PWA.

use log::error;
use wasm_bindgen::JsValue;

/// Whether the app runs in an installed display mode (standalone or
/// minimal-ui, or the iOS `navigator.standalone` variant).
#[must_use]
pub fn standalone() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    display_mode_matches(&window, "standalone")
        || display_mode_matches(&window, "minimal-ui")
        || ios_standalone(&window)
}

/// Whether the viewport is wide enough to be treated as a desktop, where the
/// install suggestion banner makes sense.
#[must_use]
pub fn desktop_viewport() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .is_some_and(|width| width >= 768.0)
}

fn display_mode_matches(window: &web_sys::Window, mode: &str) -> bool {
    match window.match_media(&format!("(display-mode: {mode})")) {
        Ok(Some(media_query_list)) => media_query_list.matches(),
        Ok(None) => false,
        Err(err) => {
            error!("failed to match display mode media query: {err:?}");
            false
        }
    }
}

fn ios_standalone(window: &web_sys::Window) -> bool {
    js_sys::Reflect::get(
        window.navigator().as_ref(),
        &JsValue::from_str("standalone"),
    )
    .ok()
    .and_then(|value| value.as_bool())
    .unwrap_or(false)
}
