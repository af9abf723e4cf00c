//! Delivery of share payloads via the platform capabilities that happen to
//! be available. Payload construction lives in the domain crate; this module
//! only transmits.

use log::debug;
use stilla_domain as domain;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The user dismissed the share sheet. Not a failure; callers must
    /// suppress it silently.
    #[error("share cancelled")]
    Cancelled,
    #[error("{0}")]
    Unavailable(String),
}

#[must_use]
pub fn native_share_available() -> bool {
    web_sys::window().is_some_and(|window| {
        js_sys::Reflect::has(window.navigator().as_ref(), &JsValue::from_str("share"))
            .unwrap_or(false)
    })
}

/// Opens the native share sheet with title, text and URL.
pub async fn native_share(payload: &domain::SharePayload) -> Result<(), ShareError> {
    share_data(&payload.title, &payload.text, Some(&payload.url)).await
}

/// Opens the native share sheet with a pre-filled colleague message.
pub async fn native_share_message(title: &str, message: &str) -> Result<(), ShareError> {
    share_data(title, message, None).await
}

async fn share_data(title: &str, text: &str, url: Option<&str>) -> Result<(), ShareError> {
    let window = web_sys::window()
        .ok_or_else(|| ShareError::Unavailable("failed to access window".to_string()))?;
    if !native_share_available() {
        return Err(ShareError::Unavailable(
            "navigator.share is not available".to_string(),
        ));
    }
    let data = web_sys::ShareData::new();
    data.set_title(title);
    data.set_text(text);
    if let Some(url) = url {
        data.set_url(url);
    }
    match JsFuture::from(window.navigator().share_with_data(&data)).await {
        Ok(_) => Ok(()),
        Err(err) => {
            if err
                .dyn_ref::<web_sys::DomException>()
                .is_some_and(|exception| exception.name() == "AbortError")
            {
                Err(ShareError::Cancelled)
            } else {
                Err(ShareError::Unavailable(format!("{err:?}")))
            }
        }
    }
}

/// Copies text to the clipboard, falling back to a hidden textarea and
/// `execCommand("copy")` where the clipboard API is missing.
pub async fn copy_text(text: &str) -> Result<(), ShareError> {
    match clipboard_write(text).await {
        Ok(()) => Ok(()),
        Err(err) => {
            debug!("clipboard write failed, trying legacy copy: {err}");
            legacy_copy(text)
        }
    }
}

async fn clipboard_write(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "failed to access window".to_string())?;
    let navigator = window.navigator();
    let has_clipboard =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("clipboard"))
            .unwrap_or(false);
    if !has_clipboard {
        return Err("clipboard API is not available".to_string());
    }
    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| format!("{err:?}"))
}

fn legacy_copy(text: &str) -> Result<(), ShareError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ShareError::Unavailable("failed to access document".to_string()))?;
    let textarea = document
        .create_element("textarea")
        .map_err(|err| ShareError::Unavailable(format!("{err:?}")))?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map_err(|_| ShareError::Unavailable("failed to create textarea".to_string()))?;
    textarea.set_value(text);
    let _ = textarea.set_attribute("style", "position: fixed; opacity: 0");
    let body = document
        .body()
        .ok_or_else(|| ShareError::Unavailable("failed to access body".to_string()))?;
    body.append_child(&textarea)
        .map_err(|err| ShareError::Unavailable(format!("{err:?}")))?;
    textarea.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .is_some_and(|html_document| html_document.exec_command("copy").unwrap_or(false));
    let _ = body.remove_child(&textarea);
    if copied {
        Ok(())
    } else {
        Err(ShareError::Unavailable(
            "execCommand copy failed".to_string(),
        ))
    }
}
