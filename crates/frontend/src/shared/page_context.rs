//! Reads what the server rendered into the page.
//!
//! Widgets are given the typed snapshot at mount time and never read the
//! globals again.

use contracts::shared::form_field::CSRF_FIELD;
use contracts::shared::page_context::PageContextError;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};

/// Deserializes the `window[name]` global.
pub fn read_global<T: DeserializeOwned>(name: &'static str) -> Result<T, PageContextError> {
    let window = web_sys::window().ok_or(PageContextError::MissingGlobal(name))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|_| PageContextError::MissingGlobal(name))?;
    if value.is_undefined() {
        return Err(PageContextError::MissingGlobal(name));
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| PageContextError::malformed(name, e))
}

/// Like [`read_global`], with `T::default()` when the page did not define it.
pub fn read_optional_global<T: DeserializeOwned + Default>(
    name: &'static str,
) -> Result<T, PageContextError> {
    match read_global(name) {
        Err(PageContextError::MissingGlobal(_)) => Ok(T::default()),
        other => other,
    }
}

/// Token of the first `csrfmiddlewaretoken` input on the page.
pub fn csrf_token() -> Result<String, PageContextError> {
    let selector = format!("input[name={}]", CSRF_FIELD);
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&selector).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .ok_or(PageContextError::MissingElement(CSRF_FIELD))
}

/// Inner HTML of the element with `id`, if present.
pub fn element_html(id: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .map(|el| el.inner_html())
}
