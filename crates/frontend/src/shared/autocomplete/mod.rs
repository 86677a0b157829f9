//! Remote-search text fields.
//!
//! Every `.autocomplete-container` on the page carries `data-source-url`
//! and `data-name`; optional `data-id`, `data-value` and `data-label`
//! describe the field and its current choice.

pub mod api;
mod component;

pub use component::Autocomplete;

use crate::shared::mount::mount_into;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub const CONTAINER_SELECTOR: &str = ".autocomplete-container";

pub fn mount_all() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let nodes = match document.query_selector_all(CONTAINER_SELECTOR) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::error!("autocomplete lookup failed: {:?}", e);
            return;
        }
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let (Some(source_url), Some(name)) =
            (el.get_attribute("data-source-url"), el.get_attribute("data-name"))
        else {
            log::warn!("autocomplete container without data-source-url/data-name skipped");
            continue;
        };
        let input_id = el.get_attribute("data-id").unwrap_or_else(|| format!("id_{}", name));
        let value = el.get_attribute("data-value").unwrap_or_default();
        let label = el.get_attribute("data-label").unwrap_or_default();
        mount_into(el, move || {
            view! {
                <Autocomplete
                    source_url=source_url
                    name=name
                    input_id=input_id
                    value=value
                    label=label
                />
            }
        });
    }
}
