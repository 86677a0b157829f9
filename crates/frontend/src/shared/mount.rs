//! Finds the widget containers on the current page and mounts into them.

use crate::domain::{a001_quota_origin, a002_geo_area, a003_workbasket_assignment};
use crate::shared::autocomplete;
use contracts::shared::page_context::PageContextError;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub const QUOTA_ORIGINS_CONTAINER: &str = "quota_origins";
pub const MEASURE_WIZARD_CONTAINER: &str = "measure-wizard-form-container";

/// Element by id, as a mount target.
pub fn container(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Replaces the children of `parent` with the view built by `f`.
pub fn mount_into<F, N>(parent: web_sys::HtmlElement, f: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    parent.set_inner_html("");
    leptos::mount::mount_to(parent, f).forget();
}

/// Logs a widget that could not be mounted; the server markup stays as is.
pub fn report(widget: &str, result: Result<(), PageContextError>) {
    if let Err(e) = result {
        log::error!("{} not mounted: {}", widget, e);
    }
}

/// Mounts every widget whose container is on this page.
pub fn mount_all() {
    if let Some(el) = container(QUOTA_ORIGINS_CONTAINER) {
        report("quota origins", a001_quota_origin::ui::mount(el));
    }
    if let Some(el) = container(MEASURE_WIZARD_CONTAINER) {
        report("geographical area form", a002_geo_area::ui::mount(el));
    }
    report("workbasket assignment", a003_workbasket_assignment::ui::mount());
    autocomplete::mount_all();
}
