use contracts::domain::common::AreaId;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

/// Values of the selected options of the `<select>` the event came from.
pub fn selected_values(ev: &leptos::ev::Event) -> Vec<String> {
    let Some(select) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
    else {
        return Vec::new();
    };
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|o| o.value())
        .collect()
}

pub fn selected_areas(ev: &leptos::ev::Event) -> Vec<AreaId> {
    selected_values(ev)
        .iter()
        .filter_map(|v| AreaId::parse_choice(v))
        .collect()
}
