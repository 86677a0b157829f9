use super::api;
use contracts::shared::autocomplete::{is_searchable, AutocompleteOption};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use web_sys::AbortController;

const DEBOUNCE_MS: u32 = 250;

/// Text input backed by a remote search; only the chosen option's value is
/// posted, under `name`.
#[component]
pub fn Autocomplete(
    source_url: String,
    name: String,
    input_id: String,
    #[prop(optional)] value: String,
    #[prop(optional)] label: String,
) -> impl IntoView {
    let value = RwSignal::new(value);
    let query = RwSignal::new(label);
    let options = RwSignal::new(Vec::<AutocompleteOption>::new());
    let source_url = StoredValue::new(source_url);

    // Bumped on every keystroke; a search only applies if it is still current.
    let generation = StoredValue::new(0u64);
    let in_flight = StoredValue::new_local(None::<AbortController>);

    let abort_in_flight = move || {
        in_flight.update_value(|slot| {
            if let Some(controller) = slot.take() {
                controller.abort();
            }
        });
    };

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        query.set(text.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        abort_in_flight();

        if text.trim().is_empty() {
            value.set(String::new());
        }
        if !is_searchable(&text) {
            options.set(Vec::new());
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() != current {
                return;
            }
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            in_flight.set_value(controller);

            let url = source_url.get_value();
            let result = api::search(&url, &text, signal.as_ref()).await;
            if generation.get_value() != current {
                log::debug!("autocomplete search for {:?} superseded", text);
                return;
            }
            in_flight.set_value(None);
            match result {
                Ok(found) => options.set(found),
                Err(e) => log::warn!("autocomplete search for {:?} failed: {}", text, e),
            }
        });
    };

    let choose = move |option: AutocompleteOption| {
        value.set(option.value);
        query.set(option.label);
        options.set(Vec::new());
    };

    view! {
        <div class="autocomplete__wrapper">
            <input
                type="text"
                id=input_id
                class="govuk-input autocomplete__input"
                autocomplete="off"
                prop:value=move || query.get()
                on:input=on_input
            />
            <input type="hidden" name=name prop:value=move || value.get() />
            <Show when=move || options.with(|o| !o.is_empty())>
                <ul class="autocomplete__menu" role="listbox">
                    <For
                        each=move || options.get()
                        key=|option| option.value.clone()
                        children=move |option| {
                            let label = option.label.clone();
                            view! {
                                <li
                                    class="autocomplete__option"
                                    role="option"
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        choose(option.clone());
                                    }
                                >
                                    {label}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
