use super::view_model::QuotaOriginFormsetViewModel;
use crate::shared::dom::selected_areas;
use contracts::domain::a001_quota_origin::view_model::{DateView, ExclusionView, FieldView, OriginView, RowKey};
use contracts::domain::a001_quota_origin::{DateField, DatePart, QuotaOriginsPage};
use contracts::domain::a001_quota_origin::serialization::{EXCLUSIONS_PREFIX, ORIGINS_PREFIX};
use contracts::domain::common::{AreaId, AreaOption};
use contracts::shared::form_field::formset_field;
use leptos::prelude::*;

const GROUP_CLASS: &str = "govuk-form-group";
const GROUP_ERROR_CLASS: &str = "govuk-form-group govuk-form-group--error";

fn group_class(has_error: bool) -> &'static str {
    if has_error {
        GROUP_ERROR_CLASS
    } else {
        GROUP_CLASS
    }
}

fn error_message(error: Option<String>) -> Option<impl IntoView> {
    error.map(|e| {
        view! {
            <p class="govuk-error-message">
                <span class="govuk-visually-hidden">"Error: "</span>
                {e}
            </p>
        }
    })
}

/// `<option>`s for `choices`, selected when their value is `current`.
fn area_options(choices: Vec<AreaOption>, current: Signal<String>) -> impl IntoView {
    choices
        .into_iter()
        .map(|o| {
            let value = o.value.to_string();
            let selected_value = value.clone();
            view! {
                <option value=value prop:selected=move || current.with(|c| *c == selected_value)>
                    {o.label}
                </option>
            }
        })
        .collect_view()
}

#[component]
pub fn QuotaOriginFormset(page: QuotaOriginsPage) -> impl IntoView {
    let vm = QuotaOriginFormsetViewModel::new(page);

    view! {
        <div class="quota-origins" aria-live="polite">
            <For
                each=move || vm.rows()
                key=|row| row.key.clone()
                children=move |initial: OriginView| {
                    let key = initial.key.clone();
                    let row = Memo::new(move |prev: Option<&OriginView>| {
                        vm.row(&key)
                            .or_else(|| prev.cloned())
                            .unwrap_or_else(|| initial.clone())
                    });
                    view! { <OriginRow vm=vm row=row /> }
                }
            />
            <button
                type="button"
                class="govuk-button govuk-button--secondary"
                on:click=move |_| vm.add_origin()
            >
                "Add another origin"
            </button>
            <For
                each=move || vm.hidden_fields()
                key=|field| (field.name.clone(), field.value.clone())
                children=|field| view! { <input type="hidden" name=field.name value=field.value /> }
            />
        </div>
    }
}

#[component]
fn OriginRow(vm: QuotaOriginFormsetViewModel, row: Memo<OriginView>) -> impl IntoView {
    let key = StoredValue::new(row.with_untracked(|r| r.key.clone()));
    let area = Signal::derive(move || row.with(|r| r.geographical_area.value.clone()));
    let area_id = move || row.with(|r| r.geographical_area.name.clone());

    view! {
        <fieldset class="govuk-fieldset quota-origin">
            <legend class="govuk-fieldset__legend govuk-fieldset__legend--m">
                "Origin " {move || row.with(|r| r.index + 1)}
            </legend>
            {move || error_message(row.with(|r| r.error.clone()))}

            <div class=move || group_class(row.with(|r| r.geographical_area.error.is_some()))>
                <label class="govuk-label" for=area_id>"Geographical area"</label>
                {move || error_message(row.with(|r| r.geographical_area.error.clone()))}
                <select
                    class="govuk-select"
                    id=area_id
                    on:change=move |ev| {
                        key.with_value(|k| vm.set_origin_area(k, &event_target_value(&ev)))
                    }
                >
                    <option value="" prop:selected=move || area.with(String::is_empty)>
                        "-- Please select --"
                    </option>
                    {area_options(vm.geo_area_options(), area)}
                </select>
            </div>

            <DateInput
                legend="Start date"
                date=Signal::derive(move || row.with(|r| r.start_date.clone()))
                on_change=Callback::new(move |(part, value): (DatePart, String)| {
                    key.with_value(|k| vm.set_date(k, DateField::Start, part, &value))
                })
            />
            <DateInput
                legend="End date"
                date=Signal::derive(move || row.with(|r| r.end_date.clone()))
                on_change=Callback::new(move |(part, value): (DatePart, String)| {
                    key.with_value(|k| vm.set_date(k, DateField::End, part, &value))
                })
            />

            <Show when=move || row.with(|r| r.show_exclusions)>
                <Exclusions vm=vm row=row />
            </Show>

            <Show when=move || key.with_value(Option::is_some)>
                <button
                    type="button"
                    class="govuk-button govuk-button--warning"
                    on:click=move |_| key.with_value(|k| vm.remove_origin(k))
                >
                    "Delete origin"
                </button>
            </Show>
        </fieldset>
    }
}

#[component]
fn DateInput(
    legend: &'static str,
    date: Signal<DateView>,
    on_change: Callback<(DatePart, String)>,
) -> impl IntoView {
    let part_field = move |part: DatePart| -> FieldView {
        date.with(|d| {
            d.parts
                .iter()
                .find(|(p, _)| *p == part)
                .map(|(_, f)| f.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class=move || group_class(date.with(DateView::has_error))>
            <fieldset class="govuk-fieldset" role="group">
                <legend class="govuk-fieldset__legend">{legend}</legend>
                {move || error_message(date.with(|d| d.error.clone()))}
                <div class="govuk-date-input">
                    {DatePart::ALL
                        .into_iter()
                        .map(|part| {
                            let id = move || part_field(part).name;
                            view! {
                                <div class="govuk-date-input__item">
                                    <label class="govuk-label govuk-date-input__label" for=id>
                                        {part.label()}
                                    </label>
                                    <input
                                        class="govuk-input govuk-date-input__input"
                                        id=id
                                        type="text"
                                        inputmode="numeric"
                                        prop:value=move || part_field(part).value
                                        on:input=move |ev| on_change.run((part, event_target_value(&ev)))
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </fieldset>
        </div>
    }
}

#[component]
fn Exclusions(vm: QuotaOriginFormsetViewModel, row: Memo<OriginView>) -> impl IntoView {
    let key = StoredValue::new(row.with_untracked(|r| r.key.clone()));
    let choices = Memo::new(move |_| row.with(|r| r.exclusion_choices.clone()));
    let chosen = move || {
        row.with(|r| {
            r.exclusions
                .iter()
                .filter_map(|e| AreaId::parse_choice(&e.geographical_area.value))
                .collect::<Vec<_>>()
        })
    };
    let select_id = move || row.with(|r| formset_field(ORIGINS_PREFIX, r.index, EXCLUSIONS_PREFIX));

    view! {
        <div class="govuk-form-group quota-origin__exclusions">
            <label class="govuk-label" for=select_id>"Geographical area exclusions"</label>
            <select
                class="govuk-select"
                id=select_id
                multiple=true
                on:change=move |ev| {
                    let areas = selected_areas(&ev);
                    key.with_value(|k| vm.set_exclusions(k, &areas));
                }
            >
                {move || {
                    choices
                        .get()
                        .into_iter()
                        .map(|o| {
                            let area = o.value;
                            view! {
                                <option
                                    value=area.to_string()
                                    prop:selected=move || chosen().contains(&area)
                                >
                                    {o.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>

            <For
                each=move || row.with(|r| r.exclusions.clone())
                key=|exclusion| exclusion.id.clone()
                children=move |initial: ExclusionView| {
                    let exclusion_id = initial.id.clone();
                    let exclusion = Memo::new(move |prev: Option<&ExclusionView>| {
                        row.with(|r| r.exclusions.iter().find(|e| e.id == exclusion_id).cloned())
                            .or_else(|| prev.cloned())
                            .unwrap_or_else(|| initial.clone())
                    });
                    view! { <ExclusionRow vm=vm origin_key=key exclusion=exclusion choices=choices /> }
                }
            />

            <button
                type="button"
                class="govuk-button govuk-button--secondary"
                on:click=move |_| key.with_value(|k| vm.add_exclusion(k))
            >
                "Add another exclusion"
            </button>
        </div>
    }
}

#[component]
fn ExclusionRow(
    vm: QuotaOriginFormsetViewModel,
    origin_key: StoredValue<RowKey>,
    exclusion: Memo<ExclusionView>,
    choices: Memo<Vec<AreaOption>>,
) -> impl IntoView {
    let id = StoredValue::new(exclusion.with_untracked(|e| e.id.clone()));
    let area = Signal::derive(move || exclusion.with(|e| e.geographical_area.value.clone()));
    let field_id = move || exclusion.with(|e| e.geographical_area.name.clone());

    view! {
        <div class=move || group_class(exclusion.with(|e| e.geographical_area.error.is_some()))>
            <label class="govuk-label" for=field_id>
                "Exclusion " {move || exclusion.with(|e| e.index + 1)}
            </label>
            {move || error_message(exclusion.with(|e| e.geographical_area.error.clone()))}
            <select
                class="govuk-select"
                id=field_id
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    origin_key.with_value(|k| id.with_value(|e| vm.set_exclusion_area(k, e, &raw)));
                }
            >
                <option value="" prop:selected=move || area.with(String::is_empty)>
                    "-- Please select --"
                </option>
                {move || area_options(choices.get(), area)}
            </select>
            <button
                type="button"
                class="govuk-link fake-link"
                on:click=move |_| {
                    origin_key.with_value(|k| id.with_value(|e| vm.remove_exclusion(k, e)))
                }
            >
                "Remove"
            </button>
        </div>
    }
}
