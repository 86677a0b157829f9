use super::view_model::GeoAreaFormViewModel;
use crate::shared::dom::selected_areas;
use contracts::domain::a002_geo_area::form::geo_area_field;
use contracts::domain::a002_geo_area::{GeoAreaForm, GeoAreaPage, GeoAreaType};
use contracts::domain::common::{AreaId, AreaOption};
use leptos::prelude::*;

#[component]
pub fn GeoAreaWizardForm(page: GeoAreaPage) -> impl IntoView {
    let vm = GeoAreaFormViewModel::new(page);
    let errors = vm.error_messages();
    let group_class = if errors.is_empty() {
        "govuk-form-group"
    } else {
        "govuk-form-group govuk-form-group--error"
    };

    view! {
        <form on:submit=|ev| ev.prevent_default()>
            <ErrorSummary errors=errors />
            <div class=group_class>
                <div
                    id="id_geographical_area-geo_area_hint"
                    class="govuk-hint"
                    inner_html=vm.help_text.get_value().unwrap_or_default()
                ></div>
                {vm.type_error().map(|e| {
                    view! {
                        <span class="govuk-error-message">
                            <span class="govuk-visually-hidden">"Error: "</span>
                            {e}
                        </span>
                    }
                })}
                <div class="govuk-radios">
                    {GeoAreaType::ALL
                        .into_iter()
                        .map(|t| view! { <TypeOption vm=vm geo_area_type=t /> })
                        .collect_view()}
                </div>
            </div>
        </form>
        <form method="post">
            <For
                each=move || vm.fields()
                key=|field| (field.name.clone(), field.value.clone())
                children=|field| view! { <input type="hidden" name=field.name value=field.value /> }
            />
            <button type="submit" class="govuk-button" data-prevent-double-click="true">
                "Continue"
            </button>
        </form>
    }
}

#[component]
fn ErrorSummary(errors: Vec<(String, String)>) -> impl IntoView {
    (!errors.is_empty()).then(|| {
        view! {
            <div class="govuk-error-summary" role="alert" tabindex="-1">
                <h2 class="govuk-error-summary__title">"There is a problem"</h2>
                <div class="govuk-error-summary__body">
                    <ul class="govuk-list govuk-error-summary__list">
                        {errors
                            .into_iter()
                            .map(|(field, message)| {
                                view! { <li><a href=format!("#{}", field)>{message}</a></li> }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        }
    })
}

/// One radio plus the fields revealed while it is checked.
#[component]
fn TypeOption(vm: GeoAreaFormViewModel, geo_area_type: GeoAreaType) -> impl IntoView {
    let input_id = geo_area_type.input_id();
    let conditional_id = format!("{}-conditional", input_id);

    view! {
        <div class="govuk-radios__item">
            <input
                class="govuk-radios__input"
                id=input_id
                name=geo_area_field()
                type="radio"
                value=geo_area_type.as_str()
                prop:checked=move || vm.is_type(geo_area_type)
                on:change=move |_| vm.set_type(geo_area_type)
            />
            <label class="govuk-label govuk-radios__label" for=input_id>
                {geo_area_type.label()}
            </label>
        </div>
        <Show when=move || vm.is_type(geo_area_type)>
            <div class="govuk-radios__conditional" id=conditional_id.clone()>
                {match geo_area_type {
                    GeoAreaType::ErgaOmnes => view! {
                        <AreaMultiSelect
                            id="erga_omnes_exclusions"
                            label="Select one or more countries to be excluded:"
                            choices=Signal::derive(move || vm.country_regions_options())
                            chosen=Signal::derive(move || vm.form.with(|f| f.erga_omnes_exclusions().to_vec()))
                            on_change=Callback::new(move |areas| vm.set_erga_omnes_exclusions(areas))
                        />
                    }
                    .into_any(),
                    GeoAreaType::Group => view! { <GroupFields vm=vm /> }.into_any(),
                    GeoAreaType::Country => view! {
                        <AreaMultiSelect
                            id="country_regions"
                            label="Select one or more countries or regions:"
                            choices=Signal::derive(move || vm.country_regions_options())
                            chosen=Signal::derive(move || vm.form.with(|f| f.country_regions().to_vec()))
                            on_change=Callback::new(move |areas| vm.set_country_regions(areas))
                        />
                    }
                    .into_any(),
                }}
            </div>
        </Show>
    }
}

#[component]
fn GroupFields(vm: GeoAreaFormViewModel) -> impl IntoView {
    let group = move || vm.form.with(GeoAreaForm::group);

    view! {
        <div class="govuk-form-group">
            <label class="govuk-label" for="geographical_area_group">"Select a geographical area group"</label>
            <select
                class="govuk-select"
                id="geographical_area_group"
                on:change=move |ev| vm.set_group(&event_target_value(&ev))
            >
                <option value="" prop:selected=move || group().is_none()>"-- Please select --"</option>
                {vm
                    .groups_options()
                    .into_iter()
                    .map(|o| {
                        let area = o.value;
                        view! {
                            <option value=area.to_string() prop:selected=move || group() == Some(area)>
                                {o.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
        <Show when=move || group().is_some()>
            <AreaMultiSelect
                id="geo_group_exclusions"
                label="Select one or more countries to be excluded:"
                choices=Signal::derive(move || vm.group_exclusion_choices())
                chosen=Signal::derive(move || vm.form.with(|f| f.geo_group_exclusions().to_vec()))
                on_change=Callback::new(move |areas| vm.set_geo_group_exclusions(areas))
            />
        </Show>
    }
}

#[component]
fn AreaMultiSelect(
    id: &'static str,
    label: &'static str,
    #[prop(into)] choices: Signal<Vec<AreaOption>>,
    #[prop(into)] chosen: Signal<Vec<AreaId>>,
    on_change: Callback<Vec<AreaId>>,
) -> impl IntoView {
    view! {
        <div class="govuk-form-group">
            <label class="govuk-label" for=id>{label}</label>
            <select
                class="govuk-select"
                id=id
                multiple=true
                on:change=move |ev| on_change.run(selected_areas(&ev))
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
                                    prop:selected=move || chosen.with(|c| c.contains(&area))
                                >
                                    {o.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
