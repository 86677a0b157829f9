//! Pure projection of a formset revision into what the widget displays.

use super::aggregate::{DateField, DatePart, Origin};
use super::serialization::{
    exclusion_field_name, opt_value, origin_field_name, ExclusionField, OriginField, ORIGINS_PREFIX,
};
use super::state::FormsetState;
use crate::domain::common::{AreaOption, ClientId};
use crate::shared::form_field::formset_field;

/// Django's key for errors not tied to one field.
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Identity of a rendered row; `None` is the placeholder shown when the
/// list is empty.
pub type RowKey = Option<ClientId>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldView {
    /// Field name the value is posted under, also used as the element id.
    pub name: String,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateView {
    pub field: DateField,
    /// Error raised for the date as a whole.
    pub error: Option<String>,
    pub parts: [(DatePart, FieldView); 3],
}

impl DateView {
    pub fn has_error(&self) -> bool {
        self.error.is_some() || self.parts.iter().any(|(_, f)| f.error.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionView {
    pub id: ClientId,
    pub index: usize,
    pub geographical_area: FieldView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginView {
    pub key: RowKey,
    pub index: usize,
    pub error: Option<String>,
    pub geographical_area: FieldView,
    pub start_date: DateView,
    pub end_date: DateView,
    /// Exclusions are only offered under a group area.
    pub show_exclusions: bool,
    pub exclusion_choices: Vec<AreaOption>,
    pub exclusions: Vec<ExclusionView>,
}

fn field(state: &FormsetState, name: String, value: String) -> FieldView {
    let error = state.errors().get(&name).map(str::to_string);
    FieldView { name, value, error }
}

fn date_view(state: &FormsetState, index: usize, origin: Option<&Origin>, which: DateField) -> DateView {
    let parts = DatePart::ALL.map(|part| {
        let value = origin.map(|o| o.date(which).get(part).to_string()).unwrap_or_default();
        (
            part,
            field(state, origin_field_name(index, OriginField::Date(which, part)), value),
        )
    });
    DateView {
        field: which,
        error: state
            .errors()
            .get(&origin_field_name(index, OriginField::DateWhole(which)))
            .map(str::to_string),
        parts,
    }
}

fn origin_view(state: &FormsetState, index: usize, origin: Option<&Origin>) -> OriginView {
    let exclusion_choices = origin
        .and_then(|o| state.available_exclusions(o))
        .unwrap_or_default();
    let show_exclusions = origin.is_some_and(|o| state.is_group(o.geographical_area));
    let exclusions = origin
        .map(|o| {
            o.exclusions
                .iter()
                .enumerate()
                .map(|(j, e)| ExclusionView {
                    id: e.id.clone(),
                    index: j,
                    geographical_area: field(
                        state,
                        exclusion_field_name(index, j, ExclusionField::GeographicalArea),
                        opt_value(e.geographical_area),
                    ),
                })
                .collect()
        })
        .unwrap_or_default();

    OriginView {
        key: origin.map(|o| o.id.clone()),
        index,
        error: state
            .errors()
            .get(&formset_field(ORIGINS_PREFIX, index, NON_FIELD_ERRORS))
            .map(str::to_string),
        geographical_area: field(
            state,
            origin_field_name(index, OriginField::GeographicalArea),
            opt_value(origin.and_then(|o| o.geographical_area)),
        ),
        start_date: date_view(state, index, origin, DateField::Start),
        end_date: date_view(state, index, origin, DateField::End),
        show_exclusions,
        exclusion_choices,
        exclusions,
    }
}

/// One view per live origin, or a single placeholder when there are none.
pub fn build(state: &FormsetState) -> Vec<OriginView> {
    if state.is_empty() {
        return vec![origin_view(state, 0, None)];
    }
    state
        .origins()
        .iter()
        .enumerate()
        .map(|(i, o)| origin_view(state, i, Some(o)))
        .collect()
}

/// Keys of the rows [`build`] would produce, in order.
pub fn row_keys(state: &FormsetState) -> Vec<RowKey> {
    if state.is_empty() {
        return vec![None];
    }
    state.origins().iter().map(|o| Some(o.id.clone())).collect()
}

/// The view of a single row, if it is still rendered.
pub fn row(state: &FormsetState, key: &RowKey) -> Option<OriginView> {
    match key {
        None if state.is_empty() => Some(origin_view(state, 0, None)),
        None => None,
        Some(id) => {
            let index = state.position(id)?;
            Some(origin_view(state, index, state.origins().get(index)))
        }
    }
}
