//! Formset field names for origins and their exclusions.
//!
//! The server parses `origins-{i}-…` and, inside each origin,
//! `origins-{i}-exclusions-{j}-…`. `i` and `j` are positions in the live
//! lists when the fields are produced; a row's client id never leaks into a
//! name. Error look-ups use the same functions, so a message always lands
//! next to the control it was raised for.

use super::aggregate::{DateField, DatePart, Origin};
use super::state::FormsetState;
use crate::shared::form_field::{formset_field, FormField};

pub const ORIGINS_PREFIX: &str = "origins";
pub const EXCLUSIONS_PREFIX: &str = "exclusions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginField {
    Pk,
    GeographicalArea,
    Date(DateField, DatePart),
    /// The whole date, as Django reports errors for the combined field.
    DateWhole(DateField),
}

impl OriginField {
    pub fn as_string(self) -> String {
        match self {
            OriginField::Pk => "pk".to_string(),
            OriginField::GeographicalArea => "geographical_area".to_string(),
            OriginField::Date(field, part) => format!("{}_{}", field.field_name(), part.suffix()),
            OriginField::DateWhole(field) => field.field_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionField {
    Pk,
    GeographicalArea,
}

impl ExclusionField {
    pub fn as_str(self) -> &'static str {
        match self {
            ExclusionField::Pk => "pk",
            ExclusionField::GeographicalArea => "geographical_area",
        }
    }
}

/// `origins-{index}-{field}`
pub fn origin_field_name(index: usize, field: OriginField) -> String {
    formset_field(ORIGINS_PREFIX, index, &field.as_string())
}

/// `origins-{origin_index}-exclusions-{index}-{field}`
pub fn exclusion_field_name(origin_index: usize, index: usize, field: ExclusionField) -> String {
    let prefix = format!("{}-{}-{}", ORIGINS_PREFIX, origin_index, EXCLUSIONS_PREFIX);
    formset_field(&prefix, index, field.as_str())
}

pub(crate) fn opt_value<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn origin_fields(index: usize, origin: &Origin, out: &mut Vec<FormField>) {
    out.push(FormField::new(
        origin_field_name(index, OriginField::Pk),
        opt_value(origin.pk),
    ));
    out.push(FormField::new(
        origin_field_name(index, OriginField::GeographicalArea),
        opt_value(origin.geographical_area),
    ));
    for field in [DateField::Start, DateField::End] {
        let date = origin.date(field);
        for part in DatePart::ALL {
            out.push(FormField::new(
                origin_field_name(index, OriginField::Date(field, part)),
                date.get(part),
            ));
        }
    }
    for (j, exclusion) in origin.exclusions.iter().enumerate() {
        out.push(FormField::new(
            exclusion_field_name(index, j, ExclusionField::Pk),
            opt_value(exclusion.pk),
        ));
        out.push(FormField::new(
            exclusion_field_name(index, j, ExclusionField::GeographicalArea),
            opt_value(exclusion.geographical_area),
        ));
    }
}

/// Hidden fields for every live origin, renumbered from zero.
pub fn serialize(state: &FormsetState) -> Vec<FormField> {
    let mut out = Vec::new();
    for (i, origin) in state.origins().iter().enumerate() {
        origin_fields(i, origin, &mut out);
    }
    out
}
