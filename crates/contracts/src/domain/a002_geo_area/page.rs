use super::aggregate::GeoAreaInitial;
use crate::domain::common::{AreaOption, GroupMembership};
use crate::shared::form_field::ErrorMap;

/// Page globals the measure wizard renders for its geographical area step.
pub mod globals {
    pub const INITIAL: &str = "initial";
    pub const ERRORS: &str = "geoAreaErrors";
    pub const GROUPS_OPTIONS: &str = "groupsOptions";
    pub const COUNTRY_REGIONS_OPTIONS: &str = "countryRegionsOptions";
    pub const GROUPS_WITH_MEMBERS: &str = "groupsWithMembers";
}

#[derive(Debug, Clone, Default)]
pub struct GeoAreaPage {
    pub initial: GeoAreaInitial,
    pub errors: ErrorMap,
    pub csrf_token: String,
    pub help_text: Option<String>,
    pub groups_options: Vec<AreaOption>,
    /// Also the choices for every kind of exclusion.
    pub country_regions_options: Vec<AreaOption>,
    pub groups_with_members: GroupMembership,
}
