use super::aggregate::OriginData;
use crate::domain::common::{AreaOption, GroupMembership};
use crate::shared::form_field::ErrorMap;

/// Page globals the quota create/edit templates render for the origins widget.
pub mod globals {
    pub const ORIGINS: &str = "originsData";
    pub const GEO_AREA_OPTIONS: &str = "geoAreasOptions";
    pub const EXCLUSION_OPTIONS: &str = "exclusionsOptions";
    pub const GROUPS_WITH_MEMBERS: &str = "groupsWithMembers";
    pub const ERRORS: &str = "originsErrors";
}

/// Everything the origins widget is given at mount time.
#[derive(Debug, Clone, Default)]
pub struct QuotaOriginsPage {
    pub origins: Vec<OriginData>,
    pub geo_area_options: Vec<AreaOption>,
    /// Areas that may be excluded (every non-group area).
    pub exclusion_options: Vec<AreaOption>,
    pub groups_with_members: GroupMembership,
    pub errors: ErrorMap,
}
