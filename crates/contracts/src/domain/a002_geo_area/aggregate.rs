use crate::domain::common::AreaId;
use crate::shared::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a measure's geography is chosen in the create wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeoAreaType {
    ErgaOmnes,
    Group,
    Country,
}

impl GeoAreaType {
    pub const ALL: [GeoAreaType; 3] = [GeoAreaType::ErgaOmnes, GeoAreaType::Group, GeoAreaType::Country];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeoAreaType::ErgaOmnes => "ERGA_OMNES",
            GeoAreaType::Group => "GROUP",
            GeoAreaType::Country => "COUNTRY",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GeoAreaType::ErgaOmnes => "All countries (erga omnes)",
            GeoAreaType::Group => "A group of countries",
            GeoAreaType::Country => "Specific countries or regions",
        }
    }

    /// Element id of the radio button.
    pub fn input_id(&self) -> &'static str {
        match self {
            GeoAreaType::ErgaOmnes => "erga_omnes",
            GeoAreaType::Group => "group",
            GeoAreaType::Country => "country",
        }
    }
}

impl fmt::Display for GeoAreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoAreaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoAreaType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown geographical area type: {}", s))
    }
}

fn optional_geo_area_type<'de, D>(d: D) -> Result<Option<GeoAreaType>, D::Error>
where
    D: Deserializer<'de>,
{
    match lenient::optional_text(d)? {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Initial selection rendered by the wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoAreaInitial {
    #[serde(default, deserialize_with = "optional_geo_area_type")]
    pub geo_area_type: Option<GeoAreaType>,
    #[serde(default, deserialize_with = "lenient::optional_int")]
    pub geographical_area_group: Option<i64>,
    #[serde(default)]
    pub erga_omnes_exclusions: Vec<AreaId>,
    #[serde(default)]
    pub geo_group_exclusions: Vec<AreaId>,
    #[serde(default)]
    pub country_regions: Vec<AreaId>,
}
