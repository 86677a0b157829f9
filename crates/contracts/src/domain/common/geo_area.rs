use crate::shared::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Primary key of a geographical area on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AreaId(pub i64);

impl<'de> Deserialize<'de> for AreaId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        // object keys arrive as strings, values as numbers
        lenient::required_int(d).map(AreaId)
    }
}

impl AreaId {
    /// Parses the value of a `<select>` option; `""` means nothing chosen.
    pub fn parse_choice(raw: &str) -> Option<AreaId> {
        raw.trim().parse::<i64>().ok().map(AreaId)
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a `<select>` of areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaOption {
    pub value: AreaId,
    /// Some templates render `name` instead of `label`.
    #[serde(alias = "name")]
    pub label: String,
}

impl AreaOption {
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value: AreaId(value),
            label: label.into(),
        }
    }
}

/// Group area -> member areas. An area is a group exactly when it is a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupMembership(BTreeMap<AreaId, Vec<AreaId>>);

impl GroupMembership {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: i64, members: &[i64]) -> Self {
        self.0
            .insert(AreaId(group), members.iter().copied().map(AreaId).collect());
        self
    }

    pub fn is_group(&self, area: AreaId) -> bool {
        self.0.contains_key(&area)
    }

    pub fn members(&self, group: AreaId) -> Option<&[AreaId]> {
        self.0.get(&group).map(Vec::as_slice)
    }

    pub fn is_member(&self, group: AreaId, area: AreaId) -> bool {
        self.members(group).is_some_and(|m| m.contains(&area))
    }

    /// `options` (in their own order) restricted to the members of `group`;
    /// `None` when `group` is not a group.
    pub fn filter_members(&self, group: AreaId, options: &[AreaOption]) -> Option<Vec<AreaOption>> {
        let members = self.members(group)?;
        Some(
            options
                .iter()
                .filter(|o| members.contains(&o.value))
                .cloned()
                .collect(),
        )
    }
}
