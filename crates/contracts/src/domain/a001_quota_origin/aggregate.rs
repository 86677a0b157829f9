use crate::domain::common::{AreaId, ClientId};
use crate::shared::lenient;
use serde::Deserialize;

/// Component of a day/month/year date input, in field-suffix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePart {
    Day = 0,
    Month = 1,
    Year = 2,
}

impl DatePart {
    pub const ALL: [DatePart; 3] = [DatePart::Day, DatePart::Month, DatePart::Year];

    /// Suffix of the Django `SplitDateWidget` sub-field (`start_date_0` = day).
    pub fn suffix(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            DatePart::Day => "Day",
            DatePart::Month => "Month",
            DatePart::Year => "Year",
        }
    }
}

/// A date as typed: three raw strings, validated by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateParts {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    pub fn get(&self, part: DatePart) -> &str {
        match part {
            DatePart::Day => &self.day,
            DatePart::Month => &self.month,
            DatePart::Year => &self.year,
        }
    }

    pub fn with(&self, part: DatePart, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match part {
            DatePart::Day => next.day = value,
            DatePart::Month => next.month = value,
            DatePart::Year => next.year = value,
        }
        next
    }

    /// An entirely empty end date means "no end".
    pub fn is_empty(&self) -> bool {
        DatePart::ALL.iter().all(|p| self.get(*p).trim().is_empty())
    }
}

/// Which of an origin's two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn field_name(self) -> &'static str {
        match self {
            DateField::Start => "start_date",
            DateField::End => "end_date",
        }
    }
}

/// A geographical area carved out of a group origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    pub id: ClientId,
    pub pk: Option<i64>,
    pub geographical_area: Option<AreaId>,
}

/// One validity origin of a quota order number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub id: ClientId,
    pub pk: Option<i64>,
    pub geographical_area: Option<AreaId>,
    pub start_date: DateParts,
    pub end_date: DateParts,
    pub exclusions: Vec<Exclusion>,
}

impl Origin {
    pub fn empty(id: ClientId) -> Self {
        Self {
            id,
            pk: None,
            geographical_area: None,
            start_date: DateParts::default(),
            end_date: DateParts::default(),
            exclusions: Vec::new(),
        }
    }

    pub fn date(&self, field: DateField) -> &DateParts {
        match field {
            DateField::Start => &self.start_date,
            DateField::End => &self.end_date,
        }
    }
}

/// An origin as rendered into the page by the server.
///
/// After a failed submit the server re-renders what was posted, so every
/// numeric field may come back as a string or `""`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OriginData {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_int")]
    pub pk: Option<i64>,
    #[serde(default, deserialize_with = "lenient::optional_int")]
    pub geographical_area: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_date_0: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_date_1: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_date_2: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_date_0: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_date_1: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_date_2: String,
    #[serde(default)]
    pub exclusions: Vec<ExclusionData>,
}

impl OriginData {
    pub fn start_date(&self) -> DateParts {
        DateParts::new(&self.start_date_0, &self.start_date_1, &self.start_date_2)
    }

    pub fn end_date(&self) -> DateParts {
        DateParts::new(&self.end_date_0, &self.end_date_1, &self.end_date_2)
    }
}

/// Existing origins list exclusions as bare area ids; re-rendered
/// submissions carry the posted `{pk, geographical_area}` rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExclusionData {
    Area(#[serde(deserialize_with = "lenient::optional_int")] Option<i64>),
    Row {
        #[serde(default, deserialize_with = "lenient::optional_int")]
        pk: Option<i64>,
        #[serde(default, deserialize_with = "lenient::optional_int")]
        geographical_area: Option<i64>,
    },
}

impl ExclusionData {
    pub fn pk(&self) -> Option<i64> {
        match self {
            ExclusionData::Area(_) => None,
            ExclusionData::Row { pk, .. } => *pk,
        }
    }

    pub fn geographical_area(&self) -> Option<AreaId> {
        match self {
            ExclusionData::Area(area) => area.map(AreaId),
            ExclusionData::Row {
                geographical_area, ..
            } => geographical_area.map(AreaId),
        }
    }
}
