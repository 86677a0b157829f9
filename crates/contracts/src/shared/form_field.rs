//! Django form-field naming and the name/value pairs posted back to the server.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One `<input type="hidden">` of a form POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Name of the form-wide CSRF field Django expects.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// `{prefix}-{index}-{field}`, the positional formset naming scheme.
///
/// `index` must be the row's position at the time of the call; Django
/// expects contiguous indices starting at zero.
pub fn formset_field(prefix: &str, index: usize, field: &str) -> String {
    format!("{}-{}-{}", prefix, index, field)
}

/// `{prefix}-{field}` for a plain prefixed form.
pub fn prefixed_field(prefix: &str, field: &str) -> String {
    format!("{}-{}", prefix, field)
}

/// Validation messages rendered by the server, keyed by field name.
///
/// Django emits `form.errors` as `{"field": ["msg", ...]}`; flat
/// `{"field": "msg"}` maps are accepted as well. Entries of any other shape
/// are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(HashMap<String, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorValue {
    One(String),
    Many(Vec<String>),
    Other(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for ErrorMap {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw: Option<HashMap<String, ErrorValue>> = Option::deserialize(d)?;
        let map = raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(name, value)| {
                let message = match value {
                    ErrorValue::One(m) => m,
                    ErrorValue::Many(ms) => ms.join(" "),
                    ErrorValue::Other(_) => {
                        log::warn!("errors: unexpected value for {}, skipping", name);
                        return None;
                    }
                };
                (!message.trim().is_empty()).then_some((name, message))
            })
            .collect();
        Ok(ErrorMap(map))
    }
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.0.insert(name.into(), message.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All messages sorted by field name, for an error summary.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        ErrorMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
