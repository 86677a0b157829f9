//! Contract of the remote search endpoints behind autocomplete fields.
//!
//! `GET <source_url>?search=<q>&format=json` answers either with a DRF page
//! (`{"results": [...]}`) or with a bare list of candidates.

use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Queries shorter than this are not sent.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Response format requested from the search endpoint.
pub const RESPONSE_FORMAT: &str = "json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteOption {
    #[serde(deserialize_with = "lenient::text")]
    pub value: String,
    pub label: String,
}

/// Query string parameters of a search request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery<'a> {
    pub search: &'a str,
    pub format: &'a str,
}

impl<'a> SearchQuery<'a> {
    pub fn new(search: &'a str) -> Self {
        Self {
            search,
            format: RESPONSE_FORMAT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Paged { results: Vec<AutocompleteOption> },
    Plain(Vec<AutocompleteOption>),
}

impl SearchResponse {
    pub fn into_options(self) -> Vec<AutocompleteOption> {
        match self {
            SearchResponse::Paged { results } => results,
            SearchResponse::Plain(options) => options,
        }
    }
}

/// Whether `query` is long enough to be sent.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LENGTH
}
