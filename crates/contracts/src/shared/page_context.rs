//! Errors raised while reading the snapshot a page renders for its widgets.
//!
//! The snapshot types live next to the forms they feed
//! (`domain::*::page`).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageContextError {
    #[error("page global `{0}` is not defined")]
    MissingGlobal(&'static str),

    #[error("page global `{name}` is malformed: {reason}")]
    Malformed { name: &'static str, reason: String },

    #[error("page element `{0}` was not found")]
    MissingElement(&'static str),
}

impl PageContextError {
    pub fn malformed(name: &'static str, reason: impl ToString) -> Self {
        Self::Malformed {
            name,
            reason: reason.to_string(),
        }
    }
}
