//! Form models shared by the TAP page widgets.
//!
//! Everything here is pure data: no DOM, no network. The `frontend` crate
//! reads the page context, feeds it into these models and renders the result.

pub mod domain;
pub mod shared;
