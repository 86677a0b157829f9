//! Quota origins formset
//!
//! - view_model.rs: signals plus commands over the controller
//! - view.rs: Leptos components

mod view;
mod view_model;

pub use view::QuotaOriginFormset;
pub use view_model::QuotaOriginFormsetViewModel;
