//! Quota order number origins, each with its excluded areas.

pub mod aggregate;
pub mod controller;
pub mod page;
pub mod serialization;
pub mod state;
pub mod view_model;

pub use aggregate::{DateField, DatePart, DateParts, Exclusion, ExclusionData, Origin, OriginData};
pub use controller::FormsetController;
pub use page::QuotaOriginsPage;
pub use serialization::serialize;
pub use state::{FormsetLookups, FormsetState};

#[cfg(test)]
mod tests;
