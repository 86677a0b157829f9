//! Types shared by all page forms

pub mod client_id;
pub mod geo_area;

// Re-exports
pub use client_id::{unique_id, ClientId, IdSource, SequentialIds, UuidIds};
pub use geo_area::{AreaId, AreaOption, GroupMembership};
