pub mod aggregate;
pub mod form;
pub mod page;

pub use aggregate::{GeoAreaInitial, GeoAreaType};
pub use form::{GeoAreaForm, GeoAreaLookups};
pub use page::GeoAreaPage;
