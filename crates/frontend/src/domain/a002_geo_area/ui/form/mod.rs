mod view;
mod view_model;

pub use view::GeoAreaWizardForm;
pub use view_model::GeoAreaFormViewModel;
