mod view;
mod view_model;

pub use view::AssignmentPopover;
pub use view_model::AssignmentPopoverViewModel;
