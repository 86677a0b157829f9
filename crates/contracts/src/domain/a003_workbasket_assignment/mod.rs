//! Assigning users to a workbasket from its summary page.

pub mod aggregate;
pub mod form;
pub mod page;

pub use aggregate::{AssignableUser, Assignment, AssignmentAction, AssignmentLink};
pub use form::{PopoverState, UserSelection};
pub use page::AssignmentPage;
