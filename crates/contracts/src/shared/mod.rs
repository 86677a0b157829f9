pub mod autocomplete;
pub mod form_field;
pub mod lenient;
pub mod page_context;
