pub mod autocomplete;
pub mod dom;
pub mod mount;
pub mod page_context;
