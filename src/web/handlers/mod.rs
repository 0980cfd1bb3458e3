//! HTML template rendering handlers.

mod form;

pub use form::form_handler;
