//! Business logic services for the application layer.

pub mod form_controller;
pub mod submit_service;

pub use form_controller::FormController;
pub use submit_service::SubmitService;
