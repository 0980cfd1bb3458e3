//! HTTP request handlers for API endpoints.

pub mod health;
pub mod submit;

pub use health::health_handler;
pub use submit::submit_handler;
