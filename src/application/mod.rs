//! Application layer services.
//!
//! Services orchestrate domain collaborators behind a small API consumed by
//! views, handlers and binaries.
//!
//! # Available Services
//!
//! - [`services::form_controller::FormController`] - Client-side submit workflow
//! - [`services::submit_service::SubmitService`] - Backend verification and greeting

pub mod services;
