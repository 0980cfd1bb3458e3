//! Domain layer containing the form model and its collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Form state, submission wire model, verification verdict
//! - [`ports`] - Traits for the token provider, the submit transport and the verifier
//!
//! The domain layer has no dependency on HTTP clients or servers; those
//! implement [`ports`] in [`crate::infrastructure`].

pub mod entities;
pub mod ports;
