//! Trait definitions for the collaborators of the domain.
//!
//! Implementations live in `crate::infrastructure`; mocks are generated via
//! `mockall` for unit tests.
//!
//! - [`TokenProvider`] - Issues challenge-response tokens (client side)
//! - [`SubmitBackend`] - Posts submissions to the backend (client side)
//! - [`CaptchaVerifier`] - Verifies tokens with the provider (server side)

pub mod captcha_verifier;
pub mod submit_backend;
pub mod token_provider;

pub use captcha_verifier::{CaptchaVerifier, VerifyError};
pub use submit_backend::{SubmitBackend, TransportError};
pub use token_provider::{TokenError, TokenProvider};

#[cfg(test)]
pub use captcha_verifier::MockCaptchaVerifier;
#[cfg(test)]
pub use submit_backend::MockSubmitBackend;
#[cfg(test)]
pub use token_provider::MockTokenProvider;
