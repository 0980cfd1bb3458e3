//! Server-side token verification.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Verification;

/// Errors that prevent a verdict from being reached.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("verify request failed: {0}")]
    Request(String),
    #[error("verify reply could not be decoded: {0}")]
    Decode(String),
}

/// Checks challenge-response tokens with the captcha provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::captcha::RecaptchaVerifier`] - Google reCAPTCHA `siteverify`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    /// Asks the provider for a verdict on `token`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] when the provider could not be reached or its
    /// reply is malformed. A rejected token is `Ok` with `success == false`.
    async fn verify(&self, token: &str) -> Result<Verification, VerifyError>;
}
