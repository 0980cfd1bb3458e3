//! Boundary to the third-party challenge-response widget.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while obtaining a challenge-response token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The provider script has not signalled readiness yet.
    #[error("captcha provider is not ready")]
    NotReady,
    /// The provider script failed to load.
    #[error("captcha provider failed to load: {0}")]
    Unavailable(String),
    /// The challenge itself failed or was abandoned.
    #[error("captcha challenge failed: {0}")]
    Challenge(String),
}

/// Issues single-use tokens proving the requester passed an anti-automation check.
///
/// Called once per submission with no arguments. No timeout is applied at this
/// boundary; a provider that never resolves keeps the form loading.
///
/// # Implementations
///
/// - [`crate::infrastructure::captcha::StaticTokenProvider`] - Token supplied from outside
/// - [`crate::infrastructure::captcha::GatedTokenProvider`] - Refuses until the script is ready
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Requests a fresh token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] if no token could be produced.
    async fn token(&self) -> Result<String, TokenError>;
}
