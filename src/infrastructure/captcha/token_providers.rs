//! [`TokenProvider`] implementations.

use async_trait::async_trait;

use super::script::Readiness;
use crate::domain::ports::{TokenError, TokenProvider};

/// Hands out a token obtained out of band (flag, environment, prompt).
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String, TokenError> {
        if self.token.is_empty() {
            return Err(TokenError::Challenge("no token supplied".to_string()));
        }
        Ok(self.token.clone())
    }
}

/// Refuses to ask `inner` for a token until the captcha script is ready.
pub struct GatedTokenProvider<P> {
    readiness: Readiness,
    inner: P,
}

impl<P: TokenProvider> GatedTokenProvider<P> {
    pub fn new(readiness: Readiness, inner: P) -> Self {
        Self { readiness, inner }
    }
}

#[async_trait]
impl<P: TokenProvider> TokenProvider for GatedTokenProvider<P> {
    async fn token(&self) -> Result<String, TokenError> {
        self.readiness.check()?;
        self.inner.token().await
    }
}
