//! Google reCAPTCHA `siteverify` client.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::domain::entities::Verification;
use crate::domain::ports::{CaptchaVerifier, VerifyError};
use crate::infrastructure::http_client::{ClientError, build_client, parse_url};

/// Production verify endpoint.
pub const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Verifies tokens by posting `secret` and `response` as a form to the
/// verify endpoint.
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    verify_url: Url,
    secret: String,
}

impl RecaptchaVerifier {
    /// Creates a verifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `verify_url` is invalid or the client
    /// cannot be built.
    pub fn new(
        secret: impl Into<String>,
        verify_url: &str,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client(Some(timeout))?,
            verify_url: parse_url(verify_url)?,
            secret: secret.into(),
        })
    }

    pub fn verify_url(&self) -> &Url {
        &self.verify_url
    }
}

#[async_trait]
impl CaptchaVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> Result<Verification, VerifyError> {
        let response = self
            .client
            .post(self.verify_url.clone())
            .form(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await
            .map_err(|e| VerifyError::Request(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| VerifyError::Request(e.to_string()))?;
        tracing::debug!(raw = %body, "siteverify reply");

        serde_json::from_str(&body).map_err(|e| VerifyError::Decode(e.to_string()))
    }
}
