//! reqwest implementation of [`SubmitBackend`].

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::http_client::{ClientError, build_client, parse_url};
use crate::domain::entities::{SubmissionRequest, SubmissionResponse};
use crate::domain::ports::{SubmitBackend, TransportError};

/// Path of the submission endpoint relative to the backend base URL.
pub const SUBMIT_PATH: &str = "/api/submit";

/// Either field may be present; anything undecodable counts as neither.
#[derive(Debug, Default, Deserialize)]
struct ReplyBody {
    message: Option<String>,
    error: Option<String>,
}

/// Posts submissions to `<base>/api/submit` as JSON.
///
/// No retries and no request timeout: a hung backend keeps the caller
/// suspended until the connection fails.
#[derive(Debug, Clone)]
pub struct HttpSubmitBackend {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSubmitBackend {
    /// Creates a backend client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the joined endpoint is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(build_client(None)?, base_url)
    }

    /// Creates a backend client reusing an existing reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let endpoint = submit_endpoint(base_url)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Joins `base_url` with [`SUBMIT_PATH`], tolerating a trailing slash.
pub fn submit_endpoint(base_url: &str) -> Result<Url, ClientError> {
    parse_url(&format!("{}{}", base_url.trim_end_matches('/'), SUBMIT_PATH))
}

#[async_trait]
impl SubmitBackend for HttpSubmitBackend {
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResponse, TransportError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting submission");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let body: ReplyBody = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::debug!(%status, error = %e, "Reply body is not the expected JSON");
            ReplyBody::default()
        });

        if status.is_success() {
            Ok(SubmissionResponse::Accepted {
                message: body.message,
            })
        } else {
            Ok(SubmissionResponse::Rejected {
                status: status.as_u16(),
                error: body.error,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_endpoint_joins_path() {
        assert_eq!(
            submit_endpoint("http://localhost:8080").unwrap().as_str(),
            "http://localhost:8080/api/submit"
        );
        assert_eq!(
            submit_endpoint("http://localhost:8080/").unwrap().as_str(),
            "http://localhost:8080/api/submit"
        );
        assert_eq!(
            submit_endpoint("https://example.com/form").unwrap().as_str(),
            "https://example.com/form/api/submit"
        );
    }

    #[test]
    fn test_submit_endpoint_rejects_missing_base() {
        let err = submit_endpoint("").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }
}
