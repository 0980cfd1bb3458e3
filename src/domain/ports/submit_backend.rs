//! Transport used by the form to reach the backend.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{SubmissionRequest, SubmissionResponse};

/// The request never completed: connection refused, DNS failure, reset, or an
/// unreadable body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Sends a [`SubmissionRequest`] to the backend.
///
/// Any reply that arrives, whatever its status, is a [`SubmissionResponse`];
/// only a failure to exchange the request is an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitBackend: Send + Sync {
    /// Posts the request and decodes the reply.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no reply was received.
    async fn submit(&self, request: &SubmissionRequest)
    -> Result<SubmissionResponse, TransportError>;
}
