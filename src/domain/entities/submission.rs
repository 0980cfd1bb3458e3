//! Wire model of a form submission and its reply.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub username: String,
    pub token: String,
}

impl SubmissionRequest {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

/// Decoded reply of the backend.
///
/// Fields are optional because the body is decoded leniently: a missing field
/// or a non-JSON body yields `None` and the caller picks a fallback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResponse {
    /// Any 2xx status.
    Accepted { message: Option<String> },
    /// Any other status.
    Rejected { status: u16, error: Option<String> },
}

impl SubmissionResponse {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Result of one call to the form's submit workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(String),
    Failed(String),
    Ignored(IgnoreReason),
}

/// Why a submit event did not start a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The username input is empty.
    MissingUsername,
    /// A submission is already in flight and the submit control is disabled.
    InFlight,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let request = SubmissionRequest::new("alice", "tok-123");

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value, json!({ "username": "alice", "token": "tok-123" }));
    }

    #[test]
    fn test_is_accepted() {
        assert!(SubmissionResponse::Accepted { message: None }.is_accepted());
        assert!(
            !SubmissionResponse::Rejected {
                status: 400,
                error: None
            }
            .is_accepted()
        );
    }
}
