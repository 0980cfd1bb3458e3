//! Submit workflow of the username form.

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::entities::{
    FormState, IgnoreReason, SubmissionRequest, SubmissionResponse, SubmitOutcome,
};
use crate::domain::ports::{SubmitBackend, TokenProvider};

/// Shown when the backend rejects a submission without an `error` field.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Shown when the request never reached the backend or never returned.
pub const CONNECTIVITY_ERROR: &str =
    "Failed to connect to backend. Make sure the backend server is running on port 8080.";

/// Shown when no challenge-response token could be obtained.
pub const TOKEN_ERROR: &str = "Could not complete the verification challenge. Please try again.";

/// Owns the [`FormState`] and drives the submit workflow.
///
/// State is published through a [`watch`] channel: views call
/// [`subscribe`](Self::subscribe) and re-render on every change, including the
/// transition into and out of the loading state.
///
/// # Workflow
///
/// 1. Mark loading and clear the previous result
/// 2. Await a token from the [`TokenProvider`]
/// 3. Post `{username, token}` through the [`SubmitBackend`]
/// 4. Settle with the success message or an error text
///
/// Token acquisition always settles before the request is issued. There are
/// no retries and no timeouts.
pub struct FormController<T, B> {
    token_provider: T,
    backend: B,
    state: watch::Sender<FormState>,
}

impl<T: TokenProvider, B: SubmitBackend> FormController<T, B> {
    /// Mounts a form with empty state.
    pub fn new(token_provider: T, backend: B) -> Self {
        let (state, _) = watch::channel(FormState::new());
        Self {
            token_provider,
            backend,
            state,
        }
    }

    /// Returns a receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Change handler of the username input.
    pub fn set_username(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_if_modified(|state| {
            if state.username == value {
                return false;
            }
            state.username = value;
            true
        });
    }

    /// Whether the submit control is currently disabled.
    pub fn is_submit_disabled(&self) -> bool {
        self.state.borrow().is_submit_disabled()
    }

    /// Handles a submit event.
    ///
    /// Returns [`SubmitOutcome::Ignored`] without touching the state when the
    /// username is empty or a submission is already in flight. Every other
    /// path leaves `is_loading == false` and exactly one of
    /// `response_message` / `error` set.
    pub async fn submit(&self) -> SubmitOutcome {
        let mut ignored = None;
        let mut username = String::new();

        self.state.send_if_modified(|state| {
            if state.is_loading {
                ignored = Some(IgnoreReason::InFlight);
                return false;
            }
            if !state.has_required_fields() {
                ignored = Some(IgnoreReason::MissingUsername);
                return false;
            }
            state.begin_submission();
            username.clone_from(&state.username);
            true
        });

        if let Some(reason) = ignored {
            debug!(?reason, "Submit ignored");
            return SubmitOutcome::Ignored(reason);
        }

        let outcome = self.run(username).await;

        self.state.send_modify(|state| match &outcome {
            SubmitOutcome::Succeeded(message) => state.succeed(message.as_str()),
            SubmitOutcome::Failed(error) => state.fail(error.as_str()),
            SubmitOutcome::Ignored(_) => state.is_loading = false,
        });

        outcome
    }

    async fn run(&self, username: String) -> SubmitOutcome {
        let token = match self.token_provider.token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to obtain captcha token");
                return SubmitOutcome::Failed(TOKEN_ERROR.to_string());
            }
        };

        let request = SubmissionRequest::new(username, token);

        match self.backend.submit(&request).await {
            Ok(SubmissionResponse::Accepted {
                message: Some(message),
            }) => {
                info!(username = %request.username, "Submission accepted");
                SubmitOutcome::Succeeded(message)
            }
            Ok(SubmissionResponse::Accepted { message: None }) => {
                warn!("Backend accepted the submission without a message");
                SubmitOutcome::Failed(GENERIC_ERROR.to_string())
            }
            Ok(SubmissionResponse::Rejected { status, error }) => {
                info!(status, ?error, "Submission rejected");
                SubmitOutcome::Failed(
                    error
                        .filter(|e| !e.is_empty())
                        .unwrap_or_else(|| GENERIC_ERROR.to_string()),
                )
            }
            Err(e) => {
                warn!(error = %e, "Backend unreachable");
                SubmitOutcome::Failed(CONNECTIVITY_ERROR.to_string())
            }
        }
    }
}
