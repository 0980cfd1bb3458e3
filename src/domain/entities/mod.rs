//! Core domain entities.
//!
//! Plain data structures shared by the client workflow and the backend.
//!
//! # Entity Types
//!
//! - [`FormState`] - What the form view renders
//! - [`SubmissionRequest`] / [`SubmissionResponse`] - The `/api/submit` contract
//! - [`SubmitOutcome`] - Result of one submit event
//! - [`Verification`] - Verdict of the captcha provider

pub mod form_state;
pub mod submission;
pub mod verification;

pub use form_state::FormState;
pub use submission::{IgnoreReason, SubmissionRequest, SubmissionResponse, SubmitOutcome};
pub use verification::Verification;
