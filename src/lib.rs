//! # Captcha Form
//!
//! A username submission form protected by a challenge-response captcha,
//! covering both ends of its single HTTP contract:
//!
//! - the **client workflow**: acquire a token, `POST {username, token}` to
//!   `/api/submit`, and surface the success message or the error;
//! - the **backend**: verify the token with Google reCAPTCHA and greet the user.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Form state, wire model and collaborator traits
//! - **Application Layer** ([`application`]) - Form controller and submit service
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest clients, captcha script and token providers
//! - **API Layer** ([`api`]) - `/api/submit` handler, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML form page
//!
//! ## Quick Start
//!
//! ```bash
//! # Backend
//! export CAPTCHA_SECRET_KEY="..."
//! export CAPTCHA_SITE_KEY="..."
//! cargo run
//!
//! # Client
//! cargo run --bin submit -- --backend-url http://localhost:8080 --token "<token>"
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`]
//! and [`config::ClientConfig`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FormController, SubmitService};
    pub use crate::domain::entities::{
        FormState, IgnoreReason, SubmissionRequest, SubmissionResponse, SubmitOutcome,
        Verification,
    };
    pub use crate::domain::ports::{
        CaptchaVerifier, SubmitBackend, TokenError, TokenProvider, TransportError, VerifyError,
    };
    pub use crate::error::AppError;
    pub use crate::infrastructure::HttpSubmitBackend;
    pub use crate::infrastructure::captcha::{
        CaptchaScript, GatedTokenProvider, RecaptchaVerifier, StaticTokenProvider,
    };
    pub use crate::state::AppState;
}
