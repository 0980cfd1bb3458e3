//! Captcha provider integration.
//!
//! # Client side
//!
//! - [`CaptchaScript`] / [`Readiness`] - One-time script load and readiness signal
//! - [`StaticTokenProvider`] - Token obtained out of band
//! - [`GatedTokenProvider`] - Capability check in front of any provider
//!
//! # Server side
//!
//! - [`RecaptchaVerifier`] - Google reCAPTCHA `siteverify` client

pub mod recaptcha_verifier;
pub mod script;
pub mod token_providers;

pub use recaptcha_verifier::{RecaptchaVerifier, SITEVERIFY_URL};
pub use script::{CaptchaScript, DEFAULT_SCRIPT_URL, Readiness, ScriptError, ScriptStatus};
pub use token_providers::{GatedTokenProvider, StaticTokenProvider};
