//! Infrastructure layer for external integrations.
//!
//! Implements the traits of [`crate::domain::ports`] over HTTP.
//!
//! # Modules
//!
//! - [`backend_client`] - reqwest transport for `/api/submit`
//! - [`captcha`] - Provider script, token providers and the verify client
//! - [`http_client`] - Shared reqwest client construction

pub mod backend_client;
pub mod captcha;
pub mod http_client;

pub use backend_client::HttpSubmitBackend;
pub use http_client::ClientError;
