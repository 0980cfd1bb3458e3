//! Configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before use.
//!
//! ## Backend service ([`Config`])
//!
//! ```bash
//! export CAPTCHA_SECRET_KEY="6Lc..."        # required
//! export CAPTCHA_SITE_KEY="6Lc..."          # enables the HTML form at GET /
//! export LISTEN="0.0.0.0:8080"
//! ```
//!
//! ### Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `CAPTCHA_SITE_KEY` - Public site key rendered into the form page
//! - `CAPTCHA_VERIFY_URL` - Verify endpoint (default: Google `siteverify`)
//! - `CAPTCHA_MIN_SCORE` - Lowest accepted score, `0.0..=1.0` (default: `0.5`)
//! - `CAPTCHA_VERIFY_TIMEOUT` - Verify request timeout in seconds (default: `10`)
//! - `PUBLIC_BACKEND_URL` - Base URL the form page posts to (default: same origin)
//! - `CORS_ALLOW_ORIGIN` - Allowed origin for `/api` (default: `*`)
//! - `BEHIND_PROXY` - Read client IP from proxy headers for rate limiting
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ## Submit client ([`ClientConfig`])
//!
//! - `CAPTCHA_BACKEND_URL` - Backend base URL (required unless passed on the command line)
//! - `CAPTCHA_SITE_KEY` - Site key used to load the provider script
//! - `CAPTCHA_TOKEN` - Pre-obtained challenge-response token

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::submit_service::DEFAULT_MIN_SCORE;
use crate::infrastructure::captcha::SITEVERIFY_URL;

/// Backend service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Secret shared with the captcha provider. Never logged.
    pub captcha_secret: String,
    /// When set, `GET /` serves the HTML form with this site key.
    pub captcha_site_key: Option<String>,
    pub captcha_verify_url: String,
    pub captcha_min_score: f64,
    /// Timeout (seconds) for a single verify request.
    pub captcha_verify_timeout: u64,
    /// Base URL the form page posts to; empty means same origin.
    pub public_backend_url: String,
    pub cors_allow_origin: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CAPTCHA_SECRET_KEY` is missing or a numeric
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let captcha_secret =
            env::var("CAPTCHA_SECRET_KEY").context("CAPTCHA_SECRET_KEY must be set")?;

        let captcha_site_key = env::var("CAPTCHA_SITE_KEY").ok().filter(|k| !k.is_empty());

        let captcha_verify_url =
            env::var("CAPTCHA_VERIFY_URL").unwrap_or_else(|_| SITEVERIFY_URL.to_string());

        let captcha_min_score = match env::var("CAPTCHA_MIN_SCORE") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("CAPTCHA_MIN_SCORE must be a number, got '{v}'"))?,
            Err(_) => DEFAULT_MIN_SCORE,
        };

        let captcha_verify_timeout = match env::var("CAPTCHA_VERIFY_TIMEOUT") {
            Ok(v) => v.parse().with_context(|| {
                format!("CAPTCHA_VERIFY_TIMEOUT must be a whole number of seconds, got '{v}'")
            })?,
            Err(_) => 10,
        };

        let public_backend_url = env::var("PUBLIC_BACKEND_URL").unwrap_or_default();
        let cors_allow_origin = env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            captcha_secret,
            captcha_site_key,
            captcha_verify_url,
            captcha_min_score,
            captcha_verify_timeout,
            public_backend_url,
            cors_allow_origin,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `captcha_secret` is empty
    /// - `captcha_verify_url` is not an http(s) URL
    /// - `captcha_min_score` is outside `0.0..=1.0`
    /// - `captcha_verify_timeout` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.captcha_secret.is_empty() {
            anyhow::bail!("CAPTCHA_SECRET_KEY must not be empty");
        }

        if !self.captcha_verify_url.starts_with("http://")
            && !self.captcha_verify_url.starts_with("https://")
        {
            anyhow::bail!(
                "CAPTCHA_VERIFY_URL must start with 'http://' or 'https://', got '{}'",
                self.captcha_verify_url
            );
        }

        if !(0.0..=1.0).contains(&self.captcha_min_score) {
            anyhow::bail!(
                "CAPTCHA_MIN_SCORE must be between 0.0 and 1.0, got {}",
                self.captcha_min_score
            );
        }

        if self.captcha_verify_timeout == 0 {
            anyhow::bail!("CAPTCHA_VERIFY_TIMEOUT must be greater than 0");
        }

        if self.cors_allow_origin != "*"
            && self
                .cors_allow_origin
                .parse::<axum::http::HeaderValue>()
                .is_err()
        {
            anyhow::bail!(
                "CORS_ALLOW_ORIGIN must be '*' or a valid origin, got '{}'",
                self.cors_allow_origin
            );
        }

        Ok(())
    }

    pub fn verify_timeout(&self) -> Duration {
        Duration::from_secs(self.captcha_verify_timeout)
    }

    /// Returns whether the HTML form page is served.
    pub fn is_form_page_enabled(&self) -> bool {
        self.captcha_site_key.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Captcha secret: {}", mask_secret(&self.captcha_secret));
        tracing::info!("  Verify URL: {}", self.captcha_verify_url);
        tracing::info!("  Min score: {}", self.captcha_min_score);

        match self.captcha_site_key {
            Some(ref key) => tracing::info!("  Form page: enabled (site key {})", key),
            None => tracing::info!("  Form page: disabled"),
        }

        tracing::info!("  CORS origin: {}", self.cors_allow_origin);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("captcha_secret", &mask_secret(&self.captcha_secret))
            .field("captcha_site_key", &self.captcha_site_key)
            .field("captcha_verify_url", &self.captcha_verify_url)
            .field("captcha_min_score", &self.captcha_min_score)
            .field("captcha_verify_timeout", &self.captcha_verify_timeout)
            .field("public_backend_url", &self.public_backend_url)
            .field("cors_allow_origin", &self.cors_allow_origin)
            .field("behind_proxy", &self.behind_proxy)
            .finish()
    }
}

/// Submit client configuration loaded from environment variables.
///
/// Every field may be overridden on the command line.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub backend_url: Option<String>,
    pub site_key: Option<String>,
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let non_empty = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            backend_url: non_empty("CAPTCHA_BACKEND_URL"),
            site_key: non_empty("CAPTCHA_SITE_KEY"),
            token: non_empty("CAPTCHA_TOKEN"),
        }
    }

    /// Returns the backend base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if no backend URL was configured.
    pub fn require_backend_url(&self) -> Result<&str> {
        self.backend_url
            .as_deref()
            .context("CAPTCHA_BACKEND_URL must be set (or pass --backend-url)")
    }
}

/// Masks a secret for logging, keeping only its first four characters.
///
/// - `6LcAbCdEfGh` → `6LcA***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    match secret.char_indices().nth(4) {
        Some((idx, _)) => format!("{}***", &secret[..idx]),
        None => "***".to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
