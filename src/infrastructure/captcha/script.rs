//! One-time loading of the captcha provider script and its readiness signal.
//!
//! The provider's token API only exists once its script has loaded for a
//! given site key. [`CaptchaScript::initialize`] performs that load exactly
//! once before the form becomes interactive, and every [`Readiness`] handle
//! observes the outcome.
//!
//! ```text
//! Pending ──initialize()──► Ready
//!    │                        ▲
//!    └──► Failed(reason) ─────┘ (retry via initialize())
//! ```

use tokio::sync::watch;
use url::Url;

use crate::domain::ports::TokenError;
use crate::infrastructure::http_client::{ClientError, parse_url};

/// Script endpoint of Google reCAPTCHA v3.
pub const DEFAULT_SCRIPT_URL: &str = "https://www.google.com/recaptcha/api.js";

/// Load state of the provider script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStatus {
    Pending,
    Ready,
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error(transparent)]
    Url(#[from] ClientError),
    #[error("failed to load captcha script: {0}")]
    Load(String),
}

/// The provider script for one site key.
pub struct CaptchaScript {
    site_key: String,
    script_url: Url,
    status: watch::Sender<ScriptStatus>,
}

impl CaptchaScript {
    /// Prepares the Google reCAPTCHA script for `site_key`.
    pub fn new(site_key: impl Into<String>) -> Result<Self, ScriptError> {
        Self::with_base(DEFAULT_SCRIPT_URL, site_key)
    }

    /// Prepares a script served from `base`; the site key is appended as the
    /// `render` query parameter.
    pub fn with_base(base: &str, site_key: impl Into<String>) -> Result<Self, ScriptError> {
        let site_key = site_key.into();
        if site_key.is_empty() {
            tracing::warn!("Captcha site key is empty; the script will load without a render key");
        }

        let mut script_url = parse_url(base)?;
        script_url
            .query_pairs_mut()
            .append_pair("render", &site_key);

        let (status, _) = watch::channel(ScriptStatus::Pending);

        Ok(Self {
            site_key,
            script_url,
            status,
        })
    }

    pub fn site_key(&self) -> &str {
        &self.site_key
    }

    /// URL to load, also rendered into the HTML form page.
    pub fn script_url(&self) -> &Url {
        &self.script_url
    }

    pub fn status(&self) -> ScriptStatus {
        self.status.borrow().clone()
    }

    /// Returns a handle observing the readiness signal.
    pub fn readiness(&self) -> Readiness {
        Readiness(self.status.subscribe())
    }

    /// Marks the script ready without fetching it.
    ///
    /// Used when tokens are obtained out of band, e.g. pasted into the CLI.
    pub fn assume_ready(&self) {
        self.status.send_replace(ScriptStatus::Ready);
    }

    /// Loads the script once and publishes the outcome.
    ///
    /// Returns immediately if the script is already ready.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Load`] if the script could not be fetched; the
    /// status becomes [`ScriptStatus::Failed`].
    pub async fn initialize(&self, client: &reqwest::Client) -> Result<(), ScriptError> {
        if *self.status.borrow() == ScriptStatus::Ready {
            return Ok(());
        }

        let result = client
            .get(self.script_url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match result {
            Ok(_) => {
                tracing::info!(url = %self.script_url, "Captcha script loaded");
                self.status.send_replace(ScriptStatus::Ready);
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::warn!(url = %self.script_url, error = %reason, "Captcha script failed to load");
                self.status.send_replace(ScriptStatus::Failed(reason.clone()));
                Err(ScriptError::Load(reason))
            }
        }
    }
}

/// Read side of the readiness signal.
#[derive(Debug, Clone)]
pub struct Readiness(watch::Receiver<ScriptStatus>);

impl Readiness {
    pub fn status(&self) -> ScriptStatus {
        self.0.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        *self.0.borrow() == ScriptStatus::Ready
    }

    /// Capability check performed before every token request.
    ///
    /// # Errors
    ///
    /// [`TokenError::NotReady`] while pending, [`TokenError::Unavailable`] after a failed load.
    pub fn check(&self) -> Result<(), TokenError> {
        status_to_result(&self.0.borrow())
    }

    /// Waits until the script has either loaded or failed.
    ///
    /// # Errors
    ///
    /// Same as [`check`](Self::check) once settled, or
    /// [`TokenError::Unavailable`] if the script handle was dropped while pending.
    pub async fn wait(&mut self) -> Result<(), TokenError> {
        let status = self
            .0
            .wait_for(|status| *status != ScriptStatus::Pending)
            .await
            .map_err(|_| TokenError::Unavailable("captcha script was dropped".to_string()))?;
        status_to_result(&status)
    }
}

fn status_to_result(status: &ScriptStatus) -> Result<(), TokenError> {
    match status {
        ScriptStatus::Ready => Ok(()),
        ScriptStatus::Pending => Err(TokenError::NotReady),
        ScriptStatus::Failed(reason) => Err(TokenError::Unavailable(reason.clone())),
    }
}
