//! Health report of the submission backend.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub captcha: CaptchaCheck,
    pub form_page: FormPageCheck,
}

/// Verdict threshold the backend applies to every token.
#[derive(Debug, Serialize)]
pub struct CaptchaCheck {
    pub status: &'static str,
    pub min_score: f64,
}

/// Whether `GET /` serves the form, and with which keys.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FormPageCheck {
    Enabled {
        site_key: String,
        backend_url: String,
    },
    Disabled,
}
