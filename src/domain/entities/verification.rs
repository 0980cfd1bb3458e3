//! Server-side result of checking a challenge-response token.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Verdict returned by the captcha provider's verify API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Verification {
    pub success: bool,
    /// Missing for checkbox-style challenges, which then count as `0.0`.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub challenge_ts: Option<DateTime<Utc>>,
    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,
}

impl Verification {
    /// True when the provider accepted the token with at least `min_score`.
    pub fn is_human(&self, min_score: f64) -> bool {
        self.success && self.score >= min_score
    }
}
