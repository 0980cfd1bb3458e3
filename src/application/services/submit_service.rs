//! Backend handling of form submissions.

use std::sync::Arc;

use crate::domain::ports::CaptchaVerifier;
use crate::error::AppError;

/// Minimum reCAPTCHA v3 score accepted when none is configured.
pub const DEFAULT_MIN_SCORE: f64 = 0.5;

/// Verifies a submission's token and produces the greeting.
///
/// Username presence is checked by the request DTO before this service is
/// called.
pub struct SubmitService {
    verifier: Arc<dyn CaptchaVerifier>,
    min_score: f64,
}

impl SubmitService {
    /// Creates a new submit service.
    ///
    /// # Arguments
    ///
    /// - `verifier` - captcha provider client
    /// - `min_score` - lowest score treated as human, inclusive
    pub fn new(verifier: Arc<dyn CaptchaVerifier>, min_score: f64) -> Self {
        Self {
            verifier,
            min_score,
        }
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    /// Verifies `token` and returns the success message for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the provider could not be queried.
    /// Returns [`AppError::Forbidden`] if the token was rejected or scored too low.
    pub async fn submit(&self, username: &str, token: &str) -> Result<String, AppError> {
        let verification = self.verifier.verify(token).await.map_err(|e| {
            tracing::error!(error = %e, "Captcha verification failed");
            AppError::internal("Captcha verification failed")
        })?;

        if !verification.is_human(self.min_score) {
            tracing::info!(
                success = verification.success,
                score = verification.score,
                error_codes = ?verification.error_codes,
                "Captcha rejected"
            );
            return Err(AppError::forbidden("Captcha failed"));
        }

        tracing::info!(
            username,
            score = verification.score,
            hostname = ?verification.hostname,
            "Form submitted"
        );

        Ok(greeting(username))
    }
}

fn greeting(username: &str) -> String {
    format!("Hello {username}, your form was submitted successfully!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Verification;
    use crate::domain::ports::{MockCaptchaVerifier, VerifyError};

    fn verdict(success: bool, score: f64) -> Verification {
        Verification {
            success,
            score,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut verifier = MockCaptchaVerifier::new();
        verifier
            .expect_verify()
            .withf(|token| token == "tok-123")
            .times(1)
            .returning(|_| Ok(verdict(true, 0.9)));

        let service = SubmitService::new(Arc::new(verifier), DEFAULT_MIN_SCORE);

        let message = service.submit("alice", "tok-123").await.unwrap();

        assert_eq!(
            message,
            "Hello alice, your form was submitted successfully!"
        );
    }

    #[tokio::test]
    async fn test_submit_low_score_is_forbidden() {
        let mut verifier = MockCaptchaVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .returning(|_| Ok(verdict(true, 0.3)));

        let service = SubmitService::new(Arc::new(verifier), DEFAULT_MIN_SCORE);

        let result = service.submit("alice", "tok").await;

        assert!(matches!(result, Err(AppError::Forbidden(ref m)) if m == "Captcha failed"));
    }

    #[tokio::test]
    async fn test_submit_unsuccessful_verdict_is_forbidden() {
        let mut verifier = MockCaptchaVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .returning(|_| Ok(verdict(false, 1.0)));

        let service = SubmitService::new(Arc::new(verifier), DEFAULT_MIN_SCORE);

        let result = service.submit("alice", "tok").await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_submit_verifier_error_is_internal() {
        let mut verifier = MockCaptchaVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .returning(|_| Err(VerifyError::Request("timeout".to_string())));

        let service = SubmitService::new(Arc::new(verifier), DEFAULT_MIN_SCORE);

        let result = service.submit("alice", "tok").await;

        assert!(
            matches!(result, Err(AppError::Internal(ref m)) if m == "Captcha verification failed")
        );
    }
}
