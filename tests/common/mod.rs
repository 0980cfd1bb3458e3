#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use captcha_form::application::services::SubmitService;
use captcha_form::application::services::submit_service::DEFAULT_MIN_SCORE;
use captcha_form::domain::entities::Verification;
use captcha_form::domain::ports::{CaptchaVerifier, VerifyError};
use captcha_form::state::{AppState, FormPage};
use std::sync::{Arc, Mutex};

/// Verifier returning a fixed verdict and recording every token it sees.
pub struct StubVerifier {
    result: Result<Verification, String>,
    seen: Mutex<Vec<String>>,
}

impl StubVerifier {
    pub fn passing(score: f64) -> Self {
        Self::with_result(Ok(Verification {
            success: true,
            score,
            hostname: Some("localhost".to_string()),
            ..Default::default()
        }))
    }

    pub fn rejecting() -> Self {
        Self::with_result(Ok(Verification {
            success: false,
            error_codes: vec!["invalid-input-response".to_string()],
            ..Default::default()
        }))
    }

    pub fn unreachable() -> Self {
        Self::with_result(Err("connection refused".to_string()))
    }

    fn with_result(result: Result<Verification, String>) -> Self {
        Self {
            result,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_tokens(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptchaVerifier for StubVerifier {
    async fn verify(&self, token: &str) -> Result<Verification, VerifyError> {
        self.seen.lock().unwrap().push(token.to_string());
        self.result.clone().map_err(VerifyError::Request)
    }
}

pub fn create_test_state(verifier: Arc<StubVerifier>) -> AppState {
    let submit_service = Arc::new(SubmitService::new(verifier, DEFAULT_MIN_SCORE));
    AppState::new(submit_service)
}

pub fn test_form_page() -> FormPage {
    FormPage {
        site_key: "test-site-key".to_string(),
        script_url: "https://www.google.com/recaptcha/api.js?render=test-site-key".to_string(),
        backend_url: "http://localhost:8080".to_string(),
    }
}

/// Serves `app` on an ephemeral loopback port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Returns a base URL on which nothing is listening.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}
