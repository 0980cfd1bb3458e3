//! Outbound captcha calls against loopback stubs.

mod common;

use axum::{Json, Router, http::StatusCode, routing::get, routing::post};
use captcha_form::domain::ports::{CaptchaVerifier, VerifyError};
use captcha_form::infrastructure::captcha::{CaptchaScript, RecaptchaVerifier, ScriptStatus};
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_verifier_posts_form_and_decodes_reply() {
    let app = Router::new().route(
        "/siteverify",
        post(|body: String| async move {
            let ok = body.contains("secret=s3cret") && body.contains("response=tok-123");
            Json(json!({
                "success": ok,
                "score": 0.7,
                "hostname": "localhost",
                "challenge_ts": "2024-05-01T12:00:00Z"
            }))
        }),
    );
    let base_url = common::spawn(app).await;
    let verifier = RecaptchaVerifier::new(
        "s3cret",
        &format!("{base_url}/siteverify"),
        Duration::from_secs(5),
    )
    .unwrap();

    let verification = verifier.verify("tok-123").await.unwrap();

    assert!(verification.success);
    assert_eq!(verification.score, 0.7);
    assert!(verification.is_human(0.5));
    assert_eq!(verification.hostname.as_deref(), Some("localhost"));
}

#[tokio::test]
async fn test_verifier_rejects_undecodable_reply() {
    let app = Router::new().route(
        "/siteverify",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let base_url = common::spawn(app).await;
    let verifier = RecaptchaVerifier::new(
        "s3cret",
        &format!("{base_url}/siteverify"),
        Duration::from_secs(5),
    )
    .unwrap();

    let result = verifier.verify("tok").await;

    assert!(matches!(result, Err(VerifyError::Decode(_))));
}

#[tokio::test]
async fn test_verifier_unreachable() {
    let base_url = common::closed_base_url().await;
    let verifier = RecaptchaVerifier::new(
        "s3cret",
        &format!("{base_url}/siteverify"),
        Duration::from_secs(5),
    )
    .unwrap();

    let result = verifier.verify("tok").await;

    assert!(matches!(result, Err(VerifyError::Request(_))));
}

#[test]
fn test_verifier_rejects_invalid_url() {
    assert!(RecaptchaVerifier::new("s3cret", "not a url", Duration::from_secs(5)).is_err());
}

#[tokio::test]
async fn test_script_initialize_signals_ready() {
    let app = Router::new().route(
        "/api.js",
        get(|| async { "/* captcha script */" }),
    );
    let base_url = common::spawn(app).await;

    let script = CaptchaScript::with_base(&format!("{base_url}/api.js"), "site-key").unwrap();
    let mut readiness = script.readiness();
    let client = reqwest::Client::new();

    script.initialize(&client).await.unwrap();

    assert_eq!(script.status(), ScriptStatus::Ready);
    assert_eq!(readiness.wait().await, Ok(()));

    // A second initialization is a no-op.
    script.initialize(&client).await.unwrap();
}

#[tokio::test]
async fn test_script_initialize_fails_on_error_status() {
    let app = Router::new().route("/api.js", get(|| async { StatusCode::NOT_FOUND }));
    let base_url = common::spawn(app).await;

    let script = CaptchaScript::with_base(&format!("{base_url}/api.js"), "site-key").unwrap();
    let readiness = script.readiness();

    let result = script.initialize(&reqwest::Client::new()).await;

    assert!(result.is_err());
    assert!(matches!(script.status(), ScriptStatus::Failed(_)));
    assert!(!readiness.is_ready());
}
