//! Production router with rate limiting and path normalization.

mod common;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request, StatusCode, header},
};
use captcha_form::routes::app_router;
use common::StubVerifier;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceExt;

fn submit_request(uri: &str, peer: &str, forwarded_for: Option<&str>) -> Request<Body> {
    let addr: SocketAddr = peer.parse().unwrap();

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .extension(ConnectInfo(addr));
    if let Some(ip) = forwarded_for {
        builder = builder.header("x-forwarded-for", ip);
    }

    builder
        .body(Body::from(r#"{"username":"alice","token":"tok"}"#))
        .unwrap()
}

#[tokio::test]
async fn test_peer_is_throttled_after_burst() {
    let state = common::create_test_state(Arc::new(StubVerifier::passing(0.9)));
    let app = app_router(state, "*", false);

    let first = app
        .clone()
        .oneshot(submit_request("/api/submit", "127.0.0.1:12345", None))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let mut statuses = Vec::new();
    for _ in 0..15 {
        let response = app
            .clone()
            .oneshot(submit_request("/api/submit", "127.0.0.1:12345", None))
            .await
            .unwrap();
        statuses.push(response.status());
    }

    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));

    let other_peer = app
        .clone()
        .oneshot(submit_request("/api/submit", "127.0.0.2:12345", None))
        .await
        .unwrap();
    assert_eq!(other_peer.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_proxy_mode_keys_on_forwarded_ip() {
    let state = common::create_test_state(Arc::new(StubVerifier::passing(0.9)));
    let app = app_router(state, "*", true);

    let mut throttled = false;
    for _ in 0..16 {
        let response = app
            .clone()
            .oneshot(submit_request(
                "/api/submit",
                "10.0.0.1:4000",
                Some("203.0.113.7"),
            ))
            .await
            .unwrap();
        throttled |= response.status() == StatusCode::TOO_MANY_REQUESTS;
    }
    assert!(throttled);

    // Same proxy peer, different client.
    let response = app
        .clone()
        .oneshot(submit_request(
            "/api/submit",
            "10.0.0.1:4000",
            Some("203.0.113.8"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let state = common::create_test_state(Arc::new(StubVerifier::passing(0.9)));
    let app = app_router(state, "*", false);

    let response = app
        .oneshot(submit_request("/api/submit/", "127.0.0.1:23456", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json["message"],
        "Hello alice, your form was submitted successfully!"
    );
}
