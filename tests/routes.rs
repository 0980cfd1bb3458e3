mod common;

use axum::http::{HeaderValue, Method, StatusCode, header};
use axum_test::TestServer;
use captcha_form::routes::unthrottled_router;
use common::StubVerifier;
use serde_json::json;
use std::sync::Arc;

fn server(with_page: bool, origin: &str) -> TestServer {
    let mut state = common::create_test_state(Arc::new(StubVerifier::passing(0.9)));
    if with_page {
        state = state.with_form_page(common::test_form_page());
    }

    TestServer::new(unthrottled_router(state, origin)).unwrap()
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = server(false, "*");

    let response = server
        .method(Method::OPTIONS, "/api/submit")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("content-type"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

    let methods = response.header(header::ACCESS_CONTROL_ALLOW_METHODS);
    let methods = methods.to_str().unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("OPTIONS"));
}

#[tokio::test]
async fn test_cors_headers_on_submit() {
    let server = server(false, "http://localhost:3000");

    let response = server
        .post("/api/submit")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .json(&json!({ "username": "alice", "token": "tok" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_form_page_rendered() {
    let server = server(true, "*");

    let response = server.get("/").await;

    response.assert_status_ok();
    let content_type = response.header(header::CONTENT_TYPE);
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let html = response.text();
    assert!(html.contains("Submit Form"));
    assert!(html.contains(r#"data-site-key="test-site-key""#));
    assert!(html.contains("localhost:8080"));
    assert!(html.contains("recaptcha"));
    assert!(html.contains("render=test-site-key"));
    assert!(html.contains("required"));
}

#[tokio::test]
async fn test_form_page_absent_without_site_key() {
    let server = server(false, "*");

    let response = server.get("/").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_route_mounted() {
    let server = server(false, "*");

    server.get("/health").await.assert_status_ok();
}
