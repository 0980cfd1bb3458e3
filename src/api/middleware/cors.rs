//! CORS policy for the submission API.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer for `/api`.
///
/// - **Origins**: `*` or the single configured origin
/// - **Methods**: `POST`, `OPTIONS`
/// - **Headers**: `Content-Type`
///
/// Preflight `OPTIONS` requests are answered by the layer with `200 OK`.
pub fn layer(allow_origin: &str) -> CorsLayer {
    let origin = match allow_origin {
        "*" => AllowOrigin::any(),
        origin => match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!(origin, "Invalid CORS origin, allowing any origin");
                AllowOrigin::any()
            }
        },
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
