//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Submission form page (`404` without a site key)
//! - `GET  /health`      - Health check (public)
//! - `POST /api/submit`  - Form submission (CORS-enabled, rate limited)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Cross-origin access to `/api` for separately hosted pages
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_allow_origin` - `*` or a single origin allowed to call `/api`
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(
    state: AppState,
    cors_allow_origin: &str,
    behind_proxy: bool,
) -> NormalizePath<Router> {
    let api_router = if behind_proxy {
        api::routes::api_routes().layer(rate_limit::proxy_layer())
    } else {
        api::routes::api_routes().layer(rate_limit::layer())
    };

    let router = base_router(state, api_router.layer(cors::layer(cors_allow_origin)));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Router without rate limiting, for callers that cannot provide peer
/// addresses (e.g. in-process test servers).
pub fn unthrottled_router(state: AppState, cors_allow_origin: &str) -> Router {
    base_router(
        state,
        api::routes::api_routes().layer(cors::layer(cors_allow_origin)),
    )
}

fn base_router(state: AppState, api_router: Router<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}
