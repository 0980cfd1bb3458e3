//! Browser page route configuration.

use crate::state::AppState;
use crate::web::handlers::form_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Username submission form
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(form_handler))
}
