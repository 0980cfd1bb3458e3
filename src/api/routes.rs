//! API route configuration.

use crate::api::handlers::submit_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Submission API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /submit` - Verify captcha token and greet the user
///
/// Other methods on `/submit` receive `405 Method Not Allowed`; CORS
/// preflight is answered by the CORS layer applied in [`crate::routes`].
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/submit", post(submit_handler))
}
