//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CaptchaCheck, FormPageCheck, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// Reports configuration only; the verify API is not called.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "captcha": { "status": "ok", "min_score": 0.5 },
///     "form_page": { "status": "enabled", "site_key": "6Lc...", "backend_url": "" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let captcha = CaptchaCheck {
        status: "ok",
        min_score: state.submit_service.min_score(),
    };

    let form_page = match state.form_page {
        Some(ref page) => FormPageCheck::Enabled {
            site_key: page.site_key.clone(),
            backend_url: page.backend_url.clone(),
        },
        None => FormPageCheck::Disabled,
    };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { captcha, form_page },
    })
}
