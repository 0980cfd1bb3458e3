//! Submission form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::state::AppState;

/// Template for the submission form.
///
/// Renders `templates/form.html` with:
/// - Username input and submit button (disabled until the captcha script loads)
/// - The captcha provider script tag for `site_key`
/// - Success and error message areas
#[derive(Template, WebTemplate)]
#[template(path = "form.html")]
struct FormTemplate<'a> {
    site_key: &'a str,
    script_url: &'a str,
    backend_url: &'a str,
}

/// Renders the submission form.
///
/// # Endpoint
///
/// `GET /`
///
/// Responds `404 Not Found` when no site key is configured.
pub async fn form_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.form_page {
        Some(ref page) => FormTemplate {
            site_key: &page.site_key,
            script_url: &page.script_url,
            backend_url: &page.backend_url,
        }
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
