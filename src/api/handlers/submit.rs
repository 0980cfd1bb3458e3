//! Handler for the form submission endpoint.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::submit::{SubmitRequest, SubmitResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Verifies the captcha token and greets the user.
///
/// # Endpoint
///
/// `POST /api/submit`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "token": "03AFcWeA..." }
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Hello alice, your form was submitted successfully!" }
/// ```
///
/// # Errors
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
///
/// All errors carry `{"error": "..."}`:
///
/// - **400**: `Invalid JSON format`, `Username is required`
/// - **403**: `Captcha failed` (rejected token or score below threshold)
/// - **500**: `Captcha verification failed` (provider unreachable)
pub async fn submit_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    let payload: SubmitRequest = serde_json::from_slice(&body)?;
    payload.validate()?;

    let message = state
        .submit_service
        .submit(&payload.username, &payload.token)
        .await?;

    Ok(Json(SubmitResponse { message }))
}
