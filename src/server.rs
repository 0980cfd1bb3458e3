//! HTTP server initialization and runtime setup.
//!
//! Builds the verifier, the submit service and the optional form page, then
//! runs the Axum server until Ctrl-C.

use crate::application::services::SubmitService;
use crate::config::Config;
use crate::infrastructure::captcha::{CaptchaScript, RecaptchaVerifier};
use crate::routes::app_router;
use crate::state::{AppState, FormPage};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - reCAPTCHA verify client
/// - Submit service
/// - Form page settings (if a site key is configured)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The verify URL or HTTP client is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let verifier = RecaptchaVerifier::new(
        config.captcha_secret.clone(),
        &config.captcha_verify_url,
        config.verify_timeout(),
    )
    .context("Failed to create captcha verifier")?;
    tracing::info!(url = %verifier.verify_url(), "Captcha verifier ready");

    let submit_service = Arc::new(SubmitService::new(
        Arc::new(verifier),
        config.captcha_min_score,
    ));

    let mut state = AppState::new(submit_service);

    if let Some(page) = form_page(&config)? {
        tracing::info!("Form page enabled at /");
        state = state.with_form_page(page);
    }

    let app = app_router(state, &config.cors_allow_origin, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the form page settings from the configured site key.
fn form_page(config: &Config) -> Result<Option<FormPage>> {
    let Some(ref site_key) = config.captcha_site_key else {
        return Ok(None);
    };

    let script = CaptchaScript::new(site_key.as_str()).context("Invalid captcha script URL")?;

    Ok(Some(FormPage {
        site_key: script.site_key().to_string(),
        script_url: script.script_url().to_string(),
        backend_url: config.public_backend_url.clone(),
    }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
