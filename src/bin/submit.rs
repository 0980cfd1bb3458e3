//! Terminal client for the captcha-protected submission form.
//!
//! Drives the same submit workflow as the browser page: load the captcha
//! script, obtain a token, post `{username, token}` and print the result.
//!
//! # Usage
//!
//! ```bash
//! # Everything on the command line
//! cargo run --bin submit -- --backend-url http://localhost:8080 --username alice --token "03AF..."
//!
//! # Prompt for username and token
//! cargo run --bin submit
//!
//! # Token obtained elsewhere, do not fetch the provider script
//! cargo run --bin submit -- --skip-script-check --token "03AF..."
//! ```
//!
//! # Environment Variables
//!
//! - `CAPTCHA_BACKEND_URL` (required unless `--backend-url`): backend base URL
//! - `CAPTCHA_SITE_KEY`: site key used to load the provider script
//! - `CAPTCHA_TOKEN`: pre-obtained challenge-response token
//!
//! Exits with status 1 when the submission fails.

use captcha_form::application::services::FormController;
use captcha_form::config::ClientConfig;
use captcha_form::domain::entities::{FormState, SubmitOutcome};
use captcha_form::domain::ports::{SubmitBackend, TokenProvider};
use captcha_form::infrastructure::HttpSubmitBackend;
use captcha_form::infrastructure::captcha::{
    CaptchaScript, GatedTokenProvider, StaticTokenProvider,
};
use captcha_form::infrastructure::http_client::build_client;
use captcha_form::telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Input;
use std::io::Write;
use std::time::Duration;

/// Submit a username to the captcha-protected form backend.
#[derive(Parser)]
#[command(name = "submit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8080 (overrides CAPTCHA_BACKEND_URL)
    #[arg(short, long)]
    backend_url: Option<String>,

    /// Captcha site key (overrides CAPTCHA_SITE_KEY)
    #[arg(short, long)]
    site_key: Option<String>,

    /// Challenge-response token (overrides CAPTCHA_TOKEN, prompted if absent)
    #[arg(short, long)]
    token: Option<String>,

    /// Username to submit (prompted if absent)
    #[arg(short, long)]
    username: Option<String>,

    /// Mark the captcha script ready without fetching it
    #[arg(long)]
    skip_script_check: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    telemetry::init(if cli.verbose { "debug" } else { "warn" }, "text");

    let env = ClientConfig::from_env();
    let config = ClientConfig {
        backend_url: cli.backend_url.or(env.backend_url),
        site_key: cli.site_key.or(env.site_key),
        token: cli.token.or(env.token),
    };
    let backend_url = config.require_backend_url()?.to_string();

    println!("{}", "📝 Submit Form".bright_blue().bold());
    println!();

    let script = CaptchaScript::new(config.site_key.clone().unwrap_or_default())
        .context("Invalid captcha script URL")?;
    prepare_script(&script, cli.skip_script_check).await?;

    let username = match cli.username {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };

    let token = match config.token {
        Some(t) => t,
        None => Input::new()
            .with_prompt("Verification token")
            .interact_text()
            .context("Failed to read token")?,
    };

    let backend = HttpSubmitBackend::new(&backend_url).context("Invalid backend URL")?;
    let provider = GatedTokenProvider::new(script.readiness(), StaticTokenProvider::new(token));
    let controller = FormController::new(provider, backend);

    controller.set_username(username);

    let outcome = submit_with_progress(&controller).await;

    render_result(&controller.state(), &outcome);

    match outcome {
        SubmitOutcome::Succeeded(_) => Ok(()),
        SubmitOutcome::Failed(_) => std::process::exit(1),
        SubmitOutcome::Ignored(reason) => anyhow::bail!("Submission not sent: {reason:?}"),
    }
}

/// Loads the captcha script once, or marks it ready when skipped.
///
/// A load failure is reported but not fatal: the gated token provider turns it
/// into the verification error on submit.
async fn prepare_script(script: &CaptchaScript, skip: bool) -> Result<()> {
    if skip {
        script.assume_ready();
        return Ok(());
    }

    let client = build_client(Some(Duration::from_secs(10)))?;

    print!("{} ", "Loading verification...".dimmed());
    std::io::stdout().flush().ok();
    match script.initialize(&client).await {
        Ok(()) => println!("{}", "ready".green()),
        Err(e) => {
            println!("{}", "failed".red());
            println!("{}", format!("⚠️  {e}").yellow());
        }
    }
    println!();

    Ok(())
}

/// Runs the submit workflow, printing the loading state as it is published.
async fn submit_with_progress<T, B>(controller: &FormController<T, B>) -> SubmitOutcome
where
    T: TokenProvider,
    B: SubmitBackend,
{
    let mut rx = controller.subscribe();
    let submit = controller.submit();
    tokio::pin!(submit);

    loop {
        tokio::select! {
            outcome = &mut submit => return outcome,
            Ok(()) = rx.changed() => {
                let state = rx.borrow_and_update();
                if state.is_loading {
                    println!("{}", state.submit_label().yellow());
                }
            }
        }
    }
}

fn render_result(state: &FormState, outcome: &SubmitOutcome) {
    println!();
    match outcome {
        SubmitOutcome::Succeeded(_) => {
            println!("{}", format!("✅ {}", state.response_message).green().bold());
        }
        SubmitOutcome::Failed(_) => {
            println!("{}", format!("❌ {}", state.error).red().bold());
        }
        SubmitOutcome::Ignored(_) => {}
    }
}
