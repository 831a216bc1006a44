// src/main.rs
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod booking;
mod common;
mod services;
mod terminal;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use booking::SubmissionOutcome;
use common::config::print_startup_status;
use common::AppConfig;
use services::{PreviewRelay, TelegramService};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Logs go to stderr so they never interleave with the form itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env()?;
    print_startup_status(&config);

    // ========================================================================
    // FORM SESSION
    // ========================================================================

    let outcome = match &config.telegram {
        Some(telegram) if !config.dry_run => {
            let service = TelegramService::new(telegram.clone())?;
            info!("TelegramService initialized");
            terminal::run_stdio(service).await?
        }
        _ => {
            info!("PreviewRelay initialized");
            terminal::run_stdio(PreviewRelay).await?
        }
    };

    finish_session(outcome)
}

/// Maps the session outcome to the process result. A booking that was
/// never delivered is an error so the exit status is non-zero.
fn finish_session(outcome: Option<SubmissionOutcome>) -> anyhow::Result<()> {
    match outcome {
        Some(SubmissionOutcome::Success) => info!("Booking session finished"),
        Some(SubmissionOutcome::Failure(reason)) => {
            warn!(reason = %reason, "Booking session ended without delivery");
            anyhow::bail!("booking was not delivered: {}", reason);
        }
        None => warn!("Input closed before the booking was sent"),
    }

    Ok(())
}
