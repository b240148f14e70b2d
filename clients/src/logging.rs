//! Tracing subscriber setup for the command-line client.
//!
//! Logs go to stderr so they never mix with names or JSON written to stdout.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a filter directive (e.g. `token_namer_engine=debug`).
pub const LOG_ENV: &str = "TOKEN_NAMER_LOG";

/// Picks the filter directive: `--verbose` wins, then `TOKEN_NAMER_LOG`,
/// then the configured level.
#[must_use]
pub fn filter_directive(configured: &str, from_env: Option<String>, verbose: bool) -> String {
    if verbose {
        return "debug".to_owned();
    }
    from_env
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| configured.to_owned())
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the directive is malformed or a subscriber is
/// already installed.
pub fn init(configured: &str, verbose: bool) -> Result<()> {
    let directive = filter_directive(configured, std::env::var(LOG_ENV).ok(), verbose);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{directive}'"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()
        .context("Failed to install tracing subscriber")
}
