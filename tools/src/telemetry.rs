//! Log output for the tools

use std::io::{self, IsTerminal};
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{fmt, EnvFilter};

/// Errors encountered while setting up logging
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive couldn't be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed
    #[error("Could not install the log subscriber")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Install a global subscriber printing compact log lines to stderr
///
/// `filter` uses the `tracing_subscriber` directive syntax, e.g. `"debug"` or `"mania=trace"`.
pub fn initialise(filter: &str) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_new(filter).map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .without_time()
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
