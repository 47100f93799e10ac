use super::config::LogLevel;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging initialization failed: {0}")]
    InitFailed(String),
}

/// Installs the global tracing subscriber. Call once from the composition
/// root; a second call fails because the global subscriber is already set.
pub fn init(level: LogLevel) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(level.as_str())
        .map_err(|e| LoggingError::InitFailed(format!("invalid filter '{}': {e}", level.as_str())))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .try_init()
        .map_err(|e| LoggingError::InitFailed(e.to_string()))?;

    Ok(())
}
