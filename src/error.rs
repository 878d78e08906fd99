// Error types for startup and ambient failures

use log::SetLoggerError;
use thiserror::Error;

/// Game Errors
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
    #[error("Failed to install logger: {0}")]
    Logger(#[from] SetLoggerError),
}
