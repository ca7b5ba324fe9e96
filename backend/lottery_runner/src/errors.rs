//! Runner error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    /// Contract errors are plain codes, not `std::error::Error` values.
    #[error("Lottery error: {0:?}")]
    Lottery(ticket_lottery::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ticket_lottery::Error> for RunnerError {
    fn from(error: ticket_lottery::Error) -> Self {
        RunnerError::Lottery(error)
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;
