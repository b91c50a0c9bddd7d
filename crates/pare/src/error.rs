//! CLI-level errors (wraps config and client errors).

use thiserror::Error;

use crate::exitcode;

/// Top-level error type; these are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] pare_config::ConfigError),

    #[error("{0}")]
    Client(#[from] pare_client::Error),

    #[error("unexpected response code: {0}")]
    UnexpectedStatus(u16),

    #[error("error encoding output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("error writing output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => exitcode::CONFIG,
            CliError::Client(e) if e.is_config() => exitcode::CONFIG,
            CliError::Client(e) if e.is_transport() => exitcode::UNAVAILABLE,
            CliError::Client(_) => exitcode::DATAERR,
            CliError::UnexpectedStatus(_) => exitcode::PROTOCOL,
            CliError::Encode(_) => exitcode::DATAERR,
            CliError::Output(_) => exitcode::IOERR,
        }
    }
}
