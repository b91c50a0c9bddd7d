//! Configuration error types.

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while locating, reading, or parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The current user's home directory could not be determined.
    #[error("could not determine home directory for the current user")]
    HomeDirNotFound,

    /// Failed to read a config file that exists.
    #[error("failed to read config file '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    /// Config file exists but is not valid JSON for the expected shape.
    #[error("error parsing {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
