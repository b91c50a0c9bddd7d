//! CLI command handlers.

pub mod delete;
pub mod meta;
pub mod shorten;

use pare_config::Config;

use crate::exitcode;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration for this invocation.
    pub config: Config,
}

/// How a command finished when it did not fail.
///
/// Conflicts and missing codes are expected answers from the server, not
/// errors, so they get their own exit codes instead of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Conflict,
    NoExist,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Done => exitcode::OK,
            Outcome::Conflict => exitcode::CONFLICT,
            Outcome::NoExist => exitcode::NOEXIST,
        }
    }
}

/// Validate an absolute URL argument, keeping the text exactly as given.
pub fn parse_url(value: &str) -> Result<String, String> {
    url::Url::parse(value)
        .map(|_| value.to_string())
        .map_err(|e| format!("invalid URL '{}': {}", value, e))
}

/// Like [`parse_url`], but an empty value means "not provided".
pub fn parse_server(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Ok(String::new());
    }
    parse_url(value)
}
