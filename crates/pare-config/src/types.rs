//! Configuration types: the on-disk file and the effective result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Contents of `~/.pare.json`.
///
/// ```json
/// { "APIKey": "k1", "Server": "https://s.example" }
/// ```
///
/// Missing keys are treated as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// API key sent as `X-API-Key` on every request.
    #[serde(rename = "APIKey", alias = "apikey", alias = "ApiKey")]
    pub api_key: String,

    /// Base URL of the Condenser server, without an endpoint path.
    #[serde(rename = "Server", alias = "server")]
    pub server: String,
}

impl ConfigFile {
    /// Parse a config file body.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// The effective configuration after all layers have been merged.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// API key for the `X-API-Key` header. May be empty.
    pub api_key: String,
    /// Server base URL. Empty when nothing configured one.
    pub server: String,
}

impl Config {
    pub fn new(server: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            server: server.into(),
        }
    }
}

// The key never appears in debug traces.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("Config")
            .field("server", &self.server)
            .field("api_key", &api_key)
            .finish()
    }
}
