//! Layered resolution of the effective config.
//!
//! Precedence (later overrides earlier):
//! 1. Empty defaults
//! 2. Config file values
//! 3. Command-line overrides, when non-empty

use std::path::Path;

use crate::{Config, ConfigFile, Result, config_path, load_config_file};

/// Values supplied on the command line (or through their env vars).
///
/// `None` and `Some("")` both mean "not provided".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub server: Option<String>,
    pub api_key: Option<String>,
}

impl Overrides {
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Merge an optional config file with overrides.
pub fn resolve(file: Option<ConfigFile>, overrides: &Overrides) -> Config {
    let mut config = Config::default();

    if let Some(file) = file {
        config.server = file.server;
        config.api_key = file.api_key;
    }

    if let Some(server) = provided(&overrides.server) {
        config.server = server.to_string();
    }
    if let Some(api_key) = provided(&overrides.api_key) {
        config.api_key = api_key.to_string();
    }

    config
}

/// Resolve the effective config from `~/.pare.json` and overrides.
pub fn load_config(overrides: &Overrides) -> Result<Config> {
    let path = config_path()?;
    load_config_from(&path, overrides)
}

/// Resolve the effective config from an explicit file path and overrides.
pub fn load_config_from(path: &Path, overrides: &Overrides) -> Result<Config> {
    let file = load_config_file(path)?;
    Ok(resolve(file, overrides))
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
