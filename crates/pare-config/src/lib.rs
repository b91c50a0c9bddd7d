//! Configuration for the pare CLI.
//!
//! The effective configuration is a `{server, api_key}` pair built from three
//! layers, lowest precedence first:
//! 1. Empty defaults
//! 2. `~/.pare.json` (or the file named by `--config` / `PARE_CONFIG`)
//! 3. Command-line overrides (`--server`, `--apikey` and their env vars)
//!
//! Nothing here writes to disk; the merged result lives for one invocation.

pub mod discovery;
pub mod error;
pub mod resolver;
pub mod types;

pub use discovery::{CONFIG_FILE_NAME, config_path, load_config_file};
pub use error::{ConfigError, Result};
pub use resolver::{Overrides, load_config, load_config_from, resolve};
pub use types::{Config, ConfigFile};
