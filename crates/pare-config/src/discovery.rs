//! Config file location and loading.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{ConfigError, ConfigFile, Result};

/// Config filename, placed directly in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".pare.json";

/// Get the default config file path, `<home>/.pare.json`.
pub fn config_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::HomeDirNotFound)
}

/// Load a config file from a specific path.
///
/// Returns `Ok(None)` if the file does not exist. A file that exists but
/// cannot be read or parsed is an error.
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(None);
        }
        Err(e) => {
            return Err(ConfigError::ReadFile {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let file = ConfigFile::from_json(&contents).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(Some(file))
}
