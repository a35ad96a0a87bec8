//! Configuration I/O - Loading configuration
//!
//! Reads the config file found by the candidate search. The file is JSON5
//! (comments and trailing commas allowed).

use std::path::Path;

use tracing::debug;

use super::types::Config;
use crate::error::{Error, Result};

/// Load configuration from the resolved config path. Returns defaults when
/// no config file exists anywhere.
pub fn load_config() -> Result<Config> {
    let config_path = super::paths::config_path();

    if config_path.exists() {
        load_config_from_path(&config_path)
    } else {
        debug!(path = %config_path.display(), "no config file found, using defaults");
        Ok(Config::default())
    }
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = json5::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid JSON config {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}
