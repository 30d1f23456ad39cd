use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::errors::ConfigError;
use super::types::DisplayresConfig;

/// Default location: `<config_dir>/displayres/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("displayres").join("config.toml"))
}

/// Load configuration from an explicit path or the default location.
///
/// A missing file at the default location yields defaults; a missing file at
/// an explicit path is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<DisplayresConfig, ConfigError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::ConfigNotFound {
                    path: path.display().to_string(),
                });
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!(event = "core.config.load_skipped", reason = "no config file");
                return Ok(DisplayresConfig::default());
            }
        },
    };

    info!(event = "core.config.load_started", path = %path.display());

    let contents = std::fs::read_to_string(&path)?;
    let config = parse_config(&contents)?;

    info!(event = "core.config.load_completed", path = %path.display());
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<DisplayresConfig, ConfigError> {
    toml::from_str(contents).map_err(|e| ConfigError::ConfigParseError {
        message: e.to_string(),
    })
}

/// Load configuration, falling back to defaults with a warning on failure.
pub fn load_config_with_warning(explicit: Option<&Path>) -> DisplayresConfig {
    match load_config(explicit) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            warn!(event = "core.config.load_failed", error = %e);
            DisplayresConfig::default()
        }
    }
}
