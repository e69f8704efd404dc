use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::model::config::AppConfig;

/// Error type for reading the presentation config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: AppConfig = toml::from_str(&text)?;
    Ok(config)
}

/// Load the config if one was given, falling back to defaults on any error.
/// Failures are logged at `warn` and never reach the caller.
pub fn load_config_or_default(path: Option<&Path>) -> AppConfig {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return AppConfig::default();
    };
    match read_config(path) {
        Ok(config) => {
            debug!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "falling back to default styling");
            AppConfig::default()
        }
    }
}
