use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{error::MemgridError, theme::Theme};

/// Application configuration loaded from a TOML file.
///
/// Currently a single `[theme]` section overriding any subset of the
/// default schematic geometry and palette.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Theme configuration section
    #[serde(default)]
    pub theme: Theme,
}

/// Errors specific to loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    MissingFile(PathBuf),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MemgridError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(MemgridError::Config(ConfigError::MissingFile(
                path.to_path_buf(),
            )));
        }

        let content = fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(ConfigError::from)
            .map_err(MemgridError::Config)?;

        Ok(config)
    }
}
