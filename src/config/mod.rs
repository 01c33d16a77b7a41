//! Configuration: TOML loading, discovery and validation.

mod types;
mod validation;

#[cfg(test)]
mod tests;

use log::{debug, warn};
use std::fs;
use std::path::Path;

pub use types::*;
pub use validation::{KNOWN_KEYS, suggest_similar_key, validate_hashtag_template, validate_keys};

impl Config {
    /// Parse and validate configuration text. Unknown keys are logged and ignored.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let (config, warnings) = Self::parse_with_warnings(content)?;
        for warning in &warnings {
            warn!("{}", warning.message);
        }
        Ok(config)
    }

    /// Like [`Config::from_toml_str`], returning warnings instead of logging them.
    pub fn parse_with_warnings(content: &str) -> Result<(Self, Vec<ConfigValidationWarning>), ConfigError> {
        let table: toml::Table = toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        let warnings = validate_keys(&table);

        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok((config, warnings))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load [`CONFIG_FILE_NAME`] from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!("No {CONFIG_FILE_NAME} in {}", dir.display());
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_hashtag_template(&self.hashtag_uri_template)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}
