use serde::{Deserialize, Serialize};
use std::io;

use crate::extract::UrlExtractOptions;

/// Placeholder substituted with the decoded tag in [`Config::hashtag_uri_template`].
pub const HASHTAG_PLACEHOLDER: &str = "{hashtag}";

/// Default target for hashtag links.
pub const DEFAULT_HASHTAG_URI_TEMPLATE: &str = "?hashtag={hashtag}";

/// Name of the configuration file discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = ".tentmark.toml";

/// Autolinking and preprocessing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Also link bare domains such as `example.com`
    pub extract_urls_without_protocol: bool,

    /// Target of hashtag links. Must contain exactly one `{hashtag}`.
    pub hashtag_uri_template: String,

    /// Footnote hrefs, referenced as `[text](0)`, `[text](1)`, ...
    pub footnotes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extract_urls_without_protocol: true,
            hashtag_uri_template: DEFAULT_HASHTAG_URI_TEMPLATE.to_string(),
            footnotes: Vec::new(),
        }
    }
}

impl Config {
    pub fn url_options(&self) -> UrlExtractOptions {
        UrlExtractOptions {
            extract_urls_without_protocol: self.extract_urls_without_protocol,
        }
    }
}

/// A non-fatal problem found while loading a configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationWarning {
    pub message: String,
    pub key: Option<String>,
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Failed to render the configuration as TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(String),

    /// The hashtag template does not have exactly one placeholder
    #[error("hashtag-uri-template must contain exactly one {{hashtag}} placeholder, found {found} in {template:?}")]
    InvalidTemplate { template: String, found: usize },
}
