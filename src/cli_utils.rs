//! Shared CLI utility functions used across command handlers.

use anyhow::Context;
use colored::*;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tentmark_lib::config::{Config, ConfigError, validate_hashtag_template};
use tentmark_lib::exit_codes::exit;

/// Path shown in diagnostics for input read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// Resolve the configuration: defaults with `no_config`, the named file with
/// `config_path`, otherwise the discovered file in the working directory.
pub fn load_config(config_path: Option<&str>, no_config: bool) -> Result<Config, ConfigError> {
    if no_config {
        return Ok(Config::default());
    }
    if let Some(path) = config_path {
        return Config::load(Path::new(path));
    }
    let cwd = std::env::current_dir().map_err(|source| ConfigError::IoError {
        source,
        path: ".".to_string(),
    })?;
    Ok(Config::discover(&cwd)?.unwrap_or_default())
}

/// Load configuration with standard CLI error handling.
pub fn load_config_with_cli_error_handling(config_path: Option<&str>, no_config: bool) -> Config {
    match load_config(config_path, no_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Config error".red().bold(), e);
            exit::tool_error();
        }
    }
}

/// Apply flags shared by the commands that autolink.
pub fn apply_cli_overrides(
    config: &mut Config,
    no_bare_urls: bool,
    hashtag_template: Option<&str>,
    footnotes: &[String],
) -> Result<(), ConfigError> {
    if no_bare_urls {
        config.extract_urls_without_protocol = false;
    }
    if let Some(template) = hashtag_template {
        validate_hashtag_template(template)?;
        config.hashtag_uri_template = template.to_string();
    }
    if !footnotes.is_empty() {
        config.footnotes = footnotes.to_vec();
    }
    Ok(())
}

/// Read the command input: stdin for `-`, otherwise the file at `path`.
pub fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        return Ok(content);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file {path}"))
}

pub fn display_name(path: &str) -> &str {
    if path == "-" { STDIN_NAME } else { path }
}
