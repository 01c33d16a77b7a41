//! Handler for the `config` command.

use colored::*;

use tentmark_lib::config::Config;
use tentmark_lib::exit_codes::exit;

/// Print `config` as TOML.
pub fn handle_config(config: Config) {
    match config.to_toml_string() {
        Ok(toml) => print!("{toml}"),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
