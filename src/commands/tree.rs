//! Handler for the `tree` command.

use colored::*;

use tentmark_lib::config::Config;
use tentmark_lib::exit_codes::exit;
use tentmark_lib::{parse_document, to_tree};

use crate::cli_types::TreeArgs;
use crate::cli_utils::{apply_cli_overrides, read_input};

pub fn handle_tree(args: &TreeArgs, mut config: Config) {
    if let Err(e) = apply_cli_overrides(
        &mut config,
        args.no_bare_urls,
        args.hashtag_template.as_deref(),
        &args.footnotes,
    ) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        exit::tool_error();
    }
    if let Err(e) = run_tree(args, &config) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        exit::tool_error();
    }
}

fn run_tree(args: &TreeArgs, config: &Config) -> anyhow::Result<()> {
    let source = read_input(&args.path)?;
    let tree = if args.raw {
        parse_document(&source, config)
    } else {
        to_tree(&source, config)
    };

    let json = if args.compact {
        serde_json::to_string(&tree)?
    } else {
        serde_json::to_string_pretty(&tree)?
    };
    println!("{json}");
    Ok(())
}
