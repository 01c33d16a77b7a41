//! Handler for the `extract` command.

use colored::*;
use serde::Serialize;

use tentmark_lib::config::Config;
use tentmark_lib::exit_codes::exit;
use tentmark_lib::{Entity, EntityKind, document_entities};

use crate::cli_types::{ExtractArgs, KindFilter, OutputFormat};
use crate::cli_utils::{apply_cli_overrides, display_name, read_input};

/// One reported entity. Offsets are bytes into the input; line and column are 1-based,
/// the column counted in characters.
#[derive(Debug, Serialize)]
struct EntityRecord<'a> {
    kind: EntityKind,
    text: &'a str,
    matched: &'a str,
    href: String,
    start: usize,
    end: usize,
    line: usize,
    column: usize,
}

pub fn handle_extract(args: &ExtractArgs, mut config: Config) {
    if let Err(e) = apply_cli_overrides(&mut config, args.no_bare_urls, None, &[]) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        exit::tool_error();
    }
    if let Err(e) = run_extract(args, &config) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        exit::tool_error();
    }
}

fn run_extract(args: &ExtractArgs, config: &Config) -> anyhow::Result<()> {
    let source = read_input(&args.path)?;
    let entities: Vec<Entity> = document_entities(&source, config)
        .into_iter()
        .filter(|entity| match args.kind {
            KindFilter::All => true,
            KindFilter::Urls => entity.kind == EntityKind::Url,
            KindFilter::Hashtags => entity.kind == EntityKind::Hashtag,
        })
        .collect();
    let records: Vec<EntityRecord<'_>> = entities.iter().map(|entity| record(&source, entity)).collect();

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => {
            let name = display_name(&args.path);
            for record in &records {
                println!(
                    "{}:{}:{}: {} {}",
                    name.blue().underline(),
                    record.line,
                    record.column,
                    format!("[{}]", record.kind).cyan(),
                    record.matched
                );
            }
        }
    }
    Ok(())
}

fn record<'a>(source: &'a str, entity: &'a Entity) -> EntityRecord<'a> {
    let (line, column) = line_column(source, entity.start);
    EntityRecord {
        kind: entity.kind,
        text: &entity.text,
        matched: &source[entity.range()],
        href: entity.href(),
        start: entity.start,
        end: entity.end,
        line,
        column,
    }
}

fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, before[line_start..].chars().count() + 1)
}
