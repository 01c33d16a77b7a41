//! Splitting a source document into blank-line separated blocks.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// One line ending followed by any number of blank lines (possibly ending the input).
/// Both `\n` and `\r\n` end a line.
static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t]*(?:\r?\n|\z))+").unwrap());

static LEADING_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A(?:[ \t]*\r?\n)+").unwrap());

/// A block of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub text: String,
    /// The separator that followed the block (empty for the last block of the input)
    pub trailing_whitespace: String,
    /// 1-based line of the block's first line in the source
    pub line_number: usize,
    /// Byte offset of the block's first character in the source
    pub offset: usize,
}

fn count_lines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

pub fn split_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut line_number = 1;
    let mut offset = 0;

    if let Some(leading) = LEADING_BLANK_LINES.find(source) {
        line_number += count_lines(leading.as_str());
        offset = leading.end();
    }

    while offset < source.len() {
        let rest = &source[offset..];
        let (text_end, separator_end) = match BLOCK_SEPARATOR.find(rest) {
            Some(separator) => (separator.start(), separator.end()),
            None => (rest.len(), rest.len()),
        };

        let text = &rest[..text_end];
        let trailing = &rest[text_end..separator_end];

        if !text.trim().is_empty() {
            blocks.push(Block {
                text: text.to_string(),
                trailing_whitespace: trailing.to_string(),
                line_number,
                offset,
            });
        }

        line_number += count_lines(text) + count_lines(trailing);
        offset += separator_end;
    }

    blocks
}
