//! URL extraction.
//!
//! A single left-to-right scan over
//! `(preceding char)(protocol?)(domain)(port?)(path?)(query?)`. The domain is matched by
//! an explicit label scanner so that suffix boundaries can be honoured without
//! backtracking; everything after the domain is one linear-time regex.

use log::debug;
use std::ops::Range;

use super::types::{ExtractedUrl, UrlExtractOptions};
use crate::registry::patterns::{
    ASCII_DOMAIN_REGEX, DOMAIN_SUFFIX_REGEX, INVALID_SHORT_DOMAIN_REGEX, PROTOCOL_REGEX, SHORT_LINK_REGEX,
    URL_TAIL_REGEX,
};
use crate::registry::{
    can_start_suffix, is_domain_char, is_invalid_protocolless_preceding_char, is_valid_url_preceding_char,
};

/// DNS limit on the length of one label, in characters.
const MAX_LABEL_CHARS: usize = 63;

/// DNS limit on the number of labels in a name.
const MAX_DOMAIN_LABELS: usize = 127;

/// One match of the URL grammar before protocol-specific post-processing.
#[derive(Debug)]
struct RawUrlMatch {
    /// Character consumed by the preceding-char guard (`None` at start of text)
    before: Option<char>,
    /// Start of the protocol, or of the domain when there is none
    start: usize,
    has_protocol: bool,
    domain: Range<usize>,
    /// End of port, path and query (equals `domain.end` when all are absent)
    end: usize,
    /// A path or query follows the domain (a port alone does not count)
    has_path_or_query: bool,
}

/// A `label.` unit of a domain.
#[derive(Debug, Clone, Copy)]
struct Label {
    /// Offset just past the dot
    end: usize,
    has_underscore: bool,
}

/// Extract URLs from `text`, in ascending offset order.
///
/// Never fails: text that contains nothing linkable yields an empty list.
pub fn extract_urls(text: &str, options: &UrlExtractOptions) -> Vec<ExtractedUrl> {
    let required = if options.extract_urls_without_protocol { '.' } else { ':' };
    if !text.contains(required) {
        return Vec::new();
    }

    let mut urls = Vec::new();
    let mut cursor = 0;

    while let Some(raw) = next_raw_match(text, cursor) {
        // Resume after the whole raw match, even if part of it gets dropped below
        cursor = raw.end;

        if raw.has_protocol {
            push_protocol_url(text, &raw, &mut urls);
        } else if options.extract_urls_without_protocol {
            push_protocolless_urls(text, &raw, &mut urls);
        } else {
            debug!("Skipping protocol-less URL candidate {:?}", &text[raw.start..raw.end]);
        }
    }

    urls
}

fn next_raw_match(text: &str, from: usize) -> Option<RawUrlMatch> {
    for (offset, c) in text[from..].char_indices() {
        let pos = from + offset;

        if is_valid_url_preceding_char(c)
            && let Some(raw) = match_url_body(text, pos + c.len_utf8(), Some(c))
        {
            return Some(raw);
        }

        if pos == 0
            && let Some(raw) = match_url_body(text, 0, None)
        {
            return Some(raw);
        }
    }
    None
}

fn match_url_body(text: &str, start: usize, before: Option<char>) -> Option<RawUrlMatch> {
    let (has_protocol, domain_start) = match PROTOCOL_REGEX.find(&text[start..]) {
        Some(m) => (true, start + m.end()),
        None => (false, start),
    };

    let domain_end = match_domain(text, domain_start)?;

    let (tail_len, has_path_or_query) = match URL_TAIL_REGEX.captures(&text[domain_end..]) {
        Some(caps) => (
            caps.get(0).map_or(0, |m| m.end()),
            caps.name("path").is_some() || caps.name("query").is_some(),
        ),
        None => (0, false),
    };

    Some(RawUrlMatch {
        before,
        start,
        has_protocol,
        domain: domain_start..domain_end,
        end: domain_end + tail_len,
        has_path_or_query,
    })
}

/// Match `subdomain* name suffix` starting exactly at `start` and return the domain end.
///
/// The longest label sequence that ends in a recognized suffix wins.
fn match_domain(text: &str, start: usize) -> Option<usize> {
    let mut labels: Vec<Label> = Vec::new();
    let mut pos = start;
    while labels.len() < MAX_DOMAIN_LABELS {
        let Some(label) = scan_label(text, pos) else {
            break;
        };
        pos = label.end;
        labels.push(label);
    }

    // The name label directly before the suffix cannot contain `_`
    labels
        .iter()
        .rev()
        .filter(|label| !label.has_underscore)
        .find_map(|label| match_suffix(text, label.end))
}

/// Scan one `label.` unit: domain chars plus `-` and `_`, starting and ending on a
/// domain char.
fn scan_label(text: &str, start: usize) -> Option<Label> {
    let mut last: Option<char> = None;
    let mut count = 0;
    let mut has_underscore = false;

    for (offset, c) in text[start..].char_indices() {
        if c == '.' {
            return match last {
                Some(last) if is_domain_char(last) => Some(Label {
                    end: start + offset + 1,
                    has_underscore,
                }),
                _ => None,
            };
        }

        let domain_char = is_domain_char(c);
        if !domain_char && (count == 0 || !matches!(c, '-' | '_')) {
            return None;
        }

        count += 1;
        if count > MAX_LABEL_CHARS {
            return None;
        }
        has_underscore |= c == '_';
        last = Some(c);
    }
    None
}

fn match_suffix(text: &str, at: usize) -> Option<usize> {
    let rest = &text[at..];
    if !rest.chars().next().is_some_and(can_start_suffix) || !DOMAIN_SUFFIX_REGEX.is_match(rest) {
        return None;
    }
    let caps = DOMAIN_SUFFIX_REGEX.captures(rest)?;
    let suffix = caps.name("tld").or_else(|| caps.name("puny"))?;
    Some(at + suffix.end())
}

fn push_protocol_url(text: &str, raw: &RawUrlMatch, urls: &mut Vec<ExtractedUrl>) {
    let written = &text[raw.start..raw.end];
    let end = match SHORT_LINK_REGEX.find(written) {
        Some(m) if m.end() < written.len() => {
            debug!("Truncating short link {written:?} after its token");
            raw.start + m.end()
        }
        _ => raw.end,
    };

    urls.push(ExtractedUrl {
        url: text[raw.start..end].to_string(),
        start: raw.start,
        end,
    });
}

/// Keep only the ASCII part of a protocol-less domain.
///
/// Every ASCII sub-domain is reported, except bare `name.cc` domains. When a path or
/// query follows, the last ASCII sub-domain is extended over the whole tail (port
/// included) and kept even if it is a bare `name.cc`. A port alone is not linked.
fn push_protocolless_urls(text: &str, raw: &RawUrlMatch, urls: &mut Vec<ExtractedUrl>) {
    if let Some(before) = raw.before
        && is_invalid_protocolless_preceding_char(before)
    {
        debug!(
            "Skipping protocol-less URL {:?} preceded by {before:?}",
            &text[raw.start..raw.end]
        );
        return;
    }

    let domain = &text[raw.domain.clone()];
    let check_short_domain = raw.before != Some('^');

    // (start, end, index in `urls` if it was kept)
    let mut last_ascii: Option<(usize, usize, Option<usize>)> = None;
    let mut search = 0;

    while let Some(caps) = ASCII_DOMAIN_REGEX.captures_at(domain, search) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        let ascii_end = caps.name("tld").map_or(whole.end(), |tld| tld.end());
        let ascii = &domain[whole.start()..ascii_end];
        let start = raw.domain.start + whole.start();
        let end = raw.domain.start + ascii_end;

        let index = if check_short_domain && INVALID_SHORT_DOMAIN_REGEX.is_match(ascii) {
            debug!("Skipping short domain {ascii:?} without path");
            None
        } else {
            urls.push(ExtractedUrl {
                url: ascii.to_string(),
                start,
                end,
            });
            Some(urls.len() - 1)
        };

        last_ascii = Some((start, end, index));
        search = ascii_end;
    }

    let Some((start, _, index)) = last_ascii else {
        debug!("No ASCII domain in protocol-less candidate {domain:?}");
        return;
    };

    if raw.has_path_or_query {
        let extended = ExtractedUrl {
            url: text[start..raw.end].to_string(),
            start,
            end: raw.end,
        };
        match index {
            Some(i) => urls[i] = extended,
            None => urls.push(extended),
        }
    }
}
