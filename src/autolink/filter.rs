//! Exclusion of candidates that collide with existing link syntax or inline code.

use log::debug;
use regex::Regex;
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use crate::extract::Entity;

/// Literal `[text](target)` syntax. The target allows one level of balanced parens and
/// no quotes, like the inline link handler.
static LINK_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[[^\]]*\]\((?:[^()"']|\([^()"']*\))*\)"#).unwrap());

/// Why a candidate was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Starts right after the `[` of a link span (inside its display text)
    LinkText,
    /// Starts inside a link span
    LinkStart,
    /// Ends inside a link span or exactly at its closing paren
    LinkEnd,
    /// Lies inside a backtick code span
    CodeSpan,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::LinkText => write!(f, "inside link text"),
            Rejection::LinkStart => write!(f, "starts inside a link"),
            Rejection::LinkEnd => write!(f, "ends inside a link"),
            Rejection::CodeSpan => write!(f, "inside a code span"),
        }
    }
}

/// Byte ranges of one block where autolinking is not allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionZones {
    /// `[text](target)` spans, from `[` to just past `)`
    pub link_spans: Vec<Range<usize>>,
    /// Code spans, from the opening backtick to the closing backtick
    pub code_spans: Vec<Range<usize>>,
}

impl ExclusionZones {
    pub fn scan(text: &str) -> Self {
        let link_spans = LINK_SPAN_REGEX.find_iter(text).map(|m| m.range()).collect();

        // An odd delimiter count means the pairing is ambiguous, so nothing is excluded
        let delimiters = backtick_delimiters(text);
        let code_spans = if delimiters.len() % 2 == 0 {
            delimiters.chunks_exact(2).map(|pair| pair[0]..pair[1]).collect()
        } else {
            Vec::new()
        };

        Self { link_spans, code_spans }
    }

    pub fn is_empty(&self) -> bool {
        self.link_spans.is_empty() && self.code_spans.is_empty()
    }

    /// The first rule `entity` breaks, if any.
    pub fn rejects(&self, entity: &Entity) -> Option<Rejection> {
        for span in &self.link_spans {
            if entity.start == span.start + 1 {
                return Some(Rejection::LinkText);
            }
            if span.contains(&entity.start) {
                return Some(Rejection::LinkStart);
            }
            if entity.end > span.start && entity.end <= span.end {
                return Some(Rejection::LinkEnd);
            }
        }

        self.code_spans
            .iter()
            .any(|code| entity.start > code.start && entity.end <= code.end)
            .then_some(Rejection::CodeSpan)
    }
}

/// Offsets of backticks that delimit code spans. A backslash escapes a backtick only
/// outside a code span.
fn backtick_delimiters(text: &str) -> Vec<usize> {
    let mut delimiters = Vec::new();
    let mut in_code = false;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' if !in_code => escaped = true,
            b'`' => {
                delimiters.push(i);
                in_code = !in_code;
            }
            _ => {}
        }
    }
    delimiters
}

/// Drop candidates that fall inside existing link syntax or code spans of `text`.
///
/// Order is preserved.
pub fn filter_candidates(text: &str, candidates: Vec<Entity>) -> Vec<Entity> {
    if candidates.is_empty() {
        return candidates;
    }
    let zones = ExclusionZones::scan(text);
    if zones.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|candidate| match zones.rejects(candidate) {
            Some(reason) => {
                debug!("Dropping {} candidate {:?}: {reason}", candidate.kind, candidate.text);
                false
            }
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::EntityKind;

    fn url(text: &str, start: usize) -> Entity {
        Entity {
            kind: EntityKind::Url,
            text: text.to_string(),
            start,
            end: start + text.len(),
        }
    }

    #[test]
    fn test_scan_link_spans() {
        let zones = ExclusionZones::scan("a [t](http://x.com/(y)) b [u](v)");
        assert_eq!(zones.link_spans, vec![2..23, 26..32]);
        assert!(zones.code_spans.is_empty());
    }

    #[test]
    fn test_url_inside_link_target_is_dropped() {
        let text = "[text](http://x.com)";
        let kept = filter_candidates(text, vec![url("http://x.com", 7)]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_link_rules() {
        let zones = ExclusionZones::scan("xx [ab](cd) yy");
        // span is 3..11
        assert_eq!(zones.rejects(&url("ab", 4)), Some(Rejection::LinkText));
        assert_eq!(zones.rejects(&url("cd", 8)), Some(Rejection::LinkStart));
        assert_eq!(zones.rejects(&url("xx [a", 0)), Some(Rejection::LinkEnd));
        assert_eq!(zones.rejects(&url("xx [ab](cd)", 0)), Some(Rejection::LinkEnd));
        assert_eq!(zones.rejects(&url("yy", 12)), None);
        assert_eq!(zones.rejects(&url("xx", 0)), None);
    }

    #[test]
    fn test_code_span_rule() {
        let text = "see `http://a.com` and http://b.com";
        let kept = filter_candidates(text, vec![url("http://a.com", 5), url("http://b.com", 23)]);
        assert_eq!(kept, vec![url("http://b.com", 23)]);
    }

    #[test]
    fn test_odd_backticks_disable_code_rule() {
        let text = "`a http://a.com";
        let kept = filter_candidates(text, vec![url("http://a.com", 3)]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_escaped_backticks_are_not_delimiters() {
        assert_eq!(backtick_delimiters(r"\`a`b`"), vec![3, 5]);
        assert_eq!(backtick_delimiters(r"`a\`"), vec![0, 3]);
    }

    #[test]
    fn test_candidate_spanning_code_is_kept() {
        let zones = ExclusionZones::scan("x `a` y");
        assert_eq!(zones.code_spans, vec![2..4]);
        assert_eq!(zones.rejects(&url("a", 3)), Some(Rejection::CodeSpan));
        assert_eq!(zones.rejects(&url("x `a` y", 0)), None);
    }

    #[test]
    fn test_empty_candidates_short_circuit() {
        assert!(filter_candidates("[a](b)", Vec::new()).is_empty());
    }
}
