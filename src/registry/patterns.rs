//! Compiled composite patterns.
//!
//! All patterns are compiled with the `regex` crate, which matches in linear time, so
//! none of them can backtrack catastrophically on crafted input. Lookarounds are not
//! available there: suffix lookaheads are expressed with [`Fragment::SuffixBoundary`]
//! and the true end of a suffix is read from the `tld` capture group.

use regex::Regex;
use std::sync::LazyLock;

use super::{Fragment, class_of};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern: {e}"))
}

/// A domain suffix anchored at the start of the haystack.
///
/// Groups: `tld` (generic or country-code suffix, boundary excluded) or `puny`.
pub static DOMAIN_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "(?i)^(?:(?P<tld>{gtld}|{cctld}){boundary}|(?P<puny>{puny}))",
        gtld = class_of(Fragment::GenericTld),
        cctld = class_of(Fragment::CountryTld),
        boundary = class_of(Fragment::SuffixBoundary),
        puny = class_of(Fragment::Punycode),
    ))
});

/// ASCII-only domains, used to salvage a linkable part of a protocol-less domain.
///
/// Groups: `tld` (suffix end when a generic/country suffix matched).
pub static ASCII_DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "(?i)(?:[a-z0-9\\x{{2D}}{latin}]+\\.)+(?:(?P<tld>{gtld}|{cctld}){boundary}|{puny})",
        latin = class_of(Fragment::LatinAccents),
        gtld = class_of(Fragment::GenericTld),
        cctld = class_of(Fragment::CountryTld),
        boundary = class_of(Fragment::SuffixBoundary),
        puny = class_of(Fragment::Punycode),
    ))
});

/// A bare `name.cc` domain. Such domains are too ambiguous to link without a path.
pub static INVALID_SHORT_DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "(?i)^(?:{dc}(?:-|{dc})*)?{dc}\\.{cctld}$",
        dc = class_of(Fragment::DomainChar),
        cctld = class_of(Fragment::CountryTld),
    ))
});

/// Everything after the domain: optional port, path and query, anchored at the start.
///
/// The path is the longest run of path characters and balanced paren groups that ends
/// on a path-ending character; the query must end on a query-ending character.
pub static URL_TAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "(?i)^(?::(?P<port>[0-9]+))?(?P<path>/(?:(?:{g}|{parens})*{ending})?)?(?P<query>\\?{q}*{qe})?",
        g = class_of(Fragment::UrlPathChar),
        parens = class_of(Fragment::UrlBalancedParens),
        ending = class_of(Fragment::UrlPathEnding),
        q = class_of(Fragment::UrlQueryChar),
        qe = class_of(Fragment::UrlQueryEnding),
    ))
});

/// `http://` or `https://` at the start of the haystack.
pub static PROTOCOL_REGEX: LazyLock<Regex> = LazyLock::new(|| compile("(?i)^https?://"));

/// Short links: nothing after the opaque token is part of the link.
pub static SHORT_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| compile("(?i)^https?://t\\.co/[a-z0-9]+"));

/// A hashtag with its leading boundary character.
///
/// Groups: `hash` (the marker) and `tag` (the body, at least one non-digit).
pub static HASHTAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "(?i){boundary}(?P<hash>{sign})(?P<tag>{an}*{alpha}{an}*)",
        boundary = class_of(Fragment::HashtagBoundary),
        sign = class_of(Fragment::HashSign),
        an = class_of(Fragment::HashtagAlphaNumeric),
        alpha = class_of(Fragment::HashtagAlpha),
    ))
});

/// Text that, directly after a hashtag, means the hashtag was really part of something else.
pub static HASHTAG_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("^(?:{}|://)", class_of(Fragment::HashSign))));
