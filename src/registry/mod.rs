//!
//! Character classes and pattern fragments for entity extraction.
//!
//! The registry turns the static code point tables in [`ranges`] and the suffix tables in
//! [`tlds`] into named regex fragments. Fragments are assembled once, on first use, and
//! composite patterns in [`patterns`] are built by substituting fragments into each
//! other at that time. Nothing is interpolated at match time.
//!
//! # Usage
//!
//! - Use [`class_of`] to fetch a fragment when composing a new pattern.
//! - Use the compiled statics in [`patterns`] for matching.
//! - Use the `is_*` predicates when scanning character by character.

pub mod patterns;
pub mod ranges;
pub mod tlds;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use ranges::{
    DOMAIN_PUNCTUATION, INVALID_CHARS, LATIN_ACCENTS, NON_LATIN_HASHTAG_CHARS, UNICODE_SPACES, class_body,
    in_ranges, literal_class_body,
};
use tlds::{COUNTRY_TLDS, GENERIC_TLDS, PUNYCODE_PREFIX};

/// Named pattern fragments.
///
/// Bare class bodies (`InvalidChars`, `Spaces`, `LatinAccents`, `NonLatinHashtagChars`) have
/// no surrounding brackets so they can be merged into larger classes. Every other fragment
/// is a self-contained group or class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    InvalidChars,
    Spaces,
    LatinAccents,
    NonLatinHashtagChars,
    /// Alternation of generic top-level domains.
    GenericTld,
    /// Alternation of country-code top-level domains.
    CountryTld,
    Punycode,
    /// Stand-in for the "not followed by alphanumeric or `@`" lookahead. Consumes one
    /// character (or matches end of input), so suffix ends must be read from a capture.
    SuffixBoundary,
    DomainChar,
    HashtagAlpha,
    HashtagAlphaNumeric,
    HashtagBoundary,
    HashSign,
    UrlPathChar,
    /// Up to two levels of balanced parentheses inside a path.
    UrlBalancedParens,
    UrlPathEnding,
    UrlQueryChar,
    UrlQueryEnding,
}

static FRAGMENTS: LazyLock<HashMap<Fragment, String>> = LazyLock::new(build_fragments);

/// Returns the regex source for a named fragment.
pub fn class_of(fragment: Fragment) -> &'static str {
    FRAGMENTS.get(&fragment).map(String::as_str).unwrap_or_default()
}

fn alternation(words: &[&str]) -> String {
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!("(?:{})", escaped.join("|"))
}

fn build_fragments() -> HashMap<Fragment, String> {
    use Fragment::*;

    let invalid = class_body(INVALID_CHARS);
    let spaces = class_body(UNICODE_SPACES);
    let latin = class_body(LATIN_ACCENTS);
    let non_latin = class_body(NON_LATIN_HASHTAG_CHARS);
    let punct = literal_class_body(DOMAIN_PUNCTUATION);

    let path_char = format!("[a-z0-9{}{latin}]", literal_class_body("!*';:=+,.$/%#[]-_~@|&"));
    let parens = format!(r"\((?:{path_char}+|{path_char}*\({path_char}+\){path_char}*)\)");
    let path_ending = format!("(?:[a-z0-9{}{latin}]|{parens})", literal_class_body("+-=_#/"));

    let mut map = HashMap::new();
    map.insert(GenericTld, alternation(GENERIC_TLDS));
    map.insert(CountryTld, alternation(COUNTRY_TLDS));
    map.insert(Punycode, format!("{}[0-9a-z]+", regex::escape(PUNYCODE_PREFIX)));
    map.insert(SuffixBoundary, "(?:[^0-9a-zA-Z@]|$)".to_string());
    map.insert(DomainChar, format!("[^{punct}{spaces}{invalid}]"));
    map.insert(HashtagAlpha, format!("[a-z_{latin}{non_latin}]"));
    map.insert(HashtagAlphaNumeric, format!("[a-z0-9_{latin}{non_latin}]"));
    map.insert(HashtagBoundary, format!("(?:^|$|[^&a-z0-9_{latin}{non_latin}])"));
    map.insert(HashSign, "[#\u{FF03}]".to_string());
    map.insert(UrlPathChar, path_char);
    map.insert(UrlBalancedParens, parens);
    map.insert(UrlPathEnding, path_ending);
    map.insert(
        UrlQueryChar,
        format!("[a-z0-9{}]", literal_class_body("!?*'@();:&=+$/%#[]-_.,~|")),
    );
    map.insert(UrlQueryEnding, format!("[a-z0-9{}]", literal_class_body("_&=#/")));
    map.insert(InvalidChars, invalid);
    map.insert(Spaces, spaces);
    map.insert(LatinAccents, latin);
    map.insert(NonLatinHashtagChars, non_latin);
    map
}

// =============================================================================
// Character predicates for the explicit scanners
// =============================================================================

pub fn is_invalid_char(c: char) -> bool {
    in_ranges(c, INVALID_CHARS)
}

pub fn is_space(c: char) -> bool {
    in_ranges(c, UNICODE_SPACES)
}

/// A character that may appear in a domain label (besides `-` and `_`).
pub fn is_domain_char(c: char) -> bool {
    !DOMAIN_PUNCTUATION.contains(c) && !is_space(c) && !is_invalid_char(c)
}

/// Characters allowed immediately before a URL.
pub fn is_valid_url_preceding_char(c: char) -> bool {
    !c.is_ascii_alphanumeric() && !matches!(c, '@' | '\u{FF20}' | '$' | '#' | '\u{FF03}') && !is_invalid_char(c)
}

/// Characters that disqualify a protocol-less URL when they directly precede it.
pub fn is_invalid_protocolless_preceding_char(c: char) -> bool {
    matches!(c, '-' | '\u{0640}' | '_' | '.' | '/')
}

/// First characters of every suffix, in both cases.
static SUFFIX_INITIALS: LazyLock<HashSet<char>> = LazyLock::new(|| {
    GENERIC_TLDS
        .iter()
        .chain(COUNTRY_TLDS)
        .chain(std::iter::once(&PUNYCODE_PREFIX))
        .filter_map(|suffix| suffix.chars().next())
        .flat_map(|c| c.to_lowercase().chain(c.to_uppercase()))
        .collect()
});

/// Whether a domain suffix can begin with `c`. A cheap filter before suffix matching.
pub fn can_start_suffix(c: char) -> bool {
    SUFFIX_INITIALS.contains(&c) || c.to_lowercase().any(|lower| SUFFIX_INITIALS.contains(&lower))
}

pub fn is_hash_sign(c: char) -> bool {
    matches!(c, '#' | '\u{FF03}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_every_fragment_is_registered() {
        use Fragment::*;
        for fragment in [
            InvalidChars,
            Spaces,
            LatinAccents,
            NonLatinHashtagChars,
            GenericTld,
            CountryTld,
            Punycode,
            SuffixBoundary,
            DomainChar,
            HashtagAlpha,
            HashtagAlphaNumeric,
            HashtagBoundary,
            HashSign,
            UrlPathChar,
            UrlBalancedParens,
            UrlPathEnding,
            UrlQueryChar,
            UrlQueryEnding,
        ] {
            assert!(!class_of(fragment).is_empty(), "{fragment:?} is empty");
        }
    }

    #[test]
    fn test_grouped_fragments_compile_alone() {
        use Fragment::*;
        for fragment in [GenericTld, CountryTld, DomainChar, HashtagBoundary, UrlBalancedParens, UrlPathEnding] {
            assert!(Regex::new(class_of(fragment)).is_ok(), "{fragment:?} does not compile");
        }
    }

    #[test]
    fn test_balanced_parens_two_levels() {
        let re = Regex::new(&format!("(?i)^{}$", class_of(Fragment::UrlBalancedParens))).unwrap();
        assert!(re.is_match("(film)"));
        assert!(re.is_match("(Album_Version_(Edited))"));
        assert!(!re.is_match("()"));
        assert!(!re.is_match("(a(b(c)))"));
    }

    #[test]
    fn test_domain_char_predicate() {
        assert!(is_domain_char('a'));
        assert!(is_domain_char('é'));
        assert!(is_domain_char('"'));
        assert!(!is_domain_char('.'));
        assert!(!is_domain_char('_'));
        assert!(!is_domain_char(' '));
        assert!(!is_domain_char('\u{3000}'));
        assert!(!is_domain_char('\u{FEFF}'));
    }

    #[test]
    fn test_preceding_char_predicates() {
        assert!(is_valid_url_preceding_char(' '));
        assert!(is_valid_url_preceding_char('('));
        assert!(!is_valid_url_preceding_char('a'));
        assert!(!is_valid_url_preceding_char('@'));
        assert!(!is_valid_url_preceding_char('＃'));
        assert!(!is_valid_url_preceding_char('$'));
        assert!(is_invalid_protocolless_preceding_char('ـ'));
        assert!(!is_invalid_protocolless_preceding_char(' '));
    }

    #[test]
    fn test_suffix_initials() {
        assert!(can_start_suffix('c'));
        assert!(can_start_suffix('C'));
        assert!(can_start_suffix('x'));
        assert!(!can_start_suffix('-'));
        assert!(!can_start_suffix('1'));
        assert!(!can_start_suffix(' '));
    }
}
