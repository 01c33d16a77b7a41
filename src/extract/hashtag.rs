//! Hashtag extraction.

use log::debug;

use super::types::ExtractedHashtag;
use crate::registry::is_hash_sign;
use crate::registry::patterns::{HASHTAG_END_REGEX, HASHTAG_REGEX};

/// Extract hashtags from `text`, in ascending offset order.
///
/// A hashtag directly followed by another hash marker or by `://` is dropped.
pub fn extract_hashtags(text: &str) -> Vec<ExtractedHashtag> {
    if !text.contains(is_hash_sign) {
        return Vec::new();
    }

    let mut hashtags = Vec::new();
    for caps in HASHTAG_REGEX.captures_iter(text) {
        let (Some(hash), Some(tag)) = (caps.name("hash"), caps.name("tag")) else {
            continue;
        };

        if HASHTAG_END_REGEX.is_match(&text[tag.end()..]) {
            debug!("Skipping hashtag {:?} followed by {:?}", tag.as_str(), &text[tag.end()..]);
            continue;
        }

        hashtags.push(ExtractedHashtag {
            tag: tag.as_str().to_string(),
            start: hash.start(),
            end: tag.end(),
        });
    }
    hashtags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<String> {
        extract_hashtags(text).into_iter().map(|h| h.tag).collect()
    }

    #[test]
    fn test_simple_hashtag_offsets() {
        let found = extract_hashtags("I love #rust");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tag, "rust");
        assert_eq!((found[0].start, found[0].end), (7, 12));
    }

    #[test]
    fn test_all_digit_body_is_not_a_hashtag() {
        assert!(tags("#123").is_empty());
        assert_eq!(tags("#a1"), vec!["a1"]);
        assert_eq!(tags("#1a"), vec!["1a"]);
    }

    #[test]
    fn test_hashtag_at_start_and_end() {
        assert_eq!(tags("#start middle #end"), vec!["start", "end"]);
    }

    #[test]
    fn test_adjacent_marker_drops_hashtag() {
        assert!(tags("#a#b").is_empty());
        assert!(tags("#tag://x").is_empty());
        assert_eq!(tags("##a"), vec!["a"]);
    }

    #[test]
    fn test_requires_boundary_before_marker() {
        assert!(tags("abc#def").is_empty());
        assert!(tags("&#39;").is_empty());
        assert_eq!(tags("(#paren)"), vec!["paren"]);
    }

    #[test]
    fn test_unicode_hashtags() {
        assert_eq!(tags("#日本語 と #한국어"), vec!["日本語", "한국어"]);
        assert_eq!(tags("#café"), vec!["café"]);

        let text = "x ＃tag";
        let found = extract_hashtags(text);
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].start..found[0].end], "＃tag");
    }

    #[test]
    fn test_underscore_counts_as_letter() {
        assert_eq!(tags("#_"), vec!["_"]);
        assert_eq!(tags("#1_2"), vec!["1_2"]);
    }

    #[test]
    fn test_no_marker_quick_reject() {
        assert!(tags("").is_empty());
        assert!(tags("plain words").is_empty());
    }
}
