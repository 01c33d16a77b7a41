use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Kind of recognized entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Url,
    Hashtag,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Url => write!(f, "url"),
            EntityKind::Hashtag => write!(f, "hashtag"),
        }
    }
}

/// A URL found by [`crate::extract::extract_urls`].
///
/// `start..end` is a byte range into the scanned text and `url` is exactly that slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedUrl {
    pub url: String,
    pub start: usize,
    pub end: usize,
}

/// A hashtag found by [`crate::extract::extract_hashtags`].
///
/// `tag` excludes the marker; `start..end` covers marker and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedHashtag {
    pub tag: String,
    pub start: usize,
    pub end: usize,
}

/// A recognized URL or hashtag occurrence, as consumed by the autolinker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// The URL as written, or the hashtag body without its marker
    pub text: String,
    /// Byte offset of the first character (inclusive)
    pub start: usize,
    /// Byte offset after the last character (exclusive)
    pub end: usize,
}

impl Entity {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The href a link created from this entity points to.
    pub fn href(&self) -> String {
        match self.kind {
            EntityKind::Url => self.text.clone(),
            EntityKind::Hashtag => format!("#{}", self.text),
        }
    }

    pub fn overlaps(&self, other: &Entity) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<ExtractedUrl> for Entity {
    fn from(url: ExtractedUrl) -> Self {
        Entity {
            kind: EntityKind::Url,
            text: url.url,
            start: url.start,
            end: url.end,
        }
    }
}

impl From<ExtractedHashtag> for Entity {
    fn from(hashtag: ExtractedHashtag) -> Self {
        Entity {
            kind: EntityKind::Hashtag,
            text: hashtag.tag,
            start: hashtag.start,
            end: hashtag.end,
        }
    }
}

/// Options for URL extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlExtractOptions {
    /// Also link bare domains such as `example.com`
    pub extract_urls_without_protocol: bool,
}

impl Default for UrlExtractOptions {
    fn default() -> Self {
        Self {
            extract_urls_without_protocol: true,
        }
    }
}
