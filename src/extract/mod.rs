//! Entity extraction.
//!
//! Two independent scanners turn text into ordered, same-kind non-overlapping entities
//! with byte offsets. Neither can fail: text without entities yields an empty list.

pub mod hashtag;
pub mod types;
pub mod url;

pub use hashtag::extract_hashtags;
pub use types::{Entity, EntityKind, ExtractedHashtag, ExtractedUrl, UrlExtractOptions};
pub use url::extract_urls;
