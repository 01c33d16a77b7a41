//! Autolinking of one block: candidate collection, context filtering and splicing.

pub mod filter;
pub mod splice;

use itertools::Itertools;
use log::debug;

use crate::extract::{Entity, UrlExtractOptions, extract_hashtags, extract_urls};
use crate::inline::InlineParse;
use crate::tree::Node;

pub use filter::{ExclusionZones, Rejection, filter_candidates};
pub use splice::splice;

/// All linkable entities of `text`, in ascending offset order.
///
/// URLs take precedence: a hashtag overlapping a URL (such as a URL fragment) is
/// dropped. Candidates inside existing link syntax or code spans are filtered out.
pub fn collect_candidates(text: &str, options: &UrlExtractOptions) -> Vec<Entity> {
    let urls: Vec<Entity> = extract_urls(text, options).into_iter().map(Entity::from).collect();

    let hashtags: Vec<Entity> = extract_hashtags(text)
        .into_iter()
        .map(Entity::from)
        .filter(|hashtag| {
            let covered = urls.iter().any(|url| url.overlaps(hashtag));
            if covered {
                debug!("Dropping hashtag {:?} inside a URL", hashtag.text);
            }
            !covered
        })
        .collect();

    let merged = urls
        .into_iter()
        .merge_by(hashtags, |url, hashtag| url.start <= hashtag.start)
        .collect();

    filter_candidates(text, merged)
}

/// Autolink one block of text and tokenize the rest with `parser`.
pub fn autolink<P>(text: &str, options: &UrlExtractOptions, parser: &P) -> Vec<Node>
where
    P: InlineParse + ?Sized,
{
    let candidates = collect_candidates(text, options);
    splice(text, &candidates, parser)
}
