//! URL and hashtag autolinking for the Tent Markdown dialect.
//!
//! A document is split into blank-line separated blocks. Each block is scanned for
//! URLs and hashtags, candidates inside existing links or code spans are dropped, and
//! the survivors are spliced into the block's inline tree as link nodes. The finished
//! tree can then be preprocessed to resolve footnote references and hashtag hrefs.
//!
//! ```
//! use tentmark_lib::{Config, to_tree};
//!
//! let tree = to_tree("see #rust and example.com", &Config::default());
//! assert_eq!(tree.plain_text(), "see #rust and example.com");
//! ```

pub mod autolink;
pub mod block;
pub mod config;
pub mod exit_codes;
pub mod extract;
pub mod inline;
pub mod preprocess;
pub mod registry;
pub mod tree;

pub use crate::autolink::{autolink, collect_candidates, splice};
pub use crate::block::{Block, split_blocks};
pub use crate::config::{Config, ConfigError};
pub use crate::extract::{
    Entity, EntityKind, ExtractedHashtag, ExtractedUrl, UrlExtractOptions, extract_hashtags, extract_urls,
};
pub use crate::inline::{InlineParse, InlineParser, InlineTable, TENT_INLINE};
pub use crate::preprocess::{PreprocessStep, Preprocessor};
pub use crate::tree::{LinkRel, Node, walk_links};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parse `source` with the Tent inline dialect into a document of paragraphs.
pub fn parse_document(source: &str, config: &Config) -> Node {
    parse_document_with(source, config, &InlineParser::default())
}

/// Parse `source` into a document, tokenizing plain text with `parser`.
///
/// Every block becomes one paragraph. Links and hrefs are left as written; see
/// [`to_tree`] for footnote and hashtag resolution.
pub fn parse_document_with<P>(source: &str, config: &Config, parser: &P) -> Node
where
    P: InlineParse + Sync + ?Sized,
{
    let blocks = split_blocks(source);
    let options = config.url_options();
    log::debug!("Parsing {} block(s)", blocks.len());

    let paragraph = |block: &Block| Node::Para {
        children: autolink(&block.text, &options, parser),
    };

    #[cfg(feature = "parallel")]
    let children = blocks.par_iter().map(paragraph).collect();
    #[cfg(not(feature = "parallel"))]
    let children = blocks.iter().map(paragraph).collect();

    Node::Document { children }
}

/// Parse `source` and resolve footnotes and hashtag hrefs from `config`.
pub fn to_tree(source: &str, config: &Config) -> Node {
    Preprocessor::from_config(config).apply(parse_document(source, config))
}

/// Entities of `source` that autolinking would turn into links, with offsets into
/// `source` rather than into their block.
pub fn document_entities(source: &str, config: &Config) -> Vec<Entity> {
    let options = config.url_options();
    split_blocks(source)
        .iter()
        .flat_map(|block| {
            collect_candidates(&block.text, &options)
                .into_iter()
                .map(move |entity| Entity {
                    start: entity.start + block.offset,
                    end: entity.end + block.offset,
                    ..entity
                })
        })
        .collect()
}
