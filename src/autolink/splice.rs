//! Splicing of link nodes into a block's inline content.

use log::debug;

use crate::extract::{Entity, EntityKind};
use crate::inline::InlineParse;
use crate::tree::{LinkRel, Node, merge_text};

/// Rewrite `text` into inline nodes with one link per candidate.
///
/// Candidate offsets refer to the original `text`. The text between candidates goes
/// through `parser`. A candidate that starts before the end of the previous one, or whose
/// range is not a valid slice of `text`, is skipped.
pub fn splice<P>(text: &str, candidates: &[Entity], parser: &P) -> Vec<Node>
where
    P: InlineParse + ?Sized,
{
    let mut nodes = Vec::new();
    let mut remainder = text;
    // Bytes of `text` already moved out of `remainder`
    let mut consumed = 0;

    for entity in candidates {
        if entity.start < consumed {
            debug!("Skipping {} {:?} overlapping an earlier link", entity.kind, entity.text);
            continue;
        }
        let Some(literal) = text.get(entity.range()).filter(|literal| !literal.is_empty()) else {
            debug!("Skipping {} {:?} with invalid range {:?}", entity.kind, entity.text, entity.range());
            continue;
        };

        let (before, rest) = remainder.split_at(entity.start - consumed);
        if !before.is_empty() {
            nodes.extend(parser.parse_inline(before));
        }

        let rel = match entity.kind {
            EntityKind::Hashtag => Some(LinkRel::Hashtag),
            EntityKind::Url => None,
        };
        nodes.push(Node::link(entity.href(), rel, vec![Node::text(literal)]));

        remainder = &rest[literal.len()..];
        consumed = entity.end;
    }

    if !remainder.is_empty() {
        nodes.extend(parser.parse_inline(remainder));
    }
    merge_text(nodes)
}
