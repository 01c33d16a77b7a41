//! Link rewriting over a finished document tree.
//!
//! Two built-in steps run on every link node, followed by any caller-supplied steps in
//! registration order:
//!
//! 1. Footnotes: an all-digit href indexes the footnote table. Links whose index has no
//!    (or an empty) entry are unlinked, keeping their children.
//! 2. Hashtags: links created from hashtags get their href from the configured template.

use log::{debug, warn};
use std::fmt;

use crate::config::{Config, DEFAULT_HASHTAG_URI_TEMPLATE, HASHTAG_PLACEHOLDER};
use crate::tree::{LinkRel, Node, walk_links};

/// A caller-supplied rewrite, called once per link node.
pub type PreprocessStep = Box<dyn Fn(Node) -> Node + Send + Sync>;

pub struct Preprocessor {
    footnotes: Vec<String>,
    hashtag_uri_template: String,
    steps: Vec<PreprocessStep>,
}

impl fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preprocessor")
            .field("footnotes", &self.footnotes)
            .field("hashtag_uri_template", &self.hashtag_uri_template)
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_HASHTAG_URI_TEMPLATE)
    }
}

impl Preprocessor {
    pub fn new(footnotes: Vec<String>, hashtag_uri_template: impl Into<String>) -> Self {
        Self {
            footnotes,
            hashtag_uri_template: hashtag_uri_template.into(),
            steps: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.footnotes.clone(), config.hashtag_uri_template.clone())
    }

    pub fn with_step<F>(mut self, step: F) -> Self
    where
        F: Fn(Node) -> Node + Send + Sync + 'static,
    {
        self.add_step(step);
        self
    }

    pub fn add_step<F>(&mut self, step: F)
    where
        F: Fn(Node) -> Node + Send + Sync + 'static,
    {
        self.steps.push(Box::new(step));
    }

    /// Rewrite one node. Non-link nodes pass through the built-in steps unchanged.
    ///
    /// Usable as the hook of an external tree walk.
    pub fn preprocess_node(&self, node: Node) -> Node {
        let node = self.expand_footnote(node);
        let node = self.expand_hashtag(node);
        self.steps.iter().fold(node, |node, step| step(node))
    }

    /// Rewrite every link of `tree`, depth-first in document order.
    pub fn apply(&self, tree: Node) -> Node {
        walk_links(tree, &mut |node| self.preprocess_node(node))
    }

    fn expand_footnote(&self, node: Node) -> Node {
        let (href, rel, children) = match node {
            Node::Link { href, rel, children } => (href, rel, children),
            other => return other,
        };
        if href.is_empty() || !href.bytes().all(|b| b.is_ascii_digit()) {
            return Node::Link { href, rel, children };
        }

        let target = href
            .parse::<usize>()
            .ok()
            .and_then(|index| self.footnotes.get(index))
            .filter(|target| !target.is_empty());

        match target {
            Some(target) => Node::Link {
                href: target.clone(),
                rel,
                children,
            },
            None => {
                debug!("Unlinking footnote reference {href} without an entry");
                Node::Fragment { children }
            }
        }
    }

    fn expand_hashtag(&self, node: Node) -> Node {
        let (href, children) = match node {
            Node::Link {
                href,
                rel: Some(LinkRel::Hashtag),
                children,
            } => (href, children),
            other => return other,
        };

        let encoded = href.strip_prefix('#').unwrap_or(&href);
        let tag = match urlencoding::decode(encoded) {
            Ok(decoded) => decoded.into_owned(),
            Err(e) => {
                warn!("Could not percent-decode hashtag href {href:?}: {e}");
                encoded.to_string()
            }
        };

        Node::Link {
            href: self.hashtag_uri_template.replacen(HASHTAG_PLACEHOLDER, &tag, 1),
            rel: Some(LinkRel::Hashtag),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn para(children: Vec<Node>) -> Node {
        Node::Para { children }
    }

    fn footnotes() -> Preprocessor {
        Preprocessor::new(vec!["http://a".into(), String::new()], DEFAULT_HASHTAG_URI_TEMPLATE)
    }

    #[test]
    fn test_footnote_is_expanded() {
        let node = Node::link("0", None, vec![Node::text("x")]);
        assert_eq!(
            footnotes().preprocess_node(node),
            Node::link("http://a", None, vec![Node::text("x")])
        );
    }

    #[test]
    fn test_missing_footnote_unlinks() {
        let tree = para(vec![
            Node::text("see "),
            Node::link("5", None, vec![Node::text("x")]),
            Node::text("!"),
        ]);
        assert_eq!(footnotes().apply(tree), para(vec![Node::text("see x!")]));
    }

    #[test]
    fn test_empty_footnote_entry_unlinks() {
        let node = Node::link("1", None, vec![Node::text("x")]);
        assert_eq!(
            footnotes().preprocess_node(node),
            Node::Fragment {
                children: vec![Node::text("x")]
            }
        );
    }

    #[test]
    fn test_overflowing_index_unlinks() {
        let node = Node::link("99999999999999999999999", None, vec![]);
        assert!(matches!(footnotes().preprocess_node(node), Node::Fragment { .. }));
    }

    #[test]
    fn test_non_numeric_href_untouched() {
        for href in ["", "0a", "http://x", "-1"] {
            let node = Node::link(href, None, vec![]);
            assert_eq!(footnotes().preprocess_node(node.clone()), node);
        }
    }

    #[test]
    fn test_hashtag_template() {
        let preprocessor = Preprocessor::new(Vec::new(), "https://tags.example/{hashtag}");
        let node = Node::link("#rust", Some(LinkRel::Hashtag), vec![Node::text("#rust")]);
        assert_eq!(
            preprocessor.preprocess_node(node),
            Node::link("https://tags.example/rust", Some(LinkRel::Hashtag), vec![Node::text("#rust")])
        );
    }

    #[test]
    fn test_hashtag_is_percent_decoded() {
        let preprocessor = Preprocessor::default();
        let node = Node::link("#caf%C3%A9", Some(LinkRel::Hashtag), vec![]);
        assert_eq!(
            preprocessor.preprocess_node(node),
            Node::link("?hashtag=café", Some(LinkRel::Hashtag), vec![])
        );
    }

    #[test]
    fn test_undecodable_hashtag_used_verbatim() {
        let preprocessor = Preprocessor::default();
        let node = Node::link("#bad%FF", Some(LinkRel::Hashtag), vec![]);
        assert_eq!(
            preprocessor.preprocess_node(node),
            Node::link("?hashtag=bad%FF", Some(LinkRel::Hashtag), vec![])
        );
    }

    #[test]
    fn test_plain_link_with_hash_is_not_a_hashtag() {
        let node = Node::link("#anchor", None, vec![]);
        assert_eq!(Preprocessor::default().preprocess_node(node.clone()), node);
    }

    #[test]
    fn test_caller_steps_run_after_builtins_in_order() {
        let preprocessor = footnotes()
            .with_step(|node| match node {
                Node::Link { href, rel, children } => Node::Link {
                    href: format!("{href}/first"),
                    rel,
                    children,
                },
                other => other,
            })
            .with_step(|node| match node {
                Node::Link { href, rel, children } => Node::Link {
                    href: format!("{href}/second"),
                    rel,
                    children,
                },
                other => other,
            });
        let node = preprocessor.preprocess_node(Node::link("0", None, vec![]));
        assert_eq!(node, Node::link("http://a/first/second", None, vec![]));
    }

    #[test]
    fn test_nested_links_are_visited() {
        let tree = para(vec![Node::link(
            "9",
            None,
            vec![Node::Strong {
                children: vec![Node::link("0", None, vec![Node::text("in")])],
            }],
        )]);
        assert_eq!(
            footnotes().apply(tree),
            para(vec![Node::Strong {
                children: vec![Node::link("http://a", None, vec![Node::text("in")])]
            }])
        );
    }
}
