//! Document tree produced by the parser and rewritten by the preprocessor.

use serde::{Deserialize, Serialize};

/// Relation marker on a link node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRel {
    /// Created from a hashtag entity; the href is `#` + tag until preprocessing.
    Hashtag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Document {
        children: Vec<Node>,
    },
    Para {
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
    Link {
        href: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rel: Option<LinkRel>,
        children: Vec<Node>,
    },
    Strong {
        children: Vec<Node>,
    },
    Em {
        children: Vec<Node>,
    },
    Strikethrough {
        children: Vec<Node>,
    },
    InlineCode {
        code: String,
    },
    LineBreak,
    /// Children without a wrapper. Flattened into the parent by [`walk_links`].
    Fragment {
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn link(href: impl Into<String>, rel: Option<LinkRel>, children: Vec<Node>) -> Self {
        Node::Link {
            href: href.into(),
            rel,
            children,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Node::Link { .. })
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children }
            | Node::Para { children }
            | Node::Link { children, .. }
            | Node::Strong { children }
            | Node::Em { children }
            | Node::Strikethrough { children }
            | Node::Fragment { children } => children,
            Node::Text { .. } | Node::InlineCode { .. } | Node::LineBreak => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children }
            | Node::Para { children }
            | Node::Link { children, .. }
            | Node::Strong { children }
            | Node::Em { children }
            | Node::Strikethrough { children }
            | Node::Fragment { children } => Some(children),
            Node::Text { .. } | Node::InlineCode { .. } | Node::LineBreak => None,
        }
    }

    /// Concatenated text content, without markup.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(text),
        Node::InlineCode { code } => out.push_str(code),
        Node::LineBreak => out.push('\n'),
        other => {
            for child in other.children() {
                collect_text(child, out);
            }
        }
    }
}

/// Merge runs of adjacent text nodes and drop empty ones.
pub fn merge_text(nodes: Vec<Node>) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Text { text } if text.is_empty() => {}
            Node::Text { text } => match merged.last_mut() {
                Some(Node::Text { text: previous }) => previous.push_str(&text),
                _ => merged.push(Node::Text { text }),
            },
            other => merged.push(other),
        }
    }
    merged
}

/// Walk `node` depth-first, pre-order, calling `hook` once per link node.
///
/// The hook's result replaces the link and is then walked itself, so links nested in
/// its children are visited too. A [`Node::Fragment`] returned by the hook is spliced
/// into its parent.
pub fn walk_links<F>(node: Node, hook: &mut F) -> Node
where
    F: FnMut(Node) -> Node,
{
    let mut node = if node.is_link() { hook(node) } else { node };

    if let Some(children) = node.children_mut() {
        let taken = std::mem::take(children);
        *children = walk_children(taken, hook);
    }
    node
}

fn walk_children<F>(children: Vec<Node>, hook: &mut F) -> Vec<Node>
where
    F: FnMut(Node) -> Node,
{
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match walk_links(child, hook) {
            Node::Fragment { children } => out.extend(children),
            other => out.push(other),
        }
    }
    merge_text(out)
}
