//! Inline tokenizer driven by a character-keyed handler table.
//!
//! Text is consumed one element at a time: either a run of plain text up to the next
//! trigger character, or whatever the trigger's handler produces. A handler that
//! declines (returns `None`) leaves its trigger as a literal character.

pub mod tent;

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::tree::{Node, merge_text};

pub use tent::TENT_INLINE;

/// Deepest nesting of delimited constructs. Delimiters past this depth are literal.
pub const MAX_INLINE_DEPTH: usize = 64;

/// Result of one handler: bytes consumed from the trigger onwards, and the nodes produced.
pub type InlineMatch = (usize, Vec<Node>);

/// Result of [`InlineState::until_char`]: bytes consumed including the closing
/// character, and the nodes before it.
pub type Delimited = (usize, Rc<Vec<Node>>);

/// Handles the construct whose trigger character sits at byte offset `at`.
pub type InlineHandler = fn(&mut InlineState<'_>, usize) -> Option<InlineMatch>;

/// Trigger character to handler map.
#[derive(Clone, Default)]
pub struct InlineTable {
    handlers: HashMap<char, InlineHandler>,
}

impl fmt::Debug for InlineTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut triggers: Vec<char> = self.triggers().collect();
        triggers.sort_unstable();
        f.debug_struct("InlineTable").field("triggers", &triggers).finish()
    }
}

impl InlineTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler(mut self, trigger: char, handler: InlineHandler) -> Self {
        self.insert(trigger, handler);
        self
    }

    /// Register `handler` for `trigger`, returning the handler it replaces.
    pub fn insert(&mut self, trigger: char, handler: InlineHandler) -> Option<InlineHandler> {
        self.handlers.insert(trigger, handler)
    }

    pub fn handler(&self, trigger: char) -> Option<InlineHandler> {
        self.handlers.get(&trigger).copied()
    }

    pub fn is_trigger(&self, c: char) -> bool {
        self.handlers.contains_key(&c)
    }

    pub fn triggers(&self) -> impl Iterator<Item = char> + '_ {
        self.handlers.keys().copied()
    }
}

/// Inline tokenizer invoked on plain-text segments.
pub trait InlineParse {
    fn parse_inline(&self, text: &str) -> Vec<Node>;
}

impl<F> InlineParse for F
where
    F: Fn(&str) -> Vec<Node>,
{
    fn parse_inline(&self, text: &str) -> Vec<Node> {
        self(text)
    }
}

/// [`InlineParse`] implementation over an [`InlineTable`].
#[derive(Debug, Clone, Copy)]
pub struct InlineParser<'t> {
    table: &'t InlineTable,
}

impl<'t> InlineParser<'t> {
    pub fn new(table: &'t InlineTable) -> Self {
        Self { table }
    }
}

impl Default for InlineParser<'static> {
    fn default() -> Self {
        Self::new(&TENT_INLINE)
    }
}

impl InlineParse for InlineParser<'_> {
    fn parse_inline(&self, text: &str) -> Vec<Node> {
        InlineState::new(self.table, text).parse()
    }
}

/// Per-call tokenizer state, handed to every handler.
///
/// Results of [`InlineState::until_char`] are remembered per start offset, so a failing
/// delimiter search is never repeated from the same position.
pub struct InlineState<'a> {
    table: &'a InlineTable,
    source: &'a str,
    depth: usize,
    memo: HashMap<(usize, char), Option<Delimited>>,
    last_seen: HashMap<char, Option<usize>>,
}

impl<'a> InlineState<'a> {
    pub fn new(table: &'a InlineTable, source: &'a str) -> Self {
        Self {
            table,
            source,
            depth: 0,
            memo: HashMap::new(),
            last_seen: HashMap::new(),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The source from byte offset `at` to the end.
    pub fn rest(&self, at: usize) -> &'a str {
        &self.source[at..]
    }

    /// Tokenize the whole source. Adjacent text nodes are merged.
    pub fn parse(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut at = 0;
        while at < self.source.len() {
            let (consumed, mut element) = self.one_element(at);
            at += consumed;
            nodes.append(&mut element);
        }
        merge_text(nodes)
    }

    /// Tokenize the element starting at `at`: a plain-text run or one triggered construct.
    pub fn one_element(&mut self, at: usize) -> InlineMatch {
        let rest = self.rest(at);
        let table = self.table;

        match rest.char_indices().find(|&(_, c)| table.is_trigger(c)) {
            None => (rest.len(), vec![Node::text(rest)]),
            Some((offset, _)) if offset > 0 => (offset, vec![Node::text(&rest[..offset])]),
            Some((_, trigger)) => table
                .handler(trigger)
                .and_then(|handler| handler(self, at))
                .unwrap_or_else(|| (trigger.len_utf8(), vec![Node::text(trigger.to_string())])),
        }
    }

    /// Tokenize from `at` up to the next `want` that is not consumed by a nested construct.
    ///
    /// `None` when the source ends first.
    pub fn until_char(&mut self, at: usize, want: char) -> Option<Delimited> {
        if let Some(result) = self.memo.get(&(at, want)) {
            return result.clone();
        }
        if !self.occurs_from(at, want) || self.depth >= MAX_INLINE_DEPTH {
            return None;
        }

        self.depth += 1;
        let result = self.scan_until(at, want);
        self.depth -= 1;

        self.memo.insert((at, want), result.clone());
        result
    }

    fn scan_until(&mut self, at: usize, want: char) -> Option<Delimited> {
        let mut consumed = 0;
        let mut nodes = Vec::new();
        loop {
            let rest = self.rest(at + consumed);
            if rest.starts_with(want) {
                return Some((consumed + want.len_utf8(), Rc::new(merge_text(nodes))));
            }
            if rest.is_empty() {
                return None;
            }
            let (len, mut element) = self.one_element(at + consumed);
            consumed += len;
            nodes.append(&mut element);
        }
    }

    fn occurs_from(&mut self, at: usize, want: char) -> bool {
        let source = self.source;
        let last = *self.last_seen.entry(want).or_insert_with(|| source.rfind(want));
        last.is_some_and(|last| last >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(state: &mut InlineState<'_>, at: usize) -> Option<InlineMatch> {
        let (consumed, children) = state.until_char(at + 1, '!')?;
        let text: String = children.iter().map(Node::plain_text).collect();
        Some((1 + consumed, vec![Node::text(text.to_uppercase())]))
    }

    fn literal(_: &mut InlineState<'_>, _: usize) -> Option<InlineMatch> {
        None
    }

    fn table() -> InlineTable {
        InlineTable::new().with_handler('^', shout).with_handler('!', literal)
    }

    #[test]
    fn test_custom_table() {
        let table = table();
        let parser = InlineParser::new(&table);
        assert_eq!(parser.parse_inline("say ^hi! now"), vec![Node::text("say HI now")]);
    }

    #[test]
    fn test_declined_trigger_is_literal() {
        let table = table();
        let parser = InlineParser::new(&table);
        assert_eq!(parser.parse_inline("^open"), vec![Node::text("^open")]);
        assert_eq!(parser.parse_inline("!"), vec![Node::text("!")]);
    }

    #[test]
    fn test_empty_table_yields_plain_text() {
        let table = InlineTable::new();
        let parser = InlineParser::new(&table);
        assert_eq!(parser.parse_inline("*a* [b](c)"), vec![Node::text("*a* [b](c)")]);
        assert!(parser.parse_inline("").is_empty());
    }

    #[test]
    fn test_closure_implements_inline_parse() {
        let upper = |text: &str| vec![Node::text(text.to_uppercase())];
        assert_eq!(upper.parse_inline("a"), vec![Node::text("A")]);
    }

    #[test]
    fn test_insert_replaces_handler() {
        let mut table = table();
        assert!(table.insert('^', literal).is_some());
        assert!(table.insert('%', literal).is_none());
        assert!(table.is_trigger('%'));
    }

    #[test]
    fn test_deep_nesting_terminates() {
        let table = table();
        let parser = InlineParser::new(&table);
        let text = "^".repeat(5_000);
        assert_eq!(parser.parse_inline(&text), vec![Node::text(text.clone())]);
    }
}
