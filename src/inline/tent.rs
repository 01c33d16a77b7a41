//! The Tent inline dialect.
//!
//! A deliberately small set of constructs: backslash escapes, `*strong*`, `_em_`,
//! `~strikethrough~`, `[text](target)` links, single-backtick code and hard line
//! breaks on every newline.

use regex::Regex;
use std::sync::LazyLock;

use super::{InlineMatch, InlineState, InlineTable};
use crate::tree::Node;

/// Characters a backslash can escape.
const ESCAPABLE: &[char] = &['\\', '`', '*', '_', '[', ']', '(', ')', '~'];

/// `(target)` directly after the link text. Runs to the last `)` before any quote;
/// [`balanced_target`] pulls the end back to the matching paren.
static LINK_TARGET_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^\(([^"']*)\)"#).unwrap());

pub static TENT_INLINE: LazyLock<InlineTable> = LazyLock::new(|| {
    InlineTable::new()
        .with_handler('\\', escaped)
        .with_handler('*', strong)
        .with_handler('_', em)
        .with_handler('~', strikethrough)
        .with_handler('[', link)
        .with_handler('`', inline_code)
        .with_handler('\n', line_break)
        .with_handler('\r', crlf_line_break)
        .with_handler(']', literal)
        .with_handler('}', literal)
});

/// Link targets only get escapes processed.
static ESCAPES_ONLY: LazyLock<InlineTable> = LazyLock::new(|| InlineTable::new().with_handler('\\', escaped));

// =============================================================================
// Handlers
// =============================================================================

fn escaped(state: &mut InlineState<'_>, at: usize) -> Option<InlineMatch> {
    let escaped = state.rest(at).chars().nth(1)?;
    if !ESCAPABLE.contains(&escaped) {
        return None;
    }
    Some((1 + escaped.len_utf8(), vec![Node::text(escaped.to_string())]))
}

fn delimited(state: &mut InlineState<'_>, at: usize, delimiter: char, wrap: fn(Vec<Node>) -> Node) -> Option<InlineMatch> {
    let open = delimiter.len_utf8();
    let (consumed, children) = state.until_char(at + open, delimiter)?;
    Some((open + consumed, vec![wrap(children.to_vec())]))
}

fn strong(state: &mut InlineState<'_>, at: usize) -> Option<InlineMatch> {
    delimited(state, at, '*', |children| Node::Strong { children })
}

fn em(state: &mut InlineState<'_>, at: usize) -> Option<InlineMatch> {
    delimited(state, at, '_', |children| Node::Em { children })
}

fn strikethrough(state: &mut InlineState<'_>, at: usize) -> Option<InlineMatch> {
    delimited(state, at, '~', |children| Node::Strikethrough { children })
}

fn link(state: &mut InlineState<'_>, at: usize) -> Option<InlineMatch> {
    let (label_len, children) = state.until_char(at + 1, ']')?;
    let mut consumed = 1 + label_len;

    let caps = LINK_TARGET_REGEX.captures(state.rest(at + consumed))?;
    let target = balanced_target(caps.get(1)?.as_str());
    consumed += target.len() + 2;

    Some((consumed, vec![Node::link(process_escapes(target), None, children.to_vec())]))
}

fn inline_code(state: &mut InlineState<'_>, at: usize) -> Option<InlineMatch> {
    let body = &state.rest(at)[1..];
    let close = body.find('`')?;
    Some((
        close + 2,
        vec![Node::InlineCode {
            code: body[..close].to_string(),
        }],
    ))
}

fn line_break(_: &mut InlineState<'_>, _: usize) -> Option<InlineMatch> {
    Some((1, vec![Node::LineBreak]))
}

/// A lone `\r` stays literal.
fn crlf_line_break(state: &mut InlineState<'_>, at: usize) -> Option<InlineMatch> {
    state.rest(at).starts_with("\r\n").then(|| (2, vec![Node::LineBreak]))
}

/// Registered only so plain-text runs stop at the character.
fn literal(_: &mut InlineState<'_>, _: usize) -> Option<InlineMatch> {
    None
}

// =============================================================================
// Link target helpers
// =============================================================================

/// Cut `target` at the paren that closes the one opening it.
fn balanced_target(target: &str) -> &str {
    let mut open = 1usize;
    for (i, c) in target.char_indices() {
        match c {
            '(' => open += 1,
            ')' => {
                open -= 1;
                if open == 0 {
                    return &target[..i];
                }
            }
            _ => {}
        }
    }
    target
}

fn process_escapes(target: &str) -> String {
    InlineState::new(&ESCAPES_ONLY, target)
        .parse()
        .iter()
        .map(Node::plain_text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::{InlineParse, InlineParser};
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Vec<Node> {
        InlineParser::default().parse_inline(text)
    }

    fn text(s: &str) -> Node {
        Node::text(s)
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("just words"), vec![text("just words")]);
    }

    #[test]
    fn test_strong_em_strikethrough() {
        assert_eq!(
            parse("a *b* _c_ ~d~"),
            vec![
                text("a "),
                Node::Strong { children: vec![text("b")] },
                text(" "),
                Node::Em { children: vec![text("c")] },
                text(" "),
                Node::Strikethrough { children: vec![text("d")] },
            ]
        );
    }

    #[test]
    fn test_nested_inline() {
        assert_eq!(
            parse("*a _b_ c*"),
            vec![Node::Strong {
                children: vec![text("a "), Node::Em { children: vec![text("b")] }, text(" c")]
            }]
        );
    }

    #[test]
    fn test_unterminated_delimiters_are_literal() {
        assert_eq!(parse("*open"), vec![text("*open")]);
        assert_eq!(parse("a _b *c"), vec![text("a _b *c")]);
        assert_eq!(parse("`tick"), vec![text("`tick")]);
    }

    #[test]
    fn test_inner_unterminated_delimiter() {
        assert_eq!(
            parse("*a _b c*"),
            vec![Node::Strong {
                children: vec![text("a _b c")]
            }]
        );
    }

    #[test]
    fn test_escapes() {
        assert_eq!(parse(r"\*not strong\*"), vec![text("*not strong*")]);
        assert_eq!(parse(r"\q"), vec![text(r"\q")]);
        assert_eq!(parse(r"\\"), vec![text(r"\")]);
        assert_eq!(parse("trailing \\"), vec![text("trailing \\")]);
    }

    #[test]
    fn test_braces_and_brackets_are_literal() {
        assert_eq!(parse("a ] b } c"), vec![text("a ] b } c")]);
        assert_eq!(parse("[no target] here"), vec![text("[no target] here")]);
    }

    #[test]
    fn test_link() {
        assert_eq!(
            parse("see [the *site*](http://x.com) now"),
            vec![
                text("see "),
                Node::link(
                    "http://x.com",
                    None,
                    vec![text("the "), Node::Strong { children: vec![text("site")] }]
                ),
                text(" now"),
            ]
        );
    }

    #[test]
    fn test_link_target_balances_parens() {
        assert_eq!(
            parse("[here](/url/(test)) tail"),
            vec![Node::link("/url/(test)", None, vec![text("here")]), text(" tail")]
        );
        assert_eq!(
            parse("[a](x) and (y)"),
            vec![Node::link("x", None, vec![text("a")]), text(" and (y)")]
        );
    }

    #[test]
    fn test_link_target_escapes_only() {
        assert_eq!(parse(r"[a](x\_y*z*)"), vec![Node::link("x_y*z*", None, vec![text("a")])]);
    }

    #[test]
    fn test_link_target_rejects_quotes() {
        assert_eq!(parse(r#"[a](x "t")"#), vec![text(r#"[a](x "t")"#)]);
    }

    #[test]
    fn test_empty_link_target() {
        assert_eq!(parse("[a]()"), vec![Node::link("", None, vec![text("a")])]);
    }

    #[test]
    fn test_footnote_style_link() {
        assert_eq!(parse("[x](0)"), vec![Node::link("0", None, vec![text("x")])]);
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            parse("run `cargo *x*` now"),
            vec![
                text("run "),
                Node::InlineCode {
                    code: "cargo *x*".into()
                },
                text(" now"),
            ]
        );
        assert_eq!(parse("``"), vec![Node::InlineCode { code: String::new() }]);
    }

    #[test]
    fn test_line_break_consumes_only_newline() {
        assert_eq!(parse("a\nb"), vec![text("a"), Node::LineBreak, text("b")]);
        assert_eq!(parse("a\n\nb"), vec![text("a"), Node::LineBreak, Node::LineBreak, text("b")]);
    }

    #[test]
    fn test_crlf_is_one_line_break() {
        assert_eq!(parse("a\r\nb"), vec![text("a"), Node::LineBreak, text("b")]);
        assert_eq!(parse("a\rb"), vec![text("a\rb")]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            parse("日本 *語* ~é~"),
            vec![
                text("日本 "),
                Node::Strong { children: vec![text("語")] },
                text(" "),
                Node::Strikethrough { children: vec![text("é")] },
            ]
        );
    }

    #[test]
    fn test_pathological_brackets() {
        let text = "[".repeat(500) + "]";
        assert_eq!(parse(&text), vec![Node::text(text.clone())]);

        let text = "*_~[".repeat(200);
        assert!(!parse(&text).is_empty());
    }
}
