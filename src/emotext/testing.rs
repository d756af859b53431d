//! Test factories and assertion helpers
//!
//! Terse constructors for hand-built sibling lists, shared by unit and
//! integration tests.

use super::ast::{Node, Point, Span};

pub fn word(value: &str) -> Node {
    Node::word(value)
}

pub fn punct(value: &str) -> Node {
    Node::punctuation(value)
}

pub fn sym(value: &str) -> Node {
    Node::symbol(value)
}

pub fn ws(value: &str) -> Node {
    Node::white_space(value)
}

pub fn emoticon(value: &str) -> Node {
    Node::emoticon(value)
}

pub fn sentence(children: Vec<Node>) -> Node {
    Node::sentence(children)
}

/// A span on line 1 with byte offsets `start..end` and matching columns.
/// Columns track offsets one-for-one, which mirrors real tokenization for
/// ASCII fixtures.
pub fn line_span(start: usize, end: usize) -> Span {
    Span::new(Point::new(1, start + 1, start), Point::new(1, end + 1, end))
}

/// Attach consecutive spans to a list of literals, as if they had been
/// tokenized from a single line of source. Columns advance by characters,
/// offsets by bytes, exactly as the parser computes them.
pub fn spanned(children: Vec<Node>) -> Vec<Node> {
    let mut column = 1;
    let mut offset = 0;

    children
        .into_iter()
        .map(|node| {
            let text = node.text_content();
            let start = Point::new(1, column, offset);
            column += text.chars().count();
            offset += text.len();
            let end = Point::new(1, column, offset);
            node.at(Span::new(start, end))
        })
        .collect()
}

pub fn kinds_of(nodes: &[Node]) -> Vec<&'static str> {
    nodes.iter().map(Node::kind).collect()
}

pub fn values_of(nodes: &[Node]) -> Vec<String> {
    nodes.iter().map(Node::text_content).collect()
}
