//! Syntax tree nodes for natural-language text
//!
//! `Node` is the common wrapper for everything the tokenizer emits and the
//! coalescer rewrites. Containers (`Root`, `Paragraph`, `Sentence`) hold
//! ordered children; literals (`Word`, `Punctuation`, `Symbol`,
//! `WhiteSpace`, `Emoticon`) hold the exact substring they cover.
//!
//! The textual content of any node is recoverable: a literal contributes its
//! value, a container the concatenation of its children, so serializing a
//! tree back to text is lossless.
//!
//! Serialized form is internally tagged:
//!
//! ```json
//! {"type": "Word", "value": "hi", "position": {...}}
//! ```

use super::range::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A leaf node: a typed run of source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position: Option<Span>,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            position: None,
        }
    }
}

/// An interior node: an ordered sequence of children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parent {
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position: Option<Span>,
}

impl Parent {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            position: None,
        }
    }
}

/// Any node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Root(Parent),
    Paragraph(Parent),
    Sentence(Parent),
    Word(Literal),
    Punctuation(Literal),
    Symbol(Literal),
    WhiteSpace(Literal),
    Emoticon(Literal),
}

impl Node {
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Parent::new(children))
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Parent::new(children))
    }

    pub fn sentence(children: Vec<Node>) -> Self {
        Node::Sentence(Parent::new(children))
    }

    pub fn word(value: impl Into<String>) -> Self {
        Node::Word(Literal::new(value))
    }

    pub fn punctuation(value: impl Into<String>) -> Self {
        Node::Punctuation(Literal::new(value))
    }

    pub fn symbol(value: impl Into<String>) -> Self {
        Node::Symbol(Literal::new(value))
    }

    pub fn white_space(value: impl Into<String>) -> Self {
        Node::WhiteSpace(Literal::new(value))
    }

    pub fn emoticon(value: impl Into<String>) -> Self {
        Node::Emoticon(Literal::new(value))
    }

    /// Attach a source position. Accepts a `Span` or an `Option<Span>`.
    pub fn at<P: Into<Option<Span>>>(mut self, position: P) -> Self {
        *self.position_mut() = position.into();
        self
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "Root",
            Node::Paragraph(_) => "Paragraph",
            Node::Sentence(_) => "Sentence",
            Node::Word(_) => "Word",
            Node::Punctuation(_) => "Punctuation",
            Node::Symbol(_) => "Symbol",
            Node::WhiteSpace(_) => "WhiteSpace",
            Node::Emoticon(_) => "Emoticon",
        }
    }

    pub fn position(&self) -> Option<Span> {
        match self {
            Node::Root(p) | Node::Paragraph(p) | Node::Sentence(p) => p.position,
            Node::Word(l)
            | Node::Punctuation(l)
            | Node::Symbol(l)
            | Node::WhiteSpace(l)
            | Node::Emoticon(l) => l.position,
        }
    }

    pub fn position_mut(&mut self) -> &mut Option<Span> {
        match self {
            Node::Root(p) | Node::Paragraph(p) | Node::Sentence(p) => &mut p.position,
            Node::Word(l)
            | Node::Punctuation(l)
            | Node::Symbol(l)
            | Node::WhiteSpace(l)
            | Node::Emoticon(l) => &mut l.position,
        }
    }

    /// The literal value, for leaf nodes.
    pub fn value(&self) -> Option<&str> {
        self.as_literal().map(|l| l.value.as_str())
    }

    pub fn children(&self) -> Option<&[Node]> {
        self.as_parent().map(|p| p.children.as_slice())
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        self.as_parent_mut().map(|p| &mut p.children)
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Word(l)
            | Node::Punctuation(l)
            | Node::Symbol(l)
            | Node::WhiteSpace(l)
            | Node::Emoticon(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_parent(&self) -> Option<&Parent> {
        match self {
            Node::Root(p) | Node::Paragraph(p) | Node::Sentence(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_parent_mut(&mut self) -> Option<&mut Parent> {
        match self {
            Node::Root(p) | Node::Paragraph(p) | Node::Sentence(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Node::Word(_))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Node::Symbol(_))
    }

    pub fn is_emoticon(&self) -> bool {
        matches!(self, Node::Emoticon(_))
    }

    pub fn is_container(&self) -> bool {
        self.as_parent().is_some()
    }

    /// The full text this node covers: a literal's value, or the
    /// concatenation of all child content in order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Root(p) | Node::Paragraph(p) | Node::Sentence(p) => {
                for child in &p.children {
                    child.collect_text(out);
                }
            }
            Node::Word(l)
            | Node::Punctuation(l)
            | Node::Symbol(l)
            | Node::WhiteSpace(l)
            | Node::Emoticon(l) => out.push_str(&l.value),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Root(p) | Node::Paragraph(p) | Node::Sentence(p) => {
                write!(f, "{}[{} children]", self.kind(), p.children.len())
            }
            Node::Word(l)
            | Node::Punctuation(l)
            | Node::Symbol(l)
            | Node::WhiteSpace(l)
            | Node::Emoticon(l) => write!(f, "{}({:?})", self.kind(), l.value),
        }
    }
}
