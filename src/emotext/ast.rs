//! Syntax tree definitions and source position tracking
//!
//! The tree mirrors how natural-language tokenizers hand text over: a `Root`
//! holding `Paragraph`s, paragraphs holding `Sentence`s, sentences holding
//! literal runs (`Word`, `Punctuation`, `Symbol`, `WhiteSpace`, and the
//! `Emoticon` nodes the coalescer produces).
//!
//! ## How location tracking works
//!
//! The lexer produces tokens paired with byte-offset ranges into the source:
//!
//! ```text
//! Source: "Hi 😀"
//!          ↓
//! Lexer: (Word, 0..2) (WhiteSpace, 2..3) (Symbol, 3..7)
//! ```
//!
//! The parser converts each byte range to a [`Span`](range::Span) through a
//! [`SourceMap`](range::SourceMap) and attaches it to the node. Container
//! spans are the bounding box of their children. Downstream rewrites keep
//! spans exact: a merged node covers precisely the source region of the
//! nodes it replaced, or carries no span when any of them had none.

pub mod nodes;
pub mod range;

pub use nodes::{Literal, Node, Parent};
pub use range::{Point, SourceMap, Span};
