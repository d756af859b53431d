//! # emotext
//!
//! A parser and emoji normalizer for plain text.
//!
//! The crate tokenizes a document into a small syntax tree (paragraphs,
//! sentences, words, punctuation, symbols), then coalesces emoji that the
//! tokenizer split apart and shortcodes such as `:smile:` into single
//! `Emoticon` nodes. Merged nodes keep exact source positions whenever the
//! pieces they replace carried them.
//!
//! The main entry point is [`emotext::process::Pipeline`], which runs the
//! whole parse, merge, render sequence. The individual stages live in their
//! own modules under [`emotext`] and can be driven separately.
//!
//! ## Testing
//!
//! Test factories for hand-built sibling lists live in the
//! [testing module](emotext::testing).

pub mod emotext;
