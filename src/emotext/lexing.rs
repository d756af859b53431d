//! Raw tokenization of natural-language text
//!
//! Turns a source string into the flat token run the tree builder
//! consumes. The classes are deliberately coarse: words are alphanumeric
//! runs (combining marks included, so variation selectors and keycap marks
//! ride along), punctuation is split character by character, and symbol
//! runs keep pictographs together with any zero-width joiners between
//! them.
//!
//! Classification here is best-effort. Emoji spelled out of several tokens
//! (`❤` + variation selector, `#` + keycap marks, `:` `name` `:`) are the
//! coalescer's problem, not the lexer's. The grouping cuts the other way
//! too: pictographs packed together with no separator (`😀😀`) arrive as
//! one symbol token, which merges only when the entire run is a single
//! dictionary entry.

use logos::Logos;

/// One lexical class of source text.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    /// Alphanumeric run, combining marks included. Outranks `Symbol` on
    /// code points both classes match (circled letters and the like).
    #[regex(r"[\p{Alphabetic}\p{M}\p{Nd}]+", priority = 4)]
    Word,

    /// Whitespace run, newlines included.
    #[regex(r"\s+", priority = 3)]
    WhiteSpace,

    /// A single punctuation character.
    #[regex(r"\p{P}", priority = 3)]
    Punctuation,

    /// Run of symbols and invisible joiners.
    #[regex(r"[\p{S}\p{Cf}]+", priority = 3)]
    Symbol,

    /// Anything the classes above do not cover, one character at a time.
    #[regex(r".", priority = 1)]
    Other,
}

/// Tokenize source text with location information.
///
/// Returns tokens paired with their byte ranges, in source order. Every
/// byte of the input is covered by exactly one token, so concatenating the
/// matched slices reproduces the source.
pub fn tokenize(source: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
