//! Source positions and spans for tree nodes
//!
//! ## Types
//!
//! - [`Point`] - a single place in the source: line, column, byte offset
//! - [`Span`] - a start/end pair of points
//! - [`SourceMap`] - converts byte offsets to points for one source text
//!
//! ## Conventions
//!
//! - Lines and columns are 1-based; columns count characters, not bytes
//! - Offsets are 0-based byte offsets into the original source
//! - Spans on nodes are optional, but always whole: a node either carries a
//!   complete start/end pair or none at all

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A contiguous region of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Point,
    pub end: Point,
}

impl Span {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The smallest span covering both `self` and `other`.
    pub fn cover(&self, other: &Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Build the smallest span containing all provided spans.
    pub fn bounding<'a, I>(mut spans: I) -> Option<Span>
    where
        I: Iterator<Item = &'a Span>,
    {
        let first = *spans.next()?;
        Some(spans.fold(first, |acc, span| acc.cover(span)))
    }

    pub fn len_bytes(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Fast byte-offset to point conversion for one source text.
///
/// Line starts are collected once; point lookup is a binary search plus a
/// character count over the line prefix (columns are character-based).
pub struct SourceMap<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceMap<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a point. Offsets must lie on character
    /// boundaries of the source this map was built from.
    pub fn point_at(&self, byte_offset: usize) -> Point {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self.source[line_start..byte_offset].chars().count();

        Point::new(line + 1, column + 1, byte_offset)
    }

    /// Convert a byte range to a span.
    pub fn span_for(&self, range: &std::ops::Range<usize>) -> Span {
        Span::new(self.point_at(range.start), self.point_at(range.end))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
