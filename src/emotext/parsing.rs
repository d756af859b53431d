//! Tree assembly from raw tokens
//!
//! Builds the `Root > Paragraph > Sentence > literal` structure: paragraphs
//! break on whitespace runs containing a blank line, sentences end after
//! terminal punctuation, and whitespace between sentences stays at the
//! paragraph level. Every literal carries the exact span of its source
//! bytes; container spans are the bounding box of their children.
//!
//! The builder never drops text, so `parse(source).text_content()` always
//! reproduces `source`.

use super::ast::{Node, SourceMap, Span};
use super::lexing::{tokenize, RawToken};

/// Parse source text into a positioned syntax tree.
pub fn parse(source: &str) -> Node {
    let map = SourceMap::new(source);
    let mut builder = TreeBuilder::new();

    for (token, span) in tokenize(source) {
        let text = &source[span.clone()];
        let position = map.span_for(&span);

        match token {
            RawToken::WhiteSpace => builder.white_space(text, position),
            RawToken::Word => builder.literal(Node::word(text).at(position), true),
            RawToken::Symbol => builder.literal(Node::symbol(text).at(position), true),
            RawToken::Other => builder.literal(Node::symbol(text).at(position), true),
            RawToken::Punctuation => {
                builder.literal(Node::punctuation(text).at(position), false);
                if matches!(text, "." | "!" | "?") {
                    builder.end_sentence();
                }
            }
        }
    }

    builder.finish()
}

struct TreeBuilder {
    root: Vec<Node>,
    paragraph: Vec<Node>,
    sentence: Vec<Node>,
    sentence_done: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            root: Vec::new(),
            paragraph: Vec::new(),
            sentence: Vec::new(),
            sentence_done: false,
        }
    }

    /// Add a literal to the current sentence. `breaks` controls whether a
    /// finished sentence is flushed first; closing punctuation after a
    /// terminal mark stays attached to the sentence it closes.
    fn literal(&mut self, node: Node, breaks: bool) {
        if breaks && self.sentence_done {
            self.flush_sentence();
        }
        if breaks {
            self.sentence_done = false;
        }
        self.sentence.push(node);
    }

    fn end_sentence(&mut self) {
        self.sentence_done = true;
    }

    fn white_space(&mut self, text: &str, position: Span) {
        let blank_line = text.matches('\n').count() >= 2;
        let node = Node::white_space(text).at(position);

        if blank_line {
            self.flush_paragraph();
            self.root.push(node);
        } else if self.sentence.is_empty() {
            self.paragraph.push(node);
        } else if self.sentence_done {
            self.flush_sentence();
            self.paragraph.push(node);
        } else {
            self.sentence.push(node);
        }
    }

    fn flush_sentence(&mut self) {
        self.sentence_done = false;
        if self.sentence.is_empty() {
            return;
        }
        let children = std::mem::take(&mut self.sentence);
        let position = bounding(&children);
        self.paragraph.push(Node::sentence(children).at(position));
    }

    fn flush_paragraph(&mut self) {
        self.flush_sentence();
        if self.paragraph.is_empty() {
            return;
        }

        // a run of bare whitespace is not a paragraph
        if self
            .paragraph
            .iter()
            .all(|node| matches!(node, Node::WhiteSpace(_)))
        {
            self.root.append(&mut self.paragraph);
            return;
        }

        let children = std::mem::take(&mut self.paragraph);
        let position = bounding(&children);
        self.root.push(Node::paragraph(children).at(position));
    }

    fn finish(mut self) -> Node {
        self.flush_paragraph();
        let children = self.root;
        let position = bounding(&children);
        Node::root(children).at(position)
    }
}

fn bounding(children: &[Node]) -> Option<Span> {
    let spans: Vec<Span> = children.iter().filter_map(|child| child.position()).collect();
    Span::bounding(spans.iter())
}
