//! Emoji coalescing over sibling lists
//!
//! [`EmojiCoalescer`] merges runs of adjacent siblings that jointly spell a
//! recognized emoji into a single `Emoticon` node. It runs as a
//! [`Modifier`] pass: the driver hands it one index of a live child vector,
//! it either commits a merge (splicing the vector and steering the cursor)
//! or leaves the list untouched.
//!
//! ## Match shapes
//!
//! Five shapes, tried in order; the first applicable wins:
//!
//! ```text
//! bare word          [Word("😀")]                      -> [Emoticon("😀")]
//! split word         [Word("👨"), Word("\u{200d}👩")]  -> [Emoticon("👨‍👩")]
//! continuation       [Symbol("❤"), Word(vs16)]        -> [Emoticon("❤️")]
//! triplet            [Symbol("#"), vs16, keycap]      -> [Emoticon("#️⃣")]
//! shortcode          [":", "wave", ":"]               -> [Emoticon(":wave:")]
//! ```
//!
//! ## Transactional matching
//!
//! Every shape validates completely against the lexicon before the first
//! mutation. A failed match leaves the sibling list byte-for-byte intact;
//! there is no error path, only "no match". Missing siblings where a shape
//! expects one are treated the same way.
//!
//! ## Spans
//!
//! A merged node's span is the exact union of the spans of everything it
//! replaced - or no span at all when any replaced node had none. Shortcode
//! matches whose colon falls inside a longer token split that token and
//! compute the boundary by shifting the split point one column and one
//! byte, so spans stay gap-free.

use super::ast::{Node, Point, Span};
use super::lexicon::EmojiLexicon;
use super::modify::{modify_tree, Modifier};

/// One-call convenience: coalesce every sibling list of `tree`.
pub fn merge_emoji(tree: &mut Node, lexicon: &EmojiLexicon) {
    let coalescer = EmojiCoalescer::new(lexicon);
    modify_tree(&coalescer, tree);
}

/// The coalescing pass. Holds the lexicon it validates against; one
/// instance serves any number of traversals.
pub struct EmojiCoalescer<'a> {
    lexicon: &'a EmojiLexicon,
}

impl<'a> EmojiCoalescer<'a> {
    pub fn new(lexicon: &'a EmojiLexicon) -> Self {
        Self { lexicon }
    }

    /// Bare-word match: the word itself is a known unicode sequence.
    fn replace_bare_word(&self, siblings: &mut Vec<Node>, index: usize, value: String) {
        let position = siblings[index].position();
        siblings[index] = Node::emoticon(value).at(position);
    }

    /// Split-word match: the previous sibling's text plus this word's text
    /// forms a known sequence. Rewinds the cursor so the node that slides
    /// into this slot gets visited.
    fn merge_with_previous(
        &self,
        siblings: &mut Vec<Node>,
        index: usize,
        value: String,
    ) -> Option<usize> {
        if index == 0 {
            return None;
        }

        let mut merged = siblings[index - 1].text_content();
        merged.push_str(&value);
        if !self.lexicon.is_emoji(&merged) {
            return None;
        }

        let position = merged_span(&siblings[index - 1..=index]);
        siblings.splice(index - 1..=index, [Node::emoticon(merged).at(position)]);
        Some(index)
    }

    /// Continuation match: a non-word anchor that is already a known
    /// sequence. The anchor becomes an emoticon regardless; a validated
    /// forward scan may additionally absorb a variation-selector tail.
    fn extend_sequence(&self, siblings: &mut Vec<Node>, index: usize, value: String) {
        match self.sequence_extension(siblings, index, &value) {
            Some((consumed, merged)) => {
                let last = index + consumed;
                let position = merged_span(&siblings[index..=last]);
                siblings.splice(index..=last, [Node::emoticon(merged).at(position)]);
            }
            None => {
                let position = siblings[index].position();
                siblings[index] = Node::emoticon(value).at(position);
            }
        }
    }

    /// The read-only part of the continuation match: how many siblings
    /// beyond the anchor a validated extension consumes, and the extended
    /// value. `None` means the anchor stands alone.
    fn sequence_extension(
        &self,
        siblings: &[Node],
        index: usize,
        value: &str,
    ) -> Option<(usize, String)> {
        let limit = self.lexicon.sequence_scan_limit();

        match siblings.get(index + 1)? {
            Node::Word(first) => {
                // words only continue a sequence through a variation
                // selector; anything else is prose
                if !is_variance_selector(&first.value) {
                    return None;
                }

                let mut possible = format!("{}{}", value, first.value);
                let mut consumed = 1;
                let mut scan = index + 2;

                while scan < siblings.len() && consumed < limit && !siblings[scan].is_word() {
                    possible.push_str(&siblings[scan].text_content());
                    consumed += 1;
                    scan += 1;
                }

                // one trailing word may close the sequence
                if scan < siblings.len() && siblings[scan].is_word() {
                    possible.push_str(&siblings[scan].text_content());
                    consumed += 1;
                }

                self.lexicon.is_emoji(&possible).then_some((consumed, possible))
            }
            Node::Symbol(_) => {
                let mut possible = value.to_string();
                let mut consumed = 0;
                let mut scan = index + 1;

                while scan < siblings.len() && consumed < limit {
                    let continues = match &siblings[scan] {
                        Node::Symbol(_) => true,
                        Node::Word(word) => is_variance_selector(&word.value),
                        _ => false,
                    };
                    if !continues {
                        break;
                    }
                    possible.push_str(&siblings[scan].text_content());
                    consumed += 1;
                    scan += 1;
                }

                (consumed > 0 && self.lexicon.is_emoji(&possible))
                    .then_some((consumed, possible))
            }
            _ => None,
        }
    }

    /// Triplet match: symbol anchor plus (symbol-or-word, symbol), the
    /// shape keycap sequences arrive in from per-character tokenizers.
    fn merge_triplet(&self, siblings: &mut Vec<Node>, index: usize, value: String) {
        let (Some(second), Some(third)) = (siblings.get(index + 1), siblings.get(index + 2))
        else {
            return;
        };
        if !(second.is_symbol() || second.is_word()) || !third.is_symbol() {
            return;
        }

        let mut combined = value;
        combined.push_str(&second.text_content());
        combined.push_str(&third.text_content());
        if !self.lexicon.is_emoji(&combined) {
            return;
        }

        let position = merged_span(&siblings[index..=index + 2]);
        siblings.splice(index..=index + 2, [Node::emoticon(combined).at(position)]);
    }

    /// Shortcode match: the anchor's text opens with the closing colon of
    /// a `:name:` form; scan backward for the opening colon, splitting
    /// either boundary token when the colon sits inside it.
    fn match_shortcode(
        &self,
        siblings: &mut Vec<Node>,
        index: usize,
        value: String,
    ) -> Option<usize> {
        let (right_marker, trailing_remainder) =
            split_leading_colon(&value, siblings[index].position());

        // walk backward for a sibling whose text ends with ':', collecting
        // the in-between text right to left
        let limit = self.lexicon.shortcode_scan_limit();
        let mut middle = Vec::new();
        let mut candidate = None;
        let mut scan = index;

        while scan > 0 {
            scan -= 1;
            if index - scan > limit {
                return None;
            }

            let text = siblings[scan].text_content();
            if text.ends_with(':') {
                candidate = Some((scan, text));
                break;
            }
            push_reversed_text(&mut middle, &siblings[scan]);
        }
        let (candidate_index, candidate_text) = candidate?;

        let (leading_remainder, left_marker) =
            split_trailing_colon(&candidate_text, siblings[candidate_index].position());

        let middle_text: String = middle.iter().rev().map(String::as_str).collect();
        let shortcode = format!(":{}:", middle_text);
        if !self.lexicon.is_shortcode(&shortcode) {
            return None;
        }

        let position = match (
            merged_span(&siblings[candidate_index..=index]),
            left_marker,
            right_marker,
        ) {
            (Some(_), Some(left), Some(right)) => Some(Span::new(left.start, right.end)),
            _ => None,
        };

        let mut replacement = Vec::with_capacity(3);
        replacement.extend(leading_remainder);
        replacement.push(Node::emoticon(shortcode).at(position));
        replacement.extend(trailing_remainder);
        siblings.splice(candidate_index..=index, replacement);

        // resume past the three-slot replacement core
        Some(candidate_index + 3)
    }
}

impl Modifier for EmojiCoalescer<'_> {
    fn visit(&self, siblings: &mut Vec<Node>, index: usize) -> Option<usize> {
        // containers are never anchors; they only contribute text when a
        // backward scan flattens them
        if siblings[index].is_container() {
            return None;
        }

        let value = siblings[index].text_content();

        if siblings[index].is_word() {
            if self.lexicon.is_emoji(&value) {
                self.replace_bare_word(siblings, index, value);
                None
            } else {
                self.merge_with_previous(siblings, index, value)
            }
        } else if self.lexicon.is_emoji(&value) {
            self.extend_sequence(siblings, index, value);
            None
        } else if siblings[index].is_symbol() {
            self.merge_triplet(siblings, index, value);
            None
        } else if value.starts_with(':') {
            self.match_shortcode(siblings, index, value)
        } else {
            None
        }
    }
}

/// Union of the spans of `nodes`, or `None` when any of them has none.
fn merged_span(nodes: &[Node]) -> Option<Span> {
    let mut spans = Vec::with_capacity(nodes.len());
    for node in nodes {
        spans.push(node.position()?);
    }
    Span::bounding(spans.iter())
}

/// A variance selector: a single character in the variation-selector block
/// (code points 65024 through 65039).
fn is_variance_selector(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => {
            let code = ch as u32;
            code > 65023 && code < 65040
        }
        _ => false,
    }
}

/// Text of `node` pushed onto `buffer` in right-to-left scan order;
/// containers contribute their children reversed, recursively.
fn push_reversed_text(buffer: &mut Vec<String>, node: &Node) {
    if let Some(children) = node.children() {
        for child in children.iter().rev() {
            push_reversed_text(buffer, child);
        }
    } else if let Some(value) = node.value() {
        buffer.push(value.to_string());
    }
}

/// Split a `:`-initial text into the right colon marker and the trailing
/// remainder node. A bare `:` is its own marker; otherwise the boundary
/// advances one column and one byte past the start.
fn split_leading_colon(text: &str, position: Option<Span>) -> (Option<Span>, Option<Node>) {
    if text.len() == 1 {
        return (position, None);
    }

    let (marker_span, remainder_span) = match position {
        Some(span) => {
            let boundary = Point::new(
                span.start.line,
                span.start.column + 1,
                span.start.offset + 1,
            );
            (
                Some(Span::new(span.start, boundary)),
                Some(Span::new(boundary, span.end)),
            )
        }
        None => (None, None),
    };

    let remainder = Node::punctuation(&text[1..]).at(remainder_span);
    (marker_span, Some(remainder))
}

/// Split a `:`-final text into the leading remainder node and the left
/// colon marker, retreating the boundary one column and one byte from the
/// end.
fn split_trailing_colon(text: &str, position: Option<Span>) -> (Option<Node>, Option<Span>) {
    if text.len() == 1 {
        return (None, position);
    }

    let (remainder_span, marker_span) = match position {
        Some(span) => {
            let boundary = Point::new(span.end.line, span.end.column - 1, span.end.offset - 1);
            (
                Some(Span::new(span.start, boundary)),
                Some(Span::new(boundary, span.end)),
            )
        }
        None => (None, None),
    };

    let remainder = Node::punctuation(&text[..text.len() - 1]).at(remainder_span);
    (Some(remainder), marker_span)
}
