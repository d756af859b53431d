//! Emoji dictionary
//!
//! [`EmojiLexicon`] is the read-only lookup context the coalescer runs
//! against: unicode sequence → canonical name, name → unicode sequence, and
//! the set of `:name:` shortcodes derived from the names. It is built once
//! (from caller-supplied pairs or the embedded default dataset) and never
//! mutated afterwards.
//!
//! The two scan bounds the matching rules need are derived from the data at
//! construction time rather than hardcoded:
//!
//! - [`sequence_scan_limit`](EmojiLexicon::sequence_scan_limit) - how many
//!   siblings a unicode-sequence match may absorb beyond its anchor, from
//!   the longest sequence in the dictionary
//! - [`shortcode_scan_limit`](EmojiLexicon::shortcode_scan_limit) - how far
//!   a shortcode match may scan backward for its opening colon, from the
//!   worst-case tokenization of the longest name

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static DEFAULT_DATA: &str = include_str!("../../data/emoji.tsv");

static DEFAULT_LEXICON: Lazy<EmojiLexicon> = Lazy::new(|| EmojiLexicon::from_tsv(DEFAULT_DATA));

/// Bidirectional emoji dictionary with a precomputed shortcode set.
#[derive(Debug, Clone)]
pub struct EmojiLexicon {
    unicode_to_name: HashMap<String, String>,
    name_to_unicode: HashMap<String, String>,
    shortcodes: HashSet<String>,
    sequence_scan_limit: usize,
    shortcode_scan_limit: usize,
}

impl EmojiLexicon {
    /// Build a lexicon from `(name, unicode sequence)` pairs.
    pub fn from_pairs<I, N, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut unicode_to_name = HashMap::new();
        let mut name_to_unicode = HashMap::new();
        let mut shortcodes = HashSet::new();
        let mut max_sequence_chars = 0;
        let mut max_name_parts = 0;

        for (name, sequence) in pairs {
            let name = name.into();
            let sequence = sequence.into();

            max_sequence_chars = max_sequence_chars.max(sequence.chars().count());
            max_name_parts = max_name_parts.max(name_parts(&name));

            shortcodes.insert(format!(":{}:", name));
            unicode_to_name.insert(sequence.clone(), name.clone());
            name_to_unicode.insert(name, sequence);
        }

        Self {
            unicode_to_name,
            name_to_unicode,
            shortcodes,
            sequence_scan_limit: max_sequence_chars.saturating_sub(1),
            // worst-case token count of ":name:" - the name's parts plus
            // one colon marker on each side
            shortcode_scan_limit: if max_name_parts == 0 {
                0
            } else {
                max_name_parts + 2
            },
        }
    }

    /// Parse the tab-separated `name<TAB>sequence` format. Blank lines and
    /// lines starting with `#` are ignored, as is any line without a tab.
    pub fn from_tsv(data: &str) -> Self {
        Self::from_pairs(data.lines().filter_map(|line| {
            let line = line.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            line.split_once('\t')
                .map(|(name, sequence)| (name.to_string(), sequence.to_string()))
        }))
    }

    /// The process-wide default lexicon, parsed from the embedded dataset
    /// on first use.
    pub fn shared() -> &'static EmojiLexicon {
        &DEFAULT_LEXICON
    }

    pub fn name_of(&self, sequence: &str) -> Option<&str> {
        self.unicode_to_name.get(sequence).map(String::as_str)
    }

    pub fn unicode_of(&self, name: &str) -> Option<&str> {
        self.name_to_unicode.get(name).map(String::as_str)
    }

    /// Whether `sequence` is a known unicode emoji sequence.
    pub fn is_emoji(&self, sequence: &str) -> bool {
        self.unicode_to_name.contains_key(sequence)
    }

    /// Whether `candidate` (colons included) is a known shortcode.
    pub fn is_shortcode(&self, candidate: &str) -> bool {
        self.shortcodes.contains(candidate)
    }

    /// Maximum number of siblings a unicode continuation scan may consume
    /// beyond its anchor node.
    pub fn sequence_scan_limit(&self) -> usize {
        self.sequence_scan_limit
    }

    /// Maximum number of backward steps a shortcode scan may take before
    /// giving up on finding the opening colon.
    pub fn shortcode_scan_limit(&self) -> usize {
        self.shortcode_scan_limit
    }

    pub fn len(&self) -> usize {
        self.unicode_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unicode_to_name.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.name_to_unicode.keys().map(String::as_str)
    }

    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.unicode_to_name.keys().map(String::as_str)
    }
}

impl Default for EmojiLexicon {
    fn default() -> Self {
        Self::shared().clone()
    }
}

/// Worst-case token count of a name: tokenizers keep alphanumeric runs
/// together but may split at every other character.
fn name_parts(name: &str) -> usize {
    let mut parts = 0;
    let mut in_run = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if !in_run {
                parts += 1;
            }
            in_run = true;
        } else {
            parts += 1;
            in_run = false;
        }
    }

    parts
}
