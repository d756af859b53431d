//! End-to-end processing pipeline
//!
//! [`Pipeline`] wires the stages together: parse source text into a
//! positioned tree, coalesce emoji, optionally normalize emoticon
//! spellings. Rendering is separate - a tree can be serialized as `json`,
//! `yaml`, or the indented `tag` text form.

use super::ast::Node;
use super::coalesce::merge_emoji;
use super::convert::{convert_emoticons, EmoticonForm};
use super::lexicon::EmojiLexicon;
use super::parsing::parse;
use std::fmt;
use std::io;

/// Failures at the processing boundary: reading input and rendering
/// output. Tree construction itself cannot fail.
#[derive(Debug)]
pub enum ProcessError {
    Io(io::Error),
    UnknownFormat(String),
    UnknownForm(String),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Io(err) => write!(f, "io error: {}", err),
            ProcessError::UnknownFormat(name) => {
                write!(f, "unknown output format '{}' (expected tag, json, or yaml)", name)
            }
            ProcessError::UnknownForm(name) => {
                write!(f, "unknown emoticon form '{}' (expected unicode or shortcode)", name)
            }
            ProcessError::Json(err) => write!(f, "json rendering failed: {}", err),
            ProcessError::Yaml(err) => write!(f, "yaml rendering failed: {}", err),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Io(err) => Some(err),
            ProcessError::Json(err) => Some(err),
            ProcessError::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ProcessError {
    fn from(err: io::Error) -> Self {
        ProcessError::Io(err)
    }
}

impl From<serde_json::Error> for ProcessError {
    fn from(err: serde_json::Error) -> Self {
        ProcessError::Json(err)
    }
}

impl From<serde_yaml::Error> for ProcessError {
    fn from(err: serde_yaml::Error) -> Self {
        ProcessError::Yaml(err)
    }
}

/// How a tree is rendered for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented one-node-per-line text form.
    Tag,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name like "tag" or "json".
    pub fn from_name(name: &str) -> Result<Self, ProcessError> {
        match name {
            "tag" => Ok(OutputFormat::Tag),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(ProcessError::UnknownFormat(other.to_string())),
        }
    }

    pub fn render(&self, tree: &Node) -> Result<String, ProcessError> {
        match self {
            OutputFormat::Tag => Ok(render_tag(tree)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(tree)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(tree)?),
        }
    }
}

fn render_tag(tree: &Node) -> String {
    let mut out = String::new();
    render_tag_into(tree, 0, &mut out);
    out
}

fn render_tag_into(node: &Node, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(node.kind());

    if let Some(value) = node.value() {
        out.push(' ');
        out.push_str(&format!("{:?}", value));
    }
    if let Some(span) = node.position() {
        out.push(' ');
        out.push_str(&span.to_string());
    }
    out.push('\n');

    if let Some(children) = node.children() {
        for child in children {
            render_tag_into(child, depth + 1, out);
        }
    }
}

/// The full parse-and-coalesce pipeline.
pub struct Pipeline {
    lexicon: EmojiLexicon,
    convert: Option<EmoticonForm>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_lexicon(EmojiLexicon::default())
    }

    pub fn with_lexicon(lexicon: EmojiLexicon) -> Self {
        Self {
            lexicon,
            convert: None,
        }
    }

    /// Normalize emoticon values to `form` after coalescing.
    pub fn convert_to(mut self, form: EmoticonForm) -> Self {
        self.convert = Some(form);
        self
    }

    pub fn lexicon(&self) -> &EmojiLexicon {
        &self.lexicon
    }

    /// Parse `source`, coalesce every sibling list, and apply the optional
    /// spelling conversion.
    pub fn run(&self, source: &str) -> Node {
        let mut tree = parse(source);
        merge_emoji(&mut tree, &self.lexicon);
        if let Some(form) = self.convert {
            convert_emoticons(&mut tree, form, &self.lexicon);
        }
        tree
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
