//! Emoticon spelling conversion
//!
//! After coalescing, every recognized emoji sits in one `Emoticon` node,
//! but its value still reads exactly as the source spelled it - unicode
//! here, `:shortcode:` there. This pass rewrites the values to one uniform
//! spelling. Positions are left alone: they keep describing the source
//! range the node came from, whatever length the new value has.

use super::ast::Node;
use super::lexicon::EmojiLexicon;

/// Target spelling for emoticon values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmoticonForm {
    Unicode,
    Shortcode,
}

impl EmoticonForm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "unicode" => Some(EmoticonForm::Unicode),
            "shortcode" => Some(EmoticonForm::Shortcode),
            _ => None,
        }
    }
}

/// Rewrite every emoticon value in `tree` to `form`. Values the lexicon
/// cannot resolve stay as they are.
pub fn convert_emoticons(tree: &mut Node, form: EmoticonForm, lexicon: &EmojiLexicon) {
    if let Node::Emoticon(literal) = tree {
        if let Some(rewritten) = convert_value(&literal.value, form, lexicon) {
            literal.value = rewritten;
        }
    } else if let Some(children) = tree.children_mut() {
        for child in children.iter_mut() {
            convert_emoticons(child, form, lexicon);
        }
    }
}

fn convert_value(value: &str, form: EmoticonForm, lexicon: &EmojiLexicon) -> Option<String> {
    match form {
        EmoticonForm::Unicode => {
            let name = value.strip_prefix(':')?.strip_suffix(':')?;
            lexicon.unicode_of(name).map(str::to_string)
        }
        EmoticonForm::Shortcode => lexicon
            .name_of(value)
            .map(|name| format!(":{}:", name)),
    }
}
