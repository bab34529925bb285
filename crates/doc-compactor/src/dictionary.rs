//! Static key and node-type dictionaries (long name <-> short code).
//!
//! Both tables are bijective, so the derived reverse maps are exact
//! inverses. Unknown names and codes pass through unchanged.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Attribute / field names.
pub const KEY_CODES: &[(&str, &str)] = &[
    ("type", "t"),
    ("content", "c"),
    ("attrs", "a"),
    ("text", "x"),
    ("level", "l"),
    ("src", "s"),
    ("alt", "at"),
    ("title", "tt"),
    ("href", "h"),
    ("target", "tg"),
    ("language", "lang"),
    ("width", "w"),
    ("height", "ht"),
    ("align", "al"),
    ("id", "id"),
    ("marks", "m"),
    ("videoId", "vid"),
    ("startTime", "st"),
    ("url", "u"),
];

/// Node and mark type names.
pub const NODE_TYPE_CODES: &[(&str, &str)] = &[
    ("doc", "d"),
    ("paragraph", "p"),
    ("heading", "h"),
    ("bulletList", "ul"),
    ("orderedList", "ol"),
    ("listItem", "li"),
    ("image", "i"),
    ("codeBlock", "cb"),
    ("table", "tb"),
    ("tableRow", "tr"),
    ("tableCell", "td"),
    ("tableHeader", "th"),
    ("blockquote", "bq"),
    ("horizontalRule", "hr"),
    ("hardBreak", "br"),
    ("bold", "b"),
    ("italic", "it"),
    ("link", "ln"),
    ("youtube", "yt"),
    ("video", "v"),
];

struct Dictionary {
    forward: HashMap<&'static str, &'static str>,
    reverse: HashMap<&'static str, &'static str>,
}

impl Dictionary {
    fn build(pairs: &'static [(&'static str, &'static str)]) -> Self {
        let forward = pairs.iter().copied().collect();
        let reverse = pairs.iter().map(|(long, short)| (*short, *long)).collect();
        Self { forward, reverse }
    }
}

static KEYS: LazyLock<Dictionary> = LazyLock::new(|| Dictionary::build(KEY_CODES));
static NODE_TYPES: LazyLock<Dictionary> = LazyLock::new(|| Dictionary::build(NODE_TYPE_CODES));

/// Short code for an attribute name, or the name itself.
pub fn encode_key(key: &str) -> &str {
    KEYS.forward.get(key).copied().unwrap_or(key)
}

/// Attribute name for a short code, or the code itself.
pub fn decode_key(code: &str) -> &str {
    KEYS.reverse.get(code).copied().unwrap_or(code)
}

/// Short code for a node/mark type, or the type itself.
pub fn encode_type(kind: &str) -> &str {
    NODE_TYPES.forward.get(kind).copied().unwrap_or(kind)
}

/// Node/mark type for a short code, or the code itself.
pub fn decode_type(code: &str) -> &str {
    NODE_TYPES.reverse.get(code).copied().unwrap_or(code)
}

/// Rename every key of an attribute map to its short code.
pub fn encode_attrs(attrs: &Map<String, Value>) -> Map<String, Value> {
    attrs
        .iter()
        .map(|(key, value)| (encode_key(key).to_string(), value.clone()))
        .collect()
}

/// Restore long attribute names.
pub fn decode_attrs(attrs: &Map<String, Value>) -> Map<String, Value> {
    attrs
        .iter()
        .map(|(code, value)| (decode_key(code).to_string(), value.clone()))
        .collect()
}
