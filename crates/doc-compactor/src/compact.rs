//! Compact wire form.
//!
//! Field renames here must agree with [`crate::dictionary::KEY_CODES`] and
//! variant tags with [`crate::dictionary::NODE_TYPE_CODES`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_LANGUAGE: &str = "plaintext";

/// One compact node. Variants are tried in declaration order on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompactNode {
    /// Unmarked text written as a plain string.
    Bare(String),
    Text(CompactText),
    Block(CompactBlock),
    Custom(CompactCustom),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompactText {
    #[serde(rename = "x")]
    pub text: String,
    #[serde(rename = "m", default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<CompactMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum CompactBlock {
    #[serde(rename = "d")]
    Doc {
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
    },
    #[serde(rename = "p")]
    Paragraph {
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
    },
    #[serde(rename = "h")]
    Heading {
        #[serde(rename = "l", default = "default_level")]
        level: u8,
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    #[serde(rename = "bq")]
    Blockquote {
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
    },
    #[serde(rename = "ul")]
    BulletList {
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
    },
    #[serde(rename = "ol")]
    OrderedList {
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
    },
    #[serde(rename = "li")]
    ListItem {
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
    },
    #[serde(rename = "tb")]
    Table {
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
    },
    #[serde(rename = "tr")]
    TableRow {
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
    },
    #[serde(rename = "td")]
    TableCell {
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
        #[serde(rename = "a", default, skip_serializing_if = "Map::is_empty")]
        attrs: Map<String, Value>,
    },
    #[serde(rename = "th")]
    TableHeader {
        #[serde(rename = "c", default)]
        children: Vec<CompactNode>,
        #[serde(rename = "a", default, skip_serializing_if = "Map::is_empty")]
        attrs: Map<String, Value>,
    },
    #[serde(rename = "i")]
    Image {
        /// Shrunk media path or the untouched URL.
        #[serde(rename = "s", default)]
        src: String,
        #[serde(rename = "at", default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(rename = "tt", default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(rename = "w", default, skip_serializing_if = "Option::is_none")]
        width: Option<Value>,
        #[serde(rename = "ht", default, skip_serializing_if = "Option::is_none")]
        height: Option<Value>,
        #[serde(rename = "al", default, skip_serializing_if = "Option::is_none")]
        align: Option<String>,
    },
    #[serde(rename = "cb")]
    CodeBlock {
        #[serde(rename = "lang", default = "default_language")]
        language: String,
        #[serde(rename = "x", default)]
        text: String,
    },
    /// Shared by every video embed kind.
    #[serde(rename = "yt")]
    Video {
        #[serde(rename = "vid", default)]
        video_id: String,
        #[serde(rename = "st", default, skip_serializing_if = "Option::is_none")]
        start_time: Option<u64>,
    },
    #[serde(rename = "hr")]
    HorizontalRule,
    #[serde(rename = "br")]
    HardBreak,
}

/// Node whose type code has no dedicated compact shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactCustom {
    #[serde(rename = "t")]
    pub kind: String,
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CompactNode>>,
    #[serde(rename = "a", default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompactMark {
    /// Type code of a mark without attributes.
    Simple(String),
    Tagged(TaggedMark),
    Custom(CompactCustomMark),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum TaggedMark {
    #[serde(rename = "ln", alias = "link")]
    Link {
        #[serde(rename = "h", default)]
        href: String,
        #[serde(rename = "tg", default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactCustomMark {
    #[serde(rename = "t")]
    pub kind: String,
    #[serde(rename = "a", default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

fn default_level() -> u8 {
    1
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
