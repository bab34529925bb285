//! Rich-text document tree.
//!
//! Known node kinds form a closed enum tagged on `type`; anything else is
//! kept as a [`CustomNode`] so documents produced by newer editors survive
//! a trip through the codec.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Type names of every [`KnownNode`] variant.
pub const KNOWN_TYPES: &[&str] = &[
    "doc",
    "paragraph",
    "heading",
    "blockquote",
    "bulletList",
    "orderedList",
    "listItem",
    "table",
    "tableRow",
    "tableCell",
    "tableHeader",
    "image",
    "horizontalRule",
    "hardBreak",
    "youtube",
    "video",
    "codeBlock",
    "text",
];

/// A document node: either a kind from the fixed taxonomy or a passthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Known(KnownNode),
    Custom(CustomNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum KnownNode {
    Doc {
        #[serde(default)]
        content: Vec<Node>,
    },
    Paragraph {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    Heading {
        #[serde(default)]
        attrs: HeadingAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    Blockquote {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    BulletList {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    OrderedList {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    ListItem {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    Table {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    TableRow {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    TableCell {
        /// colspan / rowspan / colwidth, kept as-is.
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        attrs: Map<String, Value>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    TableHeader {
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        attrs: Map<String, Value>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    Image {
        #[serde(default)]
        attrs: ImageAttrs,
    },
    HorizontalRule,
    HardBreak,
    Youtube {
        #[serde(default)]
        attrs: VideoAttrs,
    },
    Video {
        #[serde(default)]
        attrs: VideoAttrs,
    },
    CodeBlock {
        #[serde(default)]
        attrs: CodeBlockAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
}

impl KnownNode {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Doc { .. } => "doc",
            Self::Paragraph { .. } => "paragraph",
            Self::Heading { .. } => "heading",
            Self::Blockquote { .. } => "blockquote",
            Self::BulletList { .. } => "bulletList",
            Self::OrderedList { .. } => "orderedList",
            Self::ListItem { .. } => "listItem",
            Self::Table { .. } => "table",
            Self::TableRow { .. } => "tableRow",
            Self::TableCell { .. } => "tableCell",
            Self::TableHeader { .. } => "tableHeader",
            Self::Image { .. } => "image",
            Self::HorizontalRule => "horizontalRule",
            Self::HardBreak => "hardBreak",
            Self::Youtube { .. } => "youtube",
            Self::Video { .. } => "video",
            Self::CodeBlock { .. } => "codeBlock",
            Self::Text { .. } => "text",
        }
    }

    /// Whether `name` is the type tag of a known node kind.
    pub fn is_known_type(name: &str) -> bool {
        KNOWN_TYPES.contains(&name)
    }
}

/// Node of a type outside the fixed taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

fn default_level() -> u8 {
    1
}

impl Default for HeadingAttrs {
    fn default() -> Self {
        Self {
            level: default_level(),
            id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAttrs {
    #[serde(default)]
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Pixel count or CSS length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBlockAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// Offset in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
}

/// Inline formatting attached to a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mark {
    Known(KnownMark),
    Custom(CustomMark),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum KnownMark {
    Bold,
    Italic,
    Link {
        #[serde(default)]
        attrs: LinkAttrs,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkAttrs {
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

impl Mark {
    pub fn bold() -> Self {
        Self::Known(KnownMark::Bold)
    }

    pub fn italic() -> Self {
        Self::Known(KnownMark::Italic)
    }

    pub fn link(href: impl Into<String>, target: Option<String>) -> Self {
        Self::Known(KnownMark::Link {
            attrs: LinkAttrs {
                href: href.into(),
                target,
            },
        })
    }
}

impl Node {
    /// Root with no children; the last-resort decode result.
    pub fn empty_doc() -> Self {
        Self::doc(Vec::new())
    }

    pub fn doc(content: Vec<Node>) -> Self {
        Self::Known(KnownNode::Doc { content })
    }

    pub fn paragraph(content: Vec<Node>) -> Self {
        Self::Known(KnownNode::Paragraph { content })
    }

    pub fn heading(level: u8, content: Vec<Node>) -> Self {
        Self::Known(KnownNode::Heading {
            attrs: HeadingAttrs { level, id: None },
            content,
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::text_with_marks(text, Vec::new())
    }

    pub fn text_with_marks(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self::Known(KnownNode::Text {
            text: text.into(),
            marks,
        })
    }

    /// The `type` tag as it appears in the long form.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Known(known) => known.type_name(),
            Self::Custom(custom) => &custom.kind,
        }
    }

    /// Child nodes; empty for leaves.
    pub fn content(&self) -> &[Node] {
        match self {
            Self::Known(known) => match known {
                KnownNode::Doc { content }
                | KnownNode::Paragraph { content }
                | KnownNode::Heading { content, .. }
                | KnownNode::Blockquote { content }
                | KnownNode::BulletList { content }
                | KnownNode::OrderedList { content }
                | KnownNode::ListItem { content }
                | KnownNode::Table { content }
                | KnownNode::TableRow { content }
                | KnownNode::TableCell { content, .. }
                | KnownNode::TableHeader { content, .. }
                | KnownNode::CodeBlock { content, .. } => content,
                KnownNode::Image { .. }
                | KnownNode::HorizontalRule
                | KnownNode::HardBreak
                | KnownNode::Youtube { .. }
                | KnownNode::Video { .. }
                | KnownNode::Text { .. } => &[],
            },
            Self::Custom(custom) => custom.content.as_deref().unwrap_or(&[]),
        }
    }

    /// All descendant text concatenated in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Self::Known(KnownNode::Text { text, .. }) = self {
            out.push_str(text);
            return;
        }
        for child in self.content() {
            child.collect_text(out);
        }
    }
}

impl From<KnownNode> for Node {
    fn from(node: KnownNode) -> Self {
        Self::Known(node)
    }
}

impl From<CustomNode> for Node {
    fn from(node: CustomNode) -> Self {
        Self::Custom(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_heading() {
        let node: Node = serde_json::from_value(json!({
            "type": "heading",
            "attrs": { "level": 2 },
            "content": [{ "type": "text", "text": "Hi" }]
        }))
        .unwrap();
        assert_eq!(node, Node::heading(2, vec![Node::text("Hi")]));
    }

    #[test]
    fn test_unknown_type_is_custom() {
        let node: Node = serde_json::from_value(json!({
            "type": "mention",
            "attrs": { "id": "42" }
        }))
        .unwrap();
        match node {
            Node::Custom(custom) => {
                assert_eq!(custom.kind, "mention");
                assert!(custom.content.is_none());
                assert_eq!(custom.attrs.unwrap()["id"], "42");
            }
            other => panic!("expected custom node, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_content_defaults_empty() {
        let node: Node = serde_json::from_value(json!({ "type": "paragraph" })).unwrap();
        assert_eq!(node, Node::paragraph(vec![]));
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({ "type": "paragraph" }));
    }

    #[test]
    fn test_empty_doc_keeps_content() {
        let value = serde_json::to_value(Node::empty_doc()).unwrap();
        assert_eq!(value, json!({ "type": "doc", "content": [] }));
    }

    #[test]
    fn test_null_attrs_are_absent() {
        let node: Node = serde_json::from_value(json!({
            "type": "image",
            "attrs": { "src": "a.png", "alt": null, "title": null }
        }))
        .unwrap();
        match node {
            Node::Known(KnownNode::Image { attrs }) => {
                assert_eq!(attrs.src, "a.png");
                assert!(attrs.alt.is_none());
                assert!(attrs.title.is_none());
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_marks() {
        let node: Node = serde_json::from_value(json!({
            "type": "text",
            "text": "x",
            "marks": [
                { "type": "bold" },
                { "type": "link", "attrs": { "href": "https://a.b", "target": "_blank" } },
                { "type": "textStyle", "attrs": { "color": "red" } }
            ]
        }))
        .unwrap();
        let Node::Known(KnownNode::Text { marks, .. }) = node else {
            panic!("expected text");
        };
        assert_eq!(marks[0], Mark::bold());
        assert_eq!(marks[1], Mark::link("https://a.b", Some("_blank".into())));
        assert!(matches!(&marks[2], Mark::Custom(m) if m.kind == "textStyle"));
    }

    #[test]
    fn test_text_content() {
        let node = Node::doc(vec![
            Node::paragraph(vec![Node::text("a"), Node::text("b")]),
            Node::paragraph(vec![Node::text("c")]),
        ]);
        assert_eq!(node.text_content(), "abc");
    }

    #[test]
    fn test_type_names_cover_known_types() {
        assert!(KnownNode::is_known_type("codeBlock"));
        assert!(!KnownNode::is_known_type("mention"));
        assert_eq!(KnownNode::HorizontalRule.type_name(), "horizontalRule");
        assert_eq!(KNOWN_TYPES.len(), 18);
    }
}
