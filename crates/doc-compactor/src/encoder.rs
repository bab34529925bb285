//! Tree encoder: long-form document nodes -> compact nodes.

use crate::compact::{
    CompactBlock, CompactCustom, CompactCustomMark, CompactMark, CompactNode, CompactText,
    TaggedMark, DEFAULT_LANGUAGE,
};
use crate::{dictionary, media};
use doc_core::node::{
    CustomNode, ImageAttrs, KnownMark, KnownNode, Mark, Node, VideoAttrs,
};

/// Encode a node and all of its descendants.
pub fn encode_node(node: &Node) -> CompactNode {
    match node {
        Node::Known(known) => encode_known(known),
        Node::Custom(custom) => CompactNode::Custom(encode_custom(custom)),
    }
}

/// Encode a text-bearing sequence (text runs, hard breaks, and anything
/// else embedded between them).
pub fn encode_inline(nodes: &[Node]) -> Vec<CompactNode> {
    nodes.iter().map(encode_inline_node).collect()
}

fn encode_inline_node(node: &Node) -> CompactNode {
    match node {
        Node::Known(KnownNode::Text { text, marks }) => CompactNode::Text(encode_text(text, marks)),
        Node::Known(KnownNode::HardBreak) => CompactNode::Block(CompactBlock::HardBreak),
        other => encode_node(other),
    }
}

fn encode_blocks(nodes: &[Node]) -> Vec<CompactNode> {
    nodes.iter().map(encode_node).collect()
}

fn encode_known(node: &KnownNode) -> CompactNode {
    let block = match node {
        KnownNode::Doc { content } => CompactBlock::Doc {
            children: encode_blocks(content),
        },
        KnownNode::Heading { attrs, content } => CompactBlock::Heading {
            level: attrs.level,
            children: encode_inline(content),
            id: attrs.id.clone(),
        },
        KnownNode::Paragraph { content } => CompactBlock::Paragraph {
            children: encode_inline(content),
        },
        KnownNode::TableCell { attrs, content } => CompactBlock::TableCell {
            children: encode_inline(content),
            attrs: dictionary::encode_attrs(attrs),
        },
        KnownNode::TableHeader { attrs, content } => CompactBlock::TableHeader {
            children: encode_inline(content),
            attrs: dictionary::encode_attrs(attrs),
        },
        KnownNode::BulletList { content } => CompactBlock::BulletList {
            children: encode_blocks(content),
        },
        KnownNode::OrderedList { content } => CompactBlock::OrderedList {
            children: encode_blocks(content),
        },
        KnownNode::ListItem { content } => CompactBlock::ListItem {
            children: encode_blocks(content),
        },
        KnownNode::Table { content } => CompactBlock::Table {
            children: encode_blocks(content),
        },
        KnownNode::TableRow { content } => CompactBlock::TableRow {
            children: encode_blocks(content),
        },
        KnownNode::Blockquote { content } => CompactBlock::Blockquote {
            children: encode_blocks(content),
        },
        KnownNode::Image { attrs } => encode_image(attrs),
        KnownNode::CodeBlock { attrs, content } => CompactBlock::CodeBlock {
            language: attrs
                .language
                .as_deref()
                .filter(|lang| !lang.is_empty())
                .unwrap_or(DEFAULT_LANGUAGE)
                .to_string(),
            text: content.iter().map(Node::text_content).collect(),
        },
        KnownNode::Youtube { attrs } | KnownNode::Video { attrs } => encode_video(attrs),
        KnownNode::HorizontalRule => CompactBlock::HorizontalRule,
        KnownNode::HardBreak => CompactBlock::HardBreak,
        // Text outside an inline container.
        KnownNode::Text { text, marks } => return CompactNode::Text(encode_text(text, marks)),
    };
    CompactNode::Block(block)
}

fn encode_image(attrs: &ImageAttrs) -> CompactBlock {
    CompactBlock::Image {
        src: media::shrink_media_path(&attrs.src).to_string(),
        alt: attrs.alt.clone(),
        title: attrs.title.clone(),
        width: attrs.width.clone(),
        height: attrs.height.clone(),
        align: attrs.align.clone(),
    }
}

fn encode_video(attrs: &VideoAttrs) -> CompactBlock {
    let src = attrs.src.as_deref().unwrap_or_default();
    let video_id = attrs
        .video_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .or_else(|| media::extract_video_id(src))
        .unwrap_or_default();
    let start_time = attrs
        .start_time
        .filter(|&secs| secs > 0)
        .or_else(|| media::extract_start_offset(src))
        .filter(|&secs| secs > 0);

    CompactBlock::Video {
        video_id: video_id.to_string(),
        start_time,
    }
}

fn encode_custom(node: &CustomNode) -> CompactCustom {
    // A known type name here means the node did not fit its known shape;
    // keep the long name so the decoder restores it generically.
    let kind = if KnownNode::is_known_type(&node.kind) {
        node.kind.clone()
    } else {
        dictionary::encode_type(&node.kind).to_string()
    };

    CompactCustom {
        kind,
        children: node.content.as_deref().map(encode_inline),
        attrs: node
            .attrs
            .as_ref()
            .filter(|attrs| !attrs.is_empty())
            .map(dictionary::encode_attrs),
    }
}

fn encode_text(text: &str, marks: &[Mark]) -> CompactText {
    CompactText {
        text: text.to_string(),
        marks: marks.iter().map(encode_mark).collect(),
    }
}

fn encode_mark(mark: &Mark) -> CompactMark {
    match mark {
        Mark::Known(KnownMark::Bold) => simple_mark("bold"),
        Mark::Known(KnownMark::Italic) => simple_mark("italic"),
        Mark::Known(KnownMark::Link { attrs }) => CompactMark::Tagged(TaggedMark::Link {
            href: attrs.href.clone(),
            target: attrs.target.clone(),
        }),
        Mark::Custom(custom) => match &custom.attrs {
            Some(attrs) if !attrs.is_empty() => CompactMark::Custom(CompactCustomMark {
                kind: dictionary::encode_type(&custom.kind).to_string(),
                attrs: Some(dictionary::encode_attrs(attrs)),
            }),
            _ => simple_mark(&custom.kind),
        },
    }
}

fn simple_mark(kind: &str) -> CompactMark {
    CompactMark::Simple(dictionary::encode_type(kind).to_string())
}
