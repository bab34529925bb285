//! Tree decoder: compact nodes -> long-form document nodes.

use crate::compact::{
    CompactBlock, CompactCustom, CompactCustomMark, CompactMark, CompactNode, CompactText,
    TaggedMark,
};
use crate::{dictionary, media};
use doc_core::node::{
    CodeBlockAttrs, CustomMark, CustomNode, HeadingAttrs, ImageAttrs, KnownMark, KnownNode, Mark,
    Node, VideoAttrs,
};
use doc_core::CodecOptions;

/// Decode a compact node and all of its descendants.
pub fn decode_node(node: CompactNode, options: &CodecOptions) -> Node {
    match node {
        CompactNode::Bare(text) => Node::text(text),
        CompactNode::Text(text) => decode_text(text),
        CompactNode::Block(block) => Node::Known(decode_block(block, options)),
        CompactNode::Custom(custom) => Node::Custom(decode_custom(custom, options)),
    }
}

/// Decode a text-bearing sequence.
pub fn decode_inline(nodes: Vec<CompactNode>, options: &CodecOptions) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|node| match node {
            CompactNode::Bare(text) => Node::text(text),
            CompactNode::Text(text) => decode_text(text),
            CompactNode::Block(CompactBlock::HardBreak) => Node::Known(KnownNode::HardBreak),
            other => decode_node(other, options),
        })
        .collect()
}

fn decode_blocks(nodes: Vec<CompactNode>, options: &CodecOptions) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|node| decode_node(node, options))
        .collect()
}

fn decode_block(block: CompactBlock, options: &CodecOptions) -> KnownNode {
    match block {
        CompactBlock::Doc { children } => KnownNode::Doc {
            content: decode_blocks(children, options),
        },
        CompactBlock::Heading {
            level,
            children,
            id,
        } => KnownNode::Heading {
            attrs: HeadingAttrs { level, id },
            content: decode_inline(children, options),
        },
        CompactBlock::Paragraph { children } => KnownNode::Paragraph {
            content: decode_inline(children, options),
        },
        CompactBlock::TableCell { children, attrs } => KnownNode::TableCell {
            attrs: dictionary::decode_attrs(&attrs),
            content: decode_inline(children, options),
        },
        CompactBlock::TableHeader { children, attrs } => KnownNode::TableHeader {
            attrs: dictionary::decode_attrs(&attrs),
            content: decode_inline(children, options),
        },
        CompactBlock::BulletList { children } => KnownNode::BulletList {
            content: decode_blocks(children, options),
        },
        CompactBlock::OrderedList { children } => KnownNode::OrderedList {
            content: decode_blocks(children, options),
        },
        CompactBlock::ListItem { children } => KnownNode::ListItem {
            content: decode_blocks(children, options),
        },
        CompactBlock::Table { children } => KnownNode::Table {
            content: decode_blocks(children, options),
        },
        CompactBlock::TableRow { children } => KnownNode::TableRow {
            content: decode_blocks(children, options),
        },
        CompactBlock::Blockquote { children } => KnownNode::Blockquote {
            content: decode_blocks(children, options),
        },
        CompactBlock::Image {
            src,
            alt,
            title,
            width,
            height,
            align,
        } => KnownNode::Image {
            attrs: ImageAttrs {
                src: media::restore_media_url(&src, options.provider_id()),
                alt,
                title,
                width,
                height,
                align,
            },
        },
        CompactBlock::CodeBlock { language, text } => KnownNode::CodeBlock {
            attrs: CodeBlockAttrs {
                language: Some(language),
            },
            // Empty text nodes are not valid in the long form.
            content: if text.is_empty() {
                Vec::new()
            } else {
                vec![Node::text(text)]
            },
        },
        CompactBlock::Video {
            video_id,
            start_time,
        } => decode_video(video_id, start_time),
        CompactBlock::HorizontalRule => KnownNode::HorizontalRule,
        CompactBlock::HardBreak => KnownNode::HardBreak,
    }
}

fn decode_video(video_id: String, start_time: Option<u64>) -> KnownNode {
    let start_time = start_time.filter(|&secs| secs > 0);
    let attrs = if video_id.is_empty() {
        VideoAttrs {
            start_time,
            ..VideoAttrs::default()
        }
    } else {
        VideoAttrs {
            src: Some(media::build_video_url(&video_id, start_time)),
            video_id: Some(video_id),
            start_time,
        }
    };
    KnownNode::Youtube { attrs }
}

fn decode_custom(node: CompactCustom, options: &CodecOptions) -> CustomNode {
    CustomNode {
        kind: dictionary::decode_type(&node.kind).to_string(),
        content: node
            .children
            .map(|children| decode_inline(children, options)),
        attrs: node.attrs.as_ref().map(dictionary::decode_attrs),
    }
}

fn decode_text(text: CompactText) -> Node {
    Node::text_with_marks(text.text, text.marks.into_iter().map(decode_mark).collect())
}

fn decode_mark(mark: CompactMark) -> Mark {
    match mark {
        CompactMark::Simple(code) => simple_mark(&code),
        CompactMark::Tagged(TaggedMark::Link { href, target }) => Mark::link(href, target),
        CompactMark::Custom(CompactCustomMark { kind, attrs }) => match attrs {
            Some(attrs) => Mark::Custom(CustomMark {
                kind: dictionary::decode_type(&kind).to_string(),
                attrs: Some(dictionary::decode_attrs(&attrs)),
            }),
            None => simple_mark(&kind),
        },
    }
}

fn simple_mark(code: &str) -> Mark {
    match dictionary::decode_type(code) {
        "bold" => Mark::Known(KnownMark::Bold),
        "italic" => Mark::Known(KnownMark::Italic),
        kind => Mark::Custom(CustomMark {
            kind: kind.to_string(),
            attrs: None,
        }),
    }
}
