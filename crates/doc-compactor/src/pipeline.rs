//! Public facade: compress / decompress / compress with statistics.
//!
//! Nothing here returns an error to the caller. Failures are reported as
//! [`Outcome::Degraded`] carrying the fallback value, so strict callers can
//! opt in with [`Outcome::into_result`].

use crate::compact::CompactNode;
use crate::{decoder, encoder};
use doc_core::{CodecError, CodecOptions, Node, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Result of a fail-soft operation.
#[derive(Debug)]
pub enum Outcome<T> {
    Exact(T),
    /// The operation failed; `value` is the fallback.
    Degraded { value: T, error: CodecError },
}

impl<T> Outcome<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Exact(value) | Self::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Exact(value) | Self::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn error(&self) -> Option<&CodecError> {
        match self {
            Self::Exact(_) => None,
            Self::Degraded { error, .. } => Some(error),
        }
    }

    /// Treat a degraded outcome as an error.
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Exact(value) => Ok(value),
            Self::Degraded { error, .. } => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Exact(value) => Outcome::Exact(f(value)),
            Self::Degraded { value, error } => Outcome::Degraded {
                value: f(value),
                error,
            },
        }
    }
}

/// Input accepted by [`compress`]: JSON text or an already-parsed tree.
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Text(&'a str),
    Value(&'a Value),
    Tree(&'a Node),
}

impl<'a> From<&'a str> for Content<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Content<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a Value> for Content<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a Node> for Content<'a> {
    fn from(node: &'a Node) -> Self {
        Self::Tree(node)
    }
}

impl<'a> Content<'a> {
    fn encode(&self) -> Result<CompactNode> {
        match self {
            Self::Tree(node) => Ok(encoder::encode_node(node)),
            Self::Value(value) => {
                let node = Node::deserialize(*value).map_err(CodecError::Shape)?;
                Ok(encoder::encode_node(&node))
            }
            Self::Text(text) => {
                let value: Value = serde_json::from_str(text)?;
                let node = Node::deserialize(&value).map_err(CodecError::Shape)?;
                Ok(encoder::encode_node(&node))
            }
        }
    }

    /// The content as JSON text, unchanged if it already is text.
    fn original_json(&self) -> Cow<'a, str> {
        match *self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Value(value) => Cow::Owned(value.to_string()),
            Self::Tree(node) => Cow::Owned(serde_json::to_string(node).unwrap_or_default()),
        }
    }
}

/// Size statistics for one compression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionResult {
    #[serde(rename = "compressed")]
    pub output: String,
    /// UTF-8 bytes of the input's JSON text.
    #[serde(rename = "originalSize")]
    pub original_len: usize,
    #[serde(rename = "compressedSize")]
    pub compressed_len: usize,
    /// Bytes saved; negative if the compact form grew.
    pub reduction: i64,
    /// Rounded to two decimals.
    #[serde(rename = "reductionPercent")]
    pub reduction_pct: f64,
}

impl CompressionResult {
    fn new(output: String, original_len: usize) -> Self {
        let compressed_len = output.len();
        let reduction = original_len as i64 - compressed_len as i64;
        let reduction_pct = if original_len > 0 {
            round2(reduction as f64 / original_len as f64 * 100.0)
        } else {
            0.0
        };
        Self {
            output,
            original_len,
            compressed_len,
            reduction,
            reduction_pct,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.compressed_len as f64 / self.original_len as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Codec bound to a set of options.
#[derive(Debug, Clone, Default)]
pub struct DocumentCodec {
    pub options: CodecOptions,
}

impl DocumentCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn with_provider(provider_id: impl Into<String>) -> Self {
        Self::new(CodecOptions::with_provider(provider_id))
    }

    pub fn compress<'a>(&self, content: impl Into<Content<'a>>) -> Outcome<String> {
        compress(content)
    }

    pub fn decompress(&self, compact: &str) -> Outcome<Node> {
        decompress(compact, &self.options)
    }

    pub fn compress_with_stats<'a>(
        &self,
        content: impl Into<Content<'a>>,
    ) -> Outcome<CompressionResult> {
        compress_with_stats(content)
    }
}

/// Compress a document into compact JSON text.
///
/// On failure the original content is passed through as JSON text.
pub fn compress<'a>(content: impl Into<Content<'a>>) -> Outcome<String> {
    let content = content.into();
    let encoded = content
        .encode()
        .and_then(|compact| serde_json::to_string(&compact).map_err(CodecError::Serialize));

    match encoded {
        Ok(output) => Outcome::Exact(output),
        Err(error) => {
            warn!(%error, "document compression failed, passing content through");
            Outcome::Degraded {
                value: content.original_json().into_owned(),
                error,
            }
        }
    }
}

/// Expand compact JSON text back into a document tree.
///
/// Text that is not in compact form is read as a long-form document; if
/// that fails too, an empty document is returned.
pub fn decompress(compact: &str, options: &CodecOptions) -> Outcome<Node> {
    match decode_compact(compact, options) {
        Ok(node) => Outcome::Exact(node),
        Err(error) => {
            warn!(%error, "document decompression failed, falling back to raw parse");
            let value = serde_json::from_str::<Node>(compact).unwrap_or_else(|_| Node::empty_doc());
            Outcome::Degraded { value, error }
        }
    }
}

fn decode_compact(compact: &str, options: &CodecOptions) -> Result<Node> {
    let value: Value = serde_json::from_str(compact)?;
    let node = CompactNode::deserialize(&value).map_err(CodecError::Shape)?;
    Ok(decoder::decode_node(node, options))
}

/// Compress and report size statistics.
pub fn compress_with_stats<'a>(content: impl Into<Content<'a>>) -> Outcome<CompressionResult> {
    let content = content.into();
    let original_len = content.original_json().len();
    let outcome = compress(content).map(|output| CompressionResult::new(output, original_len));
    let stats = outcome.value();
    debug!(
        original_len = stats.original_len,
        compressed_len = stats.compressed_len,
        reduction_pct = stats.reduction_pct,
        "document compressed"
    );
    outcome
}
