//! Doc Compactor — compact storage form for rich-text document trees.
//!
//! Components:
//! 1. Dictionaries — long key/type names <-> short codes
//! 2. Media heuristics — image-host path shrinking, video id extraction
//! 3. Encoder — document tree -> compact tree
//! 4. Decoder — compact tree -> document tree
//! 5. Pipeline — fail-soft JSON text facade with size statistics

pub mod compact;
pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod media;
pub mod pipeline;

pub use doc_core::{CodecError, CodecOptions, Node};
pub use pipeline::{
    compress, compress_with_stats, decompress, CompressionResult, Content, DocumentCodec, Outcome,
};
