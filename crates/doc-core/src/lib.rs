pub mod config;
pub mod error;
pub mod node;

pub use config::{CodecOptions, DEFAULT_PROVIDER_ID};
pub use error::{CodecError, Result};
pub use node::{
    CodeBlockAttrs, CustomMark, CustomNode, HeadingAttrs, ImageAttrs, KnownMark, KnownNode,
    LinkAttrs, Mark, Node, VideoAttrs,
};
