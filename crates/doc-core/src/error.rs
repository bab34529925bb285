use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unexpected document shape: {0}")]
    Shape(#[source] serde_json::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
