use serde::{Deserialize, Serialize};

/// Media provider identifier used when none is configured.
pub const DEFAULT_PROVIDER_ID: &str = "default";

/// Caller-supplied codec options, usually sourced from deployment config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecOptions {
    /// Media host account used to rebuild absolute image URLs.
    pub provider_id: Option<String>,
}

impl CodecOptions {
    pub fn with_provider(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: Some(provider_id.into()),
        }
    }

    /// Effective provider identifier; empty values fall back to the default.
    pub fn provider_id(&self) -> &str {
        self.provider_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_PROVIDER_ID)
    }
}
