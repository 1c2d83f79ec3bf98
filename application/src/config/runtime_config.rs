//! Runtime configuration.
//!
//! [`RuntimeConfig`] is built once by the infrastructure config loader and
//! then shared read-only. Nothing below the binary reads the environment.

use docqa_domain::{EmbeddingSettings, LlmSettings};

/// Resolved configuration for one process run.
#[derive(Clone)]
pub struct RuntimeConfig {
    pub embeddings: EmbeddingSettings,
    pub llm: LlmSettings,
    api_key: String,
}

impl RuntimeConfig {
    pub fn new(embeddings: EmbeddingSettings, llm: LlmSettings, api_key: impl Into<String>) -> Self {
        Self {
            embeddings,
            llm,
            api_key: api_key.into(),
        }
    }

    /// API credential for the model provider.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Keep the credential out of debug output and logs.
impl std::fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("embeddings", &self.embeddings)
            .field("llm", &self.llm)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = RuntimeConfig::new(
            EmbeddingSettings::default(),
            LlmSettings::default(),
            "secret-key",
        );
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
        assert_eq!(config.api_key(), "secret-key");
    }
}
