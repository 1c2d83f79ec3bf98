//! Embedding and chat model settings

use serde::{Deserialize, Serialize};

/// Embeddings backend selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingSettings {
    /// Provider identifier, e.g. `google-generativeai`.
    pub provider: String,
    /// Model identifier, e.g. `models/text-embedding-004`.
    pub model: String,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: "google-generativeai".to_string(),
            model: "models/text-embedding-004".to_string(),
        }
    }
}

/// Chat/completion model settings shared by every crew agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Model identifier, optionally provider-prefixed (`gemini/gemini-2.0-flash`).
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gemini/gemini-2.0-flash".to_string(),
            temperature: 0.1,
            max_tokens: 512,
        }
    }
}

impl LlmSettings {
    /// Model name without a `provider/` prefix.
    pub fn model_name(&self) -> &str {
        match self.model.split_once('/') {
            Some((_, name)) if !name.is_empty() => name,
            _ => &self.model,
        }
    }
}
