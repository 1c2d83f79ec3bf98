//! Raw configuration data and its resolution into [`RuntimeConfig`]
//!
//! Field names double as lower-cased environment variable names, so
//! `LLM_MODEL` lands in [`FileConfig::llm_model`].

use docqa_application::RuntimeConfig;
use docqa_domain::{EmbeddingSettings, LlmSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Embedding provider identifiers served by the Gemini adapter.
pub const SUPPORTED_EMBEDDING_PROVIDERS: &[&str] = &["google-generativeai", "google", "gemini"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No GEMINI_API_KEY / GOOGLE_API_KEY found for embeddings.")]
    MissingCredential,

    #[error("Unsupported embeddings provider '{0}' (supported: google-generativeai)")]
    UnsupportedProvider(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Complete raw configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub embeddings_provider: String,
    pub embeddings_model: String,
    /// Also filled from `GOOGLE_API_KEY`; `GEMINI_API_KEY` wins.
    pub gemini_api_key: Option<String>,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
}

impl Default for FileConfig {
    fn default() -> Self {
        let embeddings = EmbeddingSettings::default();
        let llm = LlmSettings::default();
        Self {
            embeddings_provider: embeddings.provider,
            embeddings_model: embeddings.model,
            gemini_api_key: None,
            llm_model: llm.model,
            llm_temperature: llm.temperature,
            llm_max_tokens: llm.max_tokens,
        }
    }
}

impl FileConfig {
    /// Validate and convert into the immutable runtime configuration.
    pub fn resolve(self) -> Result<RuntimeConfig, ConfigError> {
        let api_key = self
            .gemini_api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingCredential)?;

        let provider = self.embeddings_provider.trim().to_lowercase();
        if !SUPPORTED_EMBEDDING_PROVIDERS.contains(&provider.as_str()) {
            return Err(ConfigError::UnsupportedProvider(self.embeddings_provider));
        }

        if self.embeddings_model.trim().is_empty() {
            return Err(ConfigError::Invalid("embeddings model is empty".to_string()));
        }
        if self.llm_model.trim().is_empty() {
            return Err(ConfigError::Invalid("LLM model is empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.llm_temperature) {
            return Err(ConfigError::Invalid(format!(
                "LLM temperature {} is outside 0.0..=2.0",
                self.llm_temperature
            )));
        }
        if self.llm_max_tokens == 0 {
            return Err(ConfigError::Invalid("LLM max tokens must be positive".to_string()));
        }

        Ok(RuntimeConfig::new(
            EmbeddingSettings {
                provider,
                model: self.embeddings_model.trim().to_string(),
            },
            LlmSettings {
                model: self.llm_model.trim().to_string(),
                temperature: self.llm_temperature,
                max_tokens: self.llm_max_tokens,
            },
            api_key,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key() -> FileConfig {
        FileConfig {
            gemini_api_key: Some("key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
llm_model = "gemini/gemini-1.5-pro"
llm_max_tokens = 1024
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm_model, "gemini/gemini-1.5-pro");
        assert_eq!(config.llm_max_tokens, 1024);
        // Defaults should apply
        assert_eq!(config.embeddings_model, "models/text-embedding-004");
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_resolve_defaults() {
        let runtime = with_key().resolve().unwrap();
        assert_eq!(runtime.api_key(), "key");
        assert_eq!(runtime.llm, LlmSettings::default());
        assert_eq!(runtime.embeddings, EmbeddingSettings::default());
    }

    #[test]
    fn test_missing_or_blank_credential() {
        assert!(matches!(
            FileConfig::default().resolve(),
            Err(ConfigError::MissingCredential)
        ));
        let blank = FileConfig {
            gemini_api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(blank.resolve(), Err(ConfigError::MissingCredential)));
    }

    #[test]
    fn test_unsupported_provider() {
        let config = FileConfig {
            embeddings_provider: "openai".to_string(),
            ..with_key()
        };
        match config.resolve() {
            Err(ConfigError::UnsupportedProvider(p)) => assert_eq!(p, "openai"),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_invalid_generation_settings() {
        let hot = FileConfig {
            llm_temperature: 3.5,
            ..with_key()
        };
        assert!(matches!(hot.resolve(), Err(ConfigError::Invalid(_))));

        let mute = FileConfig {
            llm_max_tokens: 0,
            ..with_key()
        };
        assert!(matches!(mute.resolve(), Err(ConfigError::Invalid(_))));
    }
}
