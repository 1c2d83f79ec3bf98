//! Gemini chat session

use super::client::GeminiClient;
use async_trait::async_trait;
use docqa_application::{GatewayError, LlmSession};
use docqa_domain::LlmSettings;

/// One agent's conversation: a system prompt plus settings.
///
/// Each `send` is a single stateless `generateContent` call; crew stages
/// pass earlier output explicitly as context.
pub struct GeminiSession {
    client: GeminiClient,
    settings: LlmSettings,
    system_prompt: String,
}

impl GeminiSession {
    pub fn new(client: GeminiClient, settings: LlmSettings, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            settings,
            system_prompt: system_prompt.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn settings(&self) -> &LlmSettings {
        &self.settings
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.client
            .generate(&self.settings, &self.system_prompt, content)
            .await
    }
}
