//! LLM Gateway port
//!
//! Defines the interface for communicating with the chat model provider.

use async_trait::async_trait;
use docqa_domain::LlmSettings;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model overloaded or rate limited: {0}")]
    Overloaded(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model returned no content")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,
}

impl GatewayError {
    /// Whether the provider refused for capacity reasons.
    pub fn is_overloaded(&self) -> bool {
        matches!(self, GatewayError::Overloaded(_))
    }
}

/// Gateway for LLM communication
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        settings: &LlmSettings,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Settings this session was opened with
    fn settings(&self) -> &LlmSettings;

    /// Send a message and get a response
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_overloaded() {
        assert!(GatewayError::Overloaded("503".to_string()).is_overloaded());
        assert!(!GatewayError::Timeout.is_overloaded());
    }
}
