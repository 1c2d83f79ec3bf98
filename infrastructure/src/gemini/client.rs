//! Gemini HTTP client

use super::session::GeminiSession;
use super::types::{
    BatchEmbedContentsRequest, BatchEmbedContentsResponse, Content, EmbedContentRequest,
    EmbedContentResponse, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    TaskType,
};
use async_trait::async_trait;
use docqa_application::{
    EmbeddingError, EmbeddingProvider, GatewayError, LlmGateway, LlmSession, RuntimeConfig,
};
use docqa_domain::LlmSettings;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Public Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Maximum response body echoed into error messages
const MAX_ERROR_BODY: usize = 500;

/// Client for the Gemini REST API. Cheap to clone.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    embedding_model: String,
}

impl GeminiClient {
    pub fn new(config: &RuntimeConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("docqa/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: config.api_key().to_string(),
            embedding_model: embedding_model_path(&config.embeddings.model),
        })
    }

    /// Point at a different endpoint (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) async fn generate(
        &self,
        settings: &LlmSettings,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            settings.model_name()
        );
        let request = GenerateContentRequest {
            system_instruction: Content::text(None, system_prompt),
            contents: vec![Content::text(Some("user"), prompt)],
            generation_config: GenerationConfig {
                temperature: settings.temperature,
                max_output_tokens: settings.max_tokens,
            },
        };

        debug!("generateContent: model={}", settings.model_name());
        let response: GenerateContentResponse = self.post_json(&url, &request).await?;

        if let Some(reason) = response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .filter(|r| *r != "STOP")
        {
            warn!("Gemini finished with reason {}", reason);
        }

        response.text().ok_or(GatewayError::EmptyResponse)
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status, &body));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("invalid response body: {}", e)))
    }

    fn embed_request(&self, text: &str, task_type: TaskType) -> EmbedContentRequest {
        EmbedContentRequest {
            model: self.embedding_model.clone(),
            content: Content::text(None, text),
            task_type,
        }
    }
}

#[async_trait]
impl LlmGateway for GeminiClient {
    async fn create_session_with_system_prompt(
        &self,
        settings: &LlmSettings,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(GeminiSession::new(
            self.clone(),
            settings.clone(),
            system_prompt,
        )))
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiClient {
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v1beta/{}:batchEmbedContents", self.base_url, self.embedding_model);
        let request = BatchEmbedContentsRequest {
            requests: texts
                .iter()
                .map(|t| self.embed_request(t, TaskType::RetrievalDocument))
                .collect(),
        };

        let response: BatchEmbedContentsResponse = self
            .post_json(&url, &request)
            .await
            .map_err(|e| EmbeddingError::RequestFailed(e.to_string()))?;

        if response.embeddings.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: response.embeddings.len(),
            });
        }
        Ok(response.embeddings.into_iter().map(|e| e.values).collect())
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let url = format!("{}/v1beta/{}:embedContent", self.base_url, self.embedding_model);
        let request = self.embed_request(text, TaskType::RetrievalQuery);

        let response: EmbedContentResponse = self
            .post_json(&url, &request)
            .await
            .map_err(|e| EmbeddingError::RequestFailed(e.to_string()))?;
        Ok(response.embedding.values)
    }
}

/// `models/`-prefixed embedding model path.
fn embedding_model_path(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}

/// Map a non-success HTTP status to a gateway error.
fn map_status(status: StatusCode, body: &str) -> GatewayError {
    let body: String = body.chars().take(MAX_ERROR_BODY).collect();
    let detail = format!("HTTP {}: {}", status.as_u16(), body.trim());
    match status {
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => {
            GatewayError::Overloaded(detail)
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => GatewayError::Timeout,
        _ => GatewayError::RequestFailed(detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docqa_domain::EmbeddingSettings;

    fn config(model: &str) -> RuntimeConfig {
        RuntimeConfig::new(
            EmbeddingSettings {
                provider: "google-generativeai".to_string(),
                model: model.to_string(),
            },
            LlmSettings::default(),
            "test-key",
        )
    }

    #[test]
    fn test_embedding_model_path() {
        assert_eq!(
            embedding_model_path("models/text-embedding-004"),
            "models/text-embedding-004"
        );
        assert_eq!(embedding_model_path("text-embedding-004"), "models/text-embedding-004");
    }

    #[test]
    fn test_client_normalizes_settings() {
        let client = GeminiClient::new(&config("text-embedding-004"))
            .unwrap()
            .with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.embedding_model, "models/text-embedding-004");
        assert_eq!(client.api_key, "test-key");
    }

    #[tokio::test]
    async fn test_empty_batch_skips_request() {
        // Unroutable base URL: any request would fail.
        let client = GeminiClient::new(&config("models/text-embedding-004"))
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let vectors = client.embed_documents(&[]).await.unwrap();
        assert!(vectors.is_empty());
    }

    #[test]
    fn test_overload_statuses() {
        assert!(map_status(StatusCode::SERVICE_UNAVAILABLE, "overloaded").is_overloaded());
        assert!(map_status(StatusCode::TOO_MANY_REQUESTS, "quota").is_overloaded());
        assert!(matches!(
            map_status(StatusCode::GATEWAY_TIMEOUT, ""),
            GatewayError::Timeout
        ));
    }

    #[test]
    fn test_other_status_keeps_detail() {
        match map_status(StatusCode::BAD_REQUEST, "  API key not valid  ") {
            GatewayError::RequestFailed(detail) => {
                assert_eq!(detail, "HTTP 400: API key not valid")
            }
            other => panic!("unexpected: {}", other),
        }
    }

    #[test]
    fn test_error_body_is_capped() {
        let body = "x".repeat(5000);
        match map_status(StatusCode::INTERNAL_SERVER_ERROR, &body) {
            GatewayError::RequestFailed(detail) => assert!(detail.len() < 600),
            other => panic!("unexpected: {}", other),
        }
    }
}
