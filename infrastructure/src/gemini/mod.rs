//! Google Gemini REST adapter.
//!
//! [`GeminiClient`] implements both the [`LlmGateway`] port (chat via
//! `generateContent`) and the [`EmbeddingProvider`] port (`embedContent`,
//! `batchEmbedContents`).
//!
//! [`LlmGateway`]: docqa_application::LlmGateway
//! [`EmbeddingProvider`]: docqa_application::EmbeddingProvider

mod client;
mod session;
mod types;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
pub use session::GeminiSession;
