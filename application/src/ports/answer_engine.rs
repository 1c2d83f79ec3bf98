//! Answer engine port
//!
//! The single synchronous-from-the-caller entry point the session driver
//! submits each question to.

use super::knowledge::KnowledgeError;
use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use docqa_domain::Question;
use thiserror::Error;

/// Any failure while answering one question.
///
/// The session driver treats every variant the same way: it records an
/// error row and keeps going.
#[derive(Error, Debug)]
pub enum AnswerError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Knowledge retrieval failed: {0}")]
    Retrieval(#[from] KnowledgeError),

    #[error("Crew stage {stage} returned an empty response")]
    EmptyStageOutput { stage: String },
}

/// Answers one question with markdown text.
#[async_trait]
pub trait AnswerEngine: Send + Sync {
    async fn answer(&self, question: &Question) -> Result<String, AnswerError>;
}
