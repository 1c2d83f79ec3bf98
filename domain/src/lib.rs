//! Domain layer for docqa
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A session turns an open-ended stream of console input into an ordered
//! [`SessionHistory`] of [`QaRecord`]s. Every submitted question yields
//! exactly one record, either the (fence-stripped) answer or a fixed error
//! table.
//!
//! ## Knowledge
//!
//! PDF text is split by the [`Chunker`] into overlapping windows and kept
//! in a [`VectorIndex`] for cosine-similarity retrieval.
//!
//! ## Crew
//!
//! Three agents ([`AgentRole`]) run one [`CrewTask`] each, strictly in
//! sequence: answer, validate, format.

pub mod config;
pub mod core;
pub mod crew;
pub mod knowledge;
pub mod prompt;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use config::{EmbeddingSettings, LlmSettings};
pub use core::{error::DomainError, question::Question};
pub use crew::{AgentRole, CrewStage, CrewTask};
pub use knowledge::{
    chunker::{ChunkConfig, Chunker},
    entities::{KnowledgeChunk, KnowledgeDocument, ScoredChunk},
    vector::{VectorIndex, cosine_similarity},
};
pub use prompt::PromptTemplate;
pub use report::{HR_SEPARATOR, REPORT_TITLE, ReportPage, join_fragments};
pub use session::{
    fence::strip_code_fence,
    history::SessionHistory,
    input::{EXIT_TOKENS, SessionInput, is_exit_token},
    record::{ERROR_MESSAGE, QaRecord},
};
