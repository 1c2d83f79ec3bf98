//! Application layer for docqa
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{RetrievalParams, RuntimeConfig};
pub use ports::{
    answer_engine::{AnswerEngine, AnswerError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    crew_progress::{CrewProgressNotifier, NoCrewProgress},
    embedding::{EmbeddingError, EmbeddingProvider},
    knowledge::{KnowledgeError, KnowledgeLoaderPort, KnowledgeRetriever},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    report::{MarkdownRenderer, ReportError, ReportSink},
    session_io::{NoSessionNotifier, QuestionSource, ScriptedQuestions, SessionNotifier},
};
pub use use_cases::generate_report::GenerateReportUseCase;
pub use use_cases::knowledge_base::KnowledgeBase;
pub use use_cases::run_crew::KnowledgeCrew;
pub use use_cases::run_session::RunSessionUseCase;
