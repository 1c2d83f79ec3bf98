//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod answer_engine;
pub mod conversation_logger;
pub mod crew_progress;
pub mod embedding;
pub mod knowledge;
pub mod llm_gateway;
pub mod report;
pub mod session_io;
