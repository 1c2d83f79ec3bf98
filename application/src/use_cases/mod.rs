//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_report;
pub mod knowledge_base;
pub mod run_crew;
pub mod run_session;
