//! Crew subdomain: the three agents and their sequential tasks.
//!
//! ```text
//! question + excerpts ──▶ qa_task ──▶ validation_task ──▶ formatting_task ──▶ table
//!                        (QaAgent)   (ValidatorAgent)    (FormatterAgent)
//! ```
//!
//! Each task receives the previous task's output as context.

mod role;
mod task;

pub use role::AgentRole;
pub use task::{CrewStage, CrewTask};
