//! Crew progress notification port
//!
//! Defines the interface for reporting progress while the crew works on
//! one question.

use docqa_domain::{AgentRole, CrewStage};

/// Callback for progress updates during a crew run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, ...)
pub trait CrewProgressNotifier: Send + Sync {
    /// Called before retrieval starts
    fn on_retrieval_start(&self) {}

    /// Called after retrieval with the number of excerpts found
    fn on_retrieval_complete(&self, _excerpts: usize) {}

    /// Called when a stage starts
    fn on_stage_start(&self, stage: CrewStage, agent: AgentRole);

    /// Called when a stage finishes
    fn on_stage_complete(&self, stage: CrewStage, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoCrewProgress;

impl CrewProgressNotifier for NoCrewProgress {
    fn on_stage_start(&self, _stage: CrewStage, _agent: AgentRole) {}
    fn on_stage_complete(&self, _stage: CrewStage, _success: bool) {}
}
