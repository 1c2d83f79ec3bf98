//! Crew tasks

use super::role::AgentRole;
use serde::{Deserialize, Serialize};

/// Position of a task in the sequential pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewStage {
    Answer,
    Validation,
    Formatting,
}

impl CrewStage {
    /// All stages in execution order.
    pub const SEQUENCE: [CrewStage; 3] =
        [CrewStage::Answer, CrewStage::Validation, CrewStage::Formatting];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrewStage::Answer => "qa_task",
            CrewStage::Validation => "validation_task",
            CrewStage::Formatting => "formatting_task",
        }
    }

    /// 1-based position, for progress display.
    pub fn ordinal(&self) -> usize {
        match self {
            CrewStage::Answer => 1,
            CrewStage::Validation => 2,
            CrewStage::Formatting => 3,
        }
    }
}

impl std::fmt::Display for CrewStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unit of work assigned to one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewTask {
    pub stage: CrewStage,
    pub agent: AgentRole,
    pub description: &'static str,
    pub expected_output: &'static str,
}

impl CrewTask {
    pub fn for_stage(stage: CrewStage) -> Self {
        match stage {
            CrewStage::Answer => Self {
                stage,
                agent: AgentRole::QaAgent,
                description: "Answer the question below using only the document excerpts \
                    provided. Quote exact figures, dates and names where they appear. If the \
                    excerpts do not contain the answer, state that the documents do not say.",
                expected_output: "A concise, factual answer grounded in the excerpts, naming \
                    the source document(s) it relies on.",
            },
            CrewStage::Validation => Self {
                stage,
                agent: AgentRole::ValidatorAgent,
                description: "Review the draft answer in the context below against the \
                    document excerpts. Remove or correct any claim the excerpts do not support \
                    and keep everything that is supported.",
                expected_output: "The corrected final answer text only, without review notes.",
            },
            CrewStage::Formatting => Self {
                stage,
                agent: AgentRole::FormatterAgent,
                description: "Format the validated answer in the context below as a markdown \
                    table with exactly two columns, `Question` and `Answer`, and one row for \
                    the question.",
                expected_output: "A markdown table starting with `| Question | Answer |` and \
                    nothing else: no code fences, no commentary.",
            },
        }
    }

    /// The full pipeline, in order.
    pub fn pipeline() -> Vec<CrewTask> {
        CrewStage::SEQUENCE.iter().map(|s| Self::for_stage(*s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order_and_agents() {
        let pipeline = CrewTask::pipeline();
        let pairs: Vec<_> = pipeline.iter().map(|t| (t.stage, t.agent)).collect();
        assert_eq!(
            pairs,
            vec![
                (CrewStage::Answer, AgentRole::QaAgent),
                (CrewStage::Validation, AgentRole::ValidatorAgent),
                (CrewStage::Formatting, AgentRole::FormatterAgent),
            ]
        );
    }

    #[test]
    fn test_stage_ordinals() {
        let ordinals: Vec<_> = CrewStage::SEQUENCE.iter().map(|s| s.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
    }
}
