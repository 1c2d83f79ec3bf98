//! Agent roles

use serde::{Deserialize, Serialize};

/// One of the three agents in the crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    QaAgent,
    ValidatorAgent,
    FormatterAgent,
}

impl AgentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::QaAgent => "qa_agent",
            AgentRole::ValidatorAgent => "validator_agent",
            AgentRole::FormatterAgent => "formatter_agent",
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            AgentRole::QaAgent => "Document Question Answering Specialist",
            AgentRole::ValidatorAgent => "Answer Validation Analyst",
            AgentRole::FormatterAgent => "Report Formatting Specialist",
        }
    }

    pub fn goal(&self) -> &'static str {
        match self {
            AgentRole::QaAgent => {
                "Answer the user's question accurately using only the provided document excerpts."
            }
            AgentRole::ValidatorAgent => {
                "Check the drafted answer against the document excerpts and correct anything unsupported."
            }
            AgentRole::FormatterAgent => {
                "Present the validated answer as a clean two-column markdown table."
            }
        }
    }

    pub fn backstory(&self) -> &'static str {
        match self {
            AgentRole::QaAgent => {
                "You read documents carefully and never invent facts. When the excerpts do not \
                 contain the answer, you say so plainly."
            }
            AgentRole::ValidatorAgent => {
                "You are a meticulous fact checker. You compare every claim with its source and \
                 remove or fix anything the documents do not support."
            }
            AgentRole::FormatterAgent => {
                "You turn validated answers into tidy markdown that renders well in an HTML report. \
                 You output only the table, with no commentary and no code fences."
            }
        }
    }

    /// System prompt built from role, goal and backstory.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are the {}.\n{}\n\nYour personal goal is: {}",
            self.role(),
            self.backstory(),
            self.goal()
        )
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
