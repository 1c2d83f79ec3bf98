//! QaRecord entity

use super::fence::strip_code_fence;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Message shown in place of an answer when the crew fails.
pub const ERROR_MESSAGE: &str =
    "**Error:** The AI model was overloaded or an error occurred. Please try again later.";

/// One markdown unit of session history.
///
/// Either a successful crew answer (normally a table) or a synthesized
/// two-column error table. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    markdown: String,
    failed: bool,
}

impl QaRecord {
    /// Record a successful answer, stripping a wrapping code fence.
    pub fn from_answer(raw: &str) -> Self {
        Self {
            markdown: strip_code_fence(raw),
            failed: false,
        }
    }

    /// Record a failed question as a `| Question | Answer |` table.
    pub fn from_error(question: &Question) -> Self {
        Self {
            markdown: format!(
                "| Question | Answer |\n|---|---|\n| {} | {} |",
                question.content(),
                ERROR_MESSAGE
            ),
            failed: true,
        }
    }

    /// The markdown fragment.
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// Whether this record was synthesized from a failure.
    pub fn is_error(&self) -> bool {
        self.failed
    }
}

impl std::fmt::Display for QaRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.markdown)
    }
}
