//! Prompt templates for the crew flow

use crate::crew::CrewTask;
use crate::knowledge::entities::ScoredChunk;

/// Templates for generating the user prompt of each crew task
pub struct PromptTemplate;

impl PromptTemplate {
    /// Numbered excerpt block, one entry per retrieved chunk.
    pub fn excerpts(chunks: &[ScoredChunk]) -> String {
        if chunks.is_empty() {
            return "(no relevant excerpts were found in the documents)".to_string();
        }

        let mut out = String::new();
        for (i, scored) in chunks.iter().enumerate() {
            out.push_str(&format!(
                "[{}] {} (part {})\n{}\n\n",
                i + 1,
                scored.chunk.source,
                scored.chunk.index + 1,
                scored.chunk.text
            ));
        }
        out.trim_end().to_string()
    }

    /// User prompt for one task.
    ///
    /// `context` is the previous task's output, absent for the first task.
    pub fn task_prompt(
        task: &CrewTask,
        question: &str,
        excerpts: &str,
        context: Option<&str>,
    ) -> String {
        let mut prompt = format!(
            "Current Task: {}\n\nQuestion: {}\n\nDocument excerpts:\n{}\n",
            task.description, question, excerpts
        );

        if let Some(context) = context {
            prompt.push_str(&format!(
                "\nContext from the previous task:\n{}\n",
                context.trim()
            ));
        }

        prompt.push_str(&format!(
            "\nThis is the expected criteria for your final answer: {}\n\
             You MUST return the actual complete content as the final answer, not a summary.",
            task.expected_output
        ));

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::CrewStage;
    use crate::knowledge::entities::KnowledgeChunk;

    fn scored(source: &str, index: usize, text: &str) -> ScoredChunk {
        ScoredChunk {
            chunk: KnowledgeChunk {
                source: source.to_string(),
                index,
                text: text.to_string(),
            },
            score: 0.9,
        }
    }

    #[test]
    fn test_excerpts_numbered_with_sources() {
        let block = PromptTemplate::excerpts(&[
            scored("rules.pdf", 0, "Deadline is March 1."),
            scored("faq.pdf", 3, "Late entries are refused."),
        ]);
        assert!(block.starts_with("[1] rules.pdf (part 1)\nDeadline is March 1."));
        assert!(block.contains("[2] faq.pdf (part 4)\nLate entries are refused."));
    }

    #[test]
    fn test_excerpts_empty() {
        assert!(PromptTemplate::excerpts(&[]).contains("no relevant excerpts"));
    }

    #[test]
    fn test_first_task_has_no_context_section() {
        let task = CrewTask::for_stage(CrewStage::Answer);
        let prompt = PromptTemplate::task_prompt(&task, "When?", "[1] x", None);
        assert!(prompt.contains("Question: When?"));
        assert!(!prompt.contains("Context from the previous task"));
        assert!(prompt.contains(task.expected_output));
    }

    #[test]
    fn test_context_included_for_later_tasks() {
        let task = CrewTask::for_stage(CrewStage::Formatting);
        let prompt = PromptTemplate::task_prompt(&task, "When?", "[1] x", Some("  March 1\n"));
        assert!(prompt.contains("Context from the previous task:\nMarch 1\n"));
    }
}
