//! Console-facing ports of the session loop

use docqa_domain::{QaRecord, Question};

/// Supplies raw input lines, one per call.
pub trait QuestionSource {
    /// Next line, or `None` on end of input or interrupt.
    fn next_line(&mut self) -> Option<String>;
}

/// Scripted source that replays fixed lines, then reports end of input.
pub struct ScriptedQuestions {
    lines: std::collections::VecDeque<String>,
}

impl ScriptedQuestions {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl QuestionSource for ScriptedQuestions {
    fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Status callbacks emitted by the session loop.
///
/// Implementations live in the presentation layer.
pub trait SessionNotifier: Send + Sync {
    fn on_session_start(&self) {}

    /// About to submit `question` to the answer engine.
    fn on_question_submitted(&self, _question: &Question) {}

    /// Engine answered; `raw` is the text before fence stripping.
    fn on_answer(&self, _question: &Question, _raw: &str, _record: &QaRecord) {}

    /// Engine failed; an error record has been appended.
    fn on_error(&self, _question: &Question, _error: &str) {}

    /// Loop finished with `records` entries.
    fn on_session_end(&self, _records: usize) {}
}

/// No-op notifier for tests and quiet runs
pub struct NoSessionNotifier;

impl SessionNotifier for NoSessionNotifier {}
