//! Run Session use case
//!
//! The interactive question loop. Reads one line at a time, submits each
//! question to the [`AnswerEngine`] and folds the outcome into a
//! [`SessionHistory`]. A failed question never ends the session: it
//! becomes an error record and the loop carries on.

use crate::ports::answer_engine::AnswerEngine;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::session_io::{QuestionSource, SessionNotifier};
use docqa_domain::core::string::preview;
use docqa_domain::{QaRecord, Question, SessionHistory, SessionInput};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for running one interactive session.
pub struct RunSessionUseCase {
    engine: Arc<dyn AnswerEngine>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunSessionUseCase {
    pub fn new(engine: Arc<dyn AnswerEngine>) -> Self {
        Self {
            engine,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Run until an exit token, end of input or interrupt.
    pub async fn run(
        &self,
        source: &mut dyn QuestionSource,
        notifier: &dyn SessionNotifier,
    ) -> SessionHistory {
        let mut history = SessionHistory::new();
        notifier.on_session_start();

        while let Some(line) = source.next_line() {
            match SessionInput::parse(&line) {
                SessionInput::Empty => continue,
                SessionInput::Exit => {
                    debug!("Exit token received");
                    break;
                }
                SessionInput::Question(question) => {
                    let record = self.ask(&question, notifier).await;
                    history.push(record);
                }
            }
        }

        info!(
            "Session ended with {} record(s), {} error(s)",
            history.len(),
            history.error_count()
        );
        notifier.on_session_end(history.len());
        history
    }

    /// Submit one question. Always yields exactly one record.
    async fn ask(&self, question: &Question, notifier: &dyn SessionNotifier) -> QaRecord {
        info!("Question: {}", preview(question.content(), 100));
        self.conversation_logger
            .log(ConversationEvent::question(question.content()));
        notifier.on_question_submitted(question);

        match self.engine.answer(question).await {
            Ok(raw) => {
                let record = QaRecord::from_answer(&raw);
                self.conversation_logger
                    .log(ConversationEvent::answer(question.content(), record.markdown()));
                notifier.on_answer(question, &raw, &record);
                record
            }
            Err(e) => {
                warn!("Question failed: {}", e);
                let message = e.to_string();
                self.conversation_logger
                    .log(ConversationEvent::error(question.content(), &message));
                notifier.on_error(question, &message);
                QaRecord::from_error(question)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::answer_engine::AnswerError;
    use crate::ports::llm_gateway::GatewayError;
    use crate::ports::session_io::{NoSessionNotifier, ScriptedQuestions};
    use async_trait::async_trait;
    use docqa_domain::ERROR_MESSAGE;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // === Mock implementations ===

    /// Answers from a fixed table; unknown questions fail as overloaded.
    struct TableEngine {
        answers: HashMap<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl TableEngine {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self {
                answers: pairs
                    .iter()
                    .map(|(q, a)| (q.to_string(), a.to_string()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AnswerEngine for TableEngine {
        async fn answer(&self, question: &Question) -> Result<String, AnswerError> {
            self.calls.lock().unwrap().push(question.content().to_string());
            self.answers
                .get(question.content())
                .cloned()
                .ok_or_else(|| GatewayError::Overloaded("503 Service Unavailable".into()).into())
        }
    }

    #[derive(Default)]
    struct RecordingLogger(Mutex<Vec<&'static str>>);

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.0.lock().unwrap().push(event.event_type);
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(Mutex<Vec<String>>);

    impl SessionNotifier for RecordingNotifier {
        fn on_session_start(&self) {
            self.0.lock().unwrap().push("start".into());
        }
        fn on_question_submitted(&self, question: &Question) {
            self.0.lock().unwrap().push(format!("ask {}", question));
        }
        fn on_answer(&self, _question: &Question, _raw: &str, record: &QaRecord) {
            self.0.lock().unwrap().push(format!("answer {}", record));
        }
        fn on_error(&self, question: &Question, _error: &str) {
            self.0.lock().unwrap().push(format!("error {}", question));
        }
        fn on_session_end(&self, records: usize) {
            self.0.lock().unwrap().push(format!("end {}", records));
        }
    }

    async fn run(engine: Arc<TableEngine>, lines: &[&str]) -> SessionHistory {
        let use_case = RunSessionUseCase::new(engine);
        let mut source = ScriptedQuestions::new(lines.iter().copied());
        use_case.run(&mut source, &NoSessionNotifier).await
    }

    #[tokio::test]
    async fn test_successful_answer_recorded_verbatim() {
        let engine = Arc::new(TableEngine::new(&[("What is the deadline?", "**March 1**")]));
        let history = run(engine, &["What is the deadline?", "exit"]).await;

        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].markdown(), "**March 1**");
    }

    #[tokio::test]
    async fn test_failure_becomes_error_table() {
        let engine = Arc::new(TableEngine::new(&[]));
        let history = run(engine, &["bad?", "exit"]).await;

        assert_eq!(history.len(), 1);
        assert_eq!(
            history.records()[0].markdown(),
            format!("| Question | Answer |\n|---|---|\n| bad? | {} |", ERROR_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_one_record_per_question_regardless_of_outcome() {
        let engine = Arc::new(TableEngine::new(&[("a", "A"), ("c", "C")]));
        let history = run(engine.clone(), &["a", "b", "c", "d"]).await;

        assert_eq!(history.len(), 4);
        assert_eq!(history.error_count(), 2);
        assert_eq!(*engine.calls.lock().unwrap(), vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn test_empty_lines_are_skipped() {
        let engine = Arc::new(TableEngine::new(&[("q", "A")]));
        let history = run(engine.clone(), &["", "   ", "q", "\t"]).await;

        assert_eq!(history.len(), 1);
        assert_eq!(engine.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_exit_tokens_stop_without_record() {
        for token in ["exit", "EXIT", "quit", "Quit", ":q", ":Q"] {
            let engine = Arc::new(TableEngine::new(&[("q", "A")]));
            let history = run(engine.clone(), &[token, "q"]).await;
            assert!(history.is_empty(), "{token}");
            assert!(engine.calls.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_end_of_input_ends_session() {
        let engine = Arc::new(TableEngine::new(&[("q", "A")]));
        let history = run(engine, &["q"]).await;
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_fenced_answer_is_stripped() {
        let engine = Arc::new(TableEngine::new(&[("q", "```\n| Q | A |\n```")]));
        let history = run(engine, &["q"]).await;
        assert_eq!(history.records()[0].markdown(), "| Q | A |");
    }

    #[tokio::test]
    async fn test_notifier_and_logger_events() {
        let engine = Arc::new(TableEngine::new(&[("ok", "fine")]));
        let logger = Arc::new(RecordingLogger::default());
        let notifier = RecordingNotifier::default();
        let use_case = RunSessionUseCase::new(engine).with_conversation_logger(logger.clone());
        let mut source = ScriptedQuestions::new(["ok", "broken", "quit"]);

        use_case.run(&mut source, &notifier).await;

        assert_eq!(
            *notifier.0.lock().unwrap(),
            vec!["start", "ask ok", "answer fine", "ask broken", "error broken", "end 2"]
        );
        assert_eq!(
            *logger.0.lock().unwrap(),
            vec!["question", "answer", "question", "error"]
        );
    }
}
