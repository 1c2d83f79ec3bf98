//! Port for structured conversation logging.
//!
//! Records each question and its outcome to a machine-readable transcript.
//! This is separate from `tracing`-based operation logs.

use serde_json::Value;

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier: "question", "answer" or "error".
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn question(question: &str) -> Self {
        Self::new("question", serde_json::json!({ "question": question }))
    }

    pub fn answer(question: &str, record: &str) -> Self {
        Self::new(
            "answer",
            serde_json::json!({ "question": question, "record": record }),
        )
    }

    pub fn error(question: &str, error: &str) -> Self {
        Self::new(
            "error",
            serde_json::json!({ "question": question, "error": error }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; write failures are swallowed by
/// the implementation.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
