//! Session transcript logging.
//!
//! [`JsonlTranscript`] appends one JSON object per question/answer event
//! and implements the [`ConversationLogger`](docqa_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlTranscript;
