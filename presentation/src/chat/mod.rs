//! Interactive question input
//!
//! Provides a reedline-based line editor as a question source.

mod repl;

pub use repl::ReedlineQuestionSource;
