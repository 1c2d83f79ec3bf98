//! Presentation layer for docqa
//!
//! This crate contains the CLI definition, the interactive line editor,
//! console output and crew progress reporters.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ReedlineQuestionSource;
pub use cli::commands::Cli;
pub use output::console::ConsoleNotifier;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
