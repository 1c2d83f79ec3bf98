//! Report rendering ports

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Nothing to report: session history is empty")]
    EmptyHistory,

    #[error("Failed to write report to {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Markdown to HTML conversion. Implementations must support tables.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}

/// Destination for the finished report document.
pub trait ReportSink: Send + Sync {
    /// Persist `document`, replacing any previous report.
    fn write(&self, document: &str) -> Result<(), ReportError>;

    /// Human-readable location, for the final status line.
    fn location(&self) -> String;
}
