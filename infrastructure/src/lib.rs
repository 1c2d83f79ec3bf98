//! Infrastructure layer for docqa
//!
//! Adapters that implement the ports defined in the application layer:
//! the Gemini HTTP client, PDF ingestion, report rendering, transcript
//! logging and configuration loading.

pub mod config;
pub mod gemini;
pub mod knowledge;
pub mod logging;
pub mod report;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use gemini::{DEFAULT_BASE_URL, GeminiClient, GeminiSession};
pub use knowledge::PdfKnowledgeLoader;
pub use logging::JsonlTranscript;
pub use report::{FileReportSink, PulldownMarkdownRenderer};
