//! Report adapters: Markdown rendering and the HTML file sink.

mod file_sink;
mod markdown;

pub use file_sink::FileReportSink;
pub use markdown::PulldownMarkdownRenderer;
