//! Console output for the question loop

use colored::Colorize;
use docqa_application::SessionNotifier;
use docqa_domain::{QaRecord, Question};
use std::path::Path;

/// Prints session events to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    pub fn welcome() -> String {
        format!(
            "\n{}\n{}\n",
            "📚 docqa: ask questions about your PDFs.".cyan().bold(),
            "Type 'exit' to quit.".dimmed()
        )
    }

    pub fn knowledge_summary(dir: &Path, documents: usize, chunks: usize) -> String {
        format!(
            "{} {} document(s), {} chunk(s) from {}",
            "Knowledge:".cyan().bold(),
            documents,
            chunks,
            dir.display()
        )
    }

    pub fn missing_knowledge_dir(dir: &Path) -> String {
        format!(
            "{}  Missing folder: {}. Create it and add your PDFs.",
            "⚠".yellow(),
            dir.display()
        )
    }

    pub fn answer_block(raw: &str) -> String {
        format!(
            "\n{}\n{}\n{}\n",
            "--- Answer ---".green().bold(),
            raw.trim_end(),
            "--------------".green().bold()
        )
    }

    pub fn error_line(error: &str) -> String {
        format!("\n{} {}", "❌ An error occurred:".red().bold(), error)
    }

    pub fn report_saved(location: &str) -> String {
        format!(
            "{} Successfully saved the full conversation to {}",
            "✅".green(),
            location.bold()
        )
    }

    pub fn nothing_answered() -> String {
        "No questions were answered. Exiting.".dimmed().to_string()
    }
}

impl SessionNotifier for ConsoleNotifier {
    fn on_session_start(&self) {
        println!("{}", Self::welcome());
    }

    fn on_question_submitted(&self, _question: &Question) {
        println!("\n{}", "🚀 Kicking off crew to answer your question...".cyan());
    }

    fn on_answer(&self, _question: &Question, raw: &str, _record: &QaRecord) {
        println!("{}", Self::answer_block(raw));
        println!(
            "{}",
            "✅ Answer recorded. Ask another question or type 'exit'.".green()
        );
    }

    fn on_error(&self, _question: &Question, error: &str) {
        println!("{}", Self::error_line(error));
    }

    fn on_session_end(&self, records: usize) {
        if records > 0 {
            println!("\n{}", "👋 Bye! Generating your final Q&A report...".cyan());
        } else {
            println!("\n{}", "👋 Bye!".cyan());
        }
    }
}
