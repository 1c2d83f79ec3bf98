//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for docqa
#[derive(Parser, Debug)]
#[command(name = "docqa")]
#[command(author, version, about = "Ask questions about your PDFs and get an HTML Q&A report")]
#[command(long_about = r#"
docqa answers questions about a folder of PDF documents.

Each question runs through a three-agent crew:
1. Answer: a QA agent answers from the most relevant document excerpts
2. Validation: a validator checks the answer against the same excerpts
3. Formatting: a formatter turns the result into a Markdown table

Type 'exit', 'quit' or ':q' to finish. Every answer of the session is then
written to a single HTML report.

Configuration is read from (highest priority first):
1. Environment variables (GEMINI_API_KEY, LLM_MODEL, ...), also from .env
2. --config <path>     Explicit config file
3. ./docqa.toml        Project-level config
4. ~/.config/docqa/config.toml   Global config

Example:
  docqa
  docqa --knowledge-dir ./papers --output answers.html
  docqa --transcript session.jsonl -v
"#)]
pub struct Cli {
    /// Directory containing the PDF documents
    #[arg(short, long, value_name = "DIR", default_value = "knowledge")]
    pub knowledge_dir: PathBuf,

    /// Path of the HTML report written at the end of the session
    #[arg(short, long, value_name = "PATH", default_value = "output.html")]
    pub output: PathBuf,

    /// Number of document excerpts handed to the crew per question
    #[arg(long, value_name = "N", default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..=50))]
    pub top_k: u16,

    /// Append a JSONL transcript of the session to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
