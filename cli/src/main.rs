//! CLI entrypoint for docqa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use docqa_application::{
    ConversationLogger, CrewProgressNotifier, GenerateReportUseCase, KnowledgeBase,
    KnowledgeCrew, RetrievalParams, RunSessionUseCase,
};
use docqa_infrastructure::{
    ConfigLoader, FileReportSink, GeminiClient, JsonlTranscript, PdfKnowledgeLoader,
    PulldownMarkdownRenderer,
};
use docqa_presentation::{
    Cli, ConsoleNotifier, ProgressReporter, ReedlineQuestionSource, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file.
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // .env first so the config loader sees its variables
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let config = ConfigLoader::load(cli.config.as_deref(), !cli.no_config)
        .context("Failed to load configuration")?
        .resolve()
        .context("Invalid configuration")?;
    info!("Using {:?}", config);

    if !cli.knowledge_dir.is_dir() {
        println!("{}", ConsoleNotifier::missing_knowledge_dir(&cli.knowledge_dir));
    }

    // === Dependency Injection ===
    let client = Arc::new(GeminiClient::new(&config).context("Failed to create Gemini client")?);

    let params = RetrievalParams::default().with_top_k(usize::from(cli.top_k));
    let knowledge = Arc::new(
        KnowledgeBase::build(
            &PdfKnowledgeLoader::new(),
            client.clone(),
            &cli.knowledge_dir,
            &params,
        )
        .await
        .context("Failed to build the knowledge base")?,
    );
    println!(
        "{}",
        ConsoleNotifier::knowledge_summary(
            &cli.knowledge_dir,
            knowledge.document_count(),
            knowledge.chunk_count()
        )
    );

    let mut crew = KnowledgeCrew::new(client, knowledge, config.llm.clone(), params.top_k);
    if !cli.quiet {
        // Spinners only make sense on a terminal
        let progress: Arc<dyn CrewProgressNotifier> = if std::io::stderr().is_terminal() {
            Arc::new(ProgressReporter::new())
        } else {
            Arc::new(SimpleProgress)
        };
        crew = crew.with_progress(progress);
    }

    let mut session = RunSessionUseCase::new(Arc::new(crew));
    if let Some(path) = &cli.transcript {
        match JsonlTranscript::open(path) {
            Some(transcript) => {
                info!("Recording transcript to {}", transcript.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(transcript);
                session = session.with_conversation_logger(logger);
            }
            None => warn!("Continuing without a transcript"),
        }
    }

    // === Question loop ===
    let mut input = ReedlineQuestionSource::new();
    let history = session.run(&mut input, &ConsoleNotifier::new()).await;

    if history.is_empty() {
        println!("{}", ConsoleNotifier::nothing_answered());
        return Ok(());
    }

    // === Report ===
    let sink = Arc::new(FileReportSink::new(&cli.output));
    GenerateReportUseCase::new(Arc::new(PulldownMarkdownRenderer::new()), sink.clone())
        .execute(&history)
        .context("Failed to write the report")?;
    println!("{}", ConsoleNotifier::report_saved(&sink.path().display().to_string()));

    Ok(())
}

/// Install the tracing subscriber. Verbosity comes from `-v` counts unless
/// `RUST_LOG` is set.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}
