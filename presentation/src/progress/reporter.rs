//! Progress reporting for crew runs

use colored::Colorize;
use docqa_application::CrewProgressNotifier;
use docqa_domain::{AgentRole, CrewStage};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner per crew stage, cleared to a one-line summary when the stage ends.
pub struct ProgressReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, prefix: String, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix);
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock()
            && let Some(previous) = current.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn finish(&self, message: String) {
        if let Ok(mut current) = self.current.lock()
            && let Some(pb) = current.take()
        {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// `[1/3] qa_task` style label.
fn stage_label(stage: CrewStage) -> String {
    format!(
        "[{}/{}] {}",
        stage.ordinal(),
        CrewStage::SEQUENCE.len(),
        stage.as_str()
    )
}

impl CrewProgressNotifier for ProgressReporter {
    fn on_retrieval_start(&self) {
        self.start_spinner("retrieval".to_string(), "Searching documents...".to_string());
    }

    fn on_retrieval_complete(&self, excerpts: usize) {
        self.finish(format!("{} excerpt(s) found", excerpts));
    }

    fn on_stage_start(&self, stage: CrewStage, agent: AgentRole) {
        self.start_spinner(stage_label(stage), format!("{} working...", agent.role()));
    }

    fn on_stage_complete(&self, stage: CrewStage, success: bool) {
        let status = if success {
            format!("{} done", "v".green())
        } else {
            format!("{} failed", "x".red())
        };
        self.finish(format!("{} {}", stage.as_str(), status));
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl CrewProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: CrewStage, agent: AgentRole) {
        println!(
            "{} {} ({})",
            "->".cyan(),
            stage_label(stage).bold(),
            agent.role()
        );
    }

    fn on_stage_complete(&self, stage: CrewStage, success: bool) {
        if success {
            println!("  {} {}", "v".green(), stage);
        } else {
            println!("  {} {} (failed)", "x".red(), stage);
        }
    }
}
