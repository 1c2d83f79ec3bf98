//! Line editor for the question loop

use docqa_application::QuestionSource;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PROMPT_LABEL: &str = "❓ Your question";
const HISTORY_CAPACITY: usize = 500;

/// Reads questions from the terminal.
///
/// Ctrl-C and Ctrl-D end the session the same way an exit token does.
pub struct ReedlineQuestionSource {
    editor: Reedline,
    prompt: DefaultPrompt,
}

impl ReedlineQuestionSource {
    pub fn new() -> Self {
        let mut editor = Reedline::create();

        if let Some(path) = history_path().filter(|p| ensure_parent_dir(p)) {
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => debug!("No line history at {}: {}", path.display(), e),
            }
        }

        Self {
            editor,
            prompt: DefaultPrompt::new(
                DefaultPromptSegment::Basic(PROMPT_LABEL.to_string()),
                DefaultPromptSegment::Empty,
            ),
        }
    }
}

impl Default for ReedlineQuestionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionSource for ReedlineQuestionSource {
    fn next_line(&mut self) -> Option<String> {
        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(line)) => Some(line),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                None
            }
        }
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("docqa").join("history.txt"))
}

/// Create the directory holding `path`. Failure only disables history.
fn ensure_parent_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(e) => {
            debug!("Could not create history directory {}: {}", parent.display(), e);
            false
        }
    }
}
