//! Console input classification

use crate::core::question::Question;

/// Words that end the session, matched case-insensitively.
pub const EXIT_TOKENS: &[&str] = &["exit", "quit", ":q"];

/// Returns `true` if `text` (already trimmed) is an exit token.
pub fn is_exit_token(text: &str) -> bool {
    let lowered = text.to_lowercase();
    EXIT_TOKENS.contains(&lowered.as_str())
}

/// Meaning of one raw line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// Blank line; re-prompt without recording anything.
    Empty,
    /// One of [`EXIT_TOKENS`]; the loop ends without a record.
    Exit,
    /// A question to submit to the answer engine.
    Question(Question),
}

impl SessionInput {
    /// Classify a raw input line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if is_exit_token(trimmed) {
            return SessionInput::Exit;
        }
        match Question::try_new(trimmed) {
            Some(question) => SessionInput::Question(question),
            None => SessionInput::Empty,
        }
    }
}
