//! Fence stripping for model responses.
//!
//! Formatter output sometimes arrives wrapped in a code fence. The check is
//! purely positional: the trimmed text must start and end with [`FENCE`],
//! whatever follows the opening marker on its line.

/// The 3-character fence marker.
pub const FENCE: &str = "```";

/// Strip a fence wrapping the whole response.
///
/// The response is trimmed first. If it both starts and ends with
/// [`FENCE`], its first and last lines are dropped and the rest rejoined
/// with `\n`. Otherwise the trimmed text is returned unchanged.
pub fn strip_code_fence(raw: &str) -> String {
    let text = raw.trim();
    if !(text.starts_with(FENCE) && text.ends_with(FENCE)) {
        return text.to_string();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        // "```" alone, or "```...```" on one line: nothing survives.
        return String::new();
    }
    lines[1..lines.len() - 1].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_plain_fence() {
        let raw = "```\n| Question | Answer |\n|---|---|\n| a | b |\n```";
        assert_eq!(
            strip_code_fence(raw),
            "| Question | Answer |\n|---|---|\n| a | b |"
        );
    }

    #[test]
    fn test_strips_language_tagged_fence() {
        let raw = "```markdown\n| Q | A |\n```\n";
        assert_eq!(strip_code_fence(raw), "| Q | A |");
    }

    #[test]
    fn test_unwrapped_response_is_untouched() {
        assert_eq!(strip_code_fence("**March 1**"), "**March 1**");
        let partial = "```\ncode\n``` and then prose";
        assert_eq!(strip_code_fence(partial), partial);
    }

    #[test]
    fn test_idempotent_on_unfenced_output() {
        let once = strip_code_fence("```\n| a | b |\n```");
        assert_eq!(strip_code_fence(&once), once);
    }

    #[test]
    fn test_single_line_fence_yields_empty() {
        assert_eq!(strip_code_fence("```"), "");
        assert_eq!(strip_code_fence("```x```"), "");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(strip_code_fence("  **bold**\n\n"), "**bold**");
    }
}
