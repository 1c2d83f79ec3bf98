//! Markdown to HTML with pulldown-cmark

use docqa_application::MarkdownRenderer;
use pulldown_cmark::{Options, Parser, html};

/// CommonMark renderer with GitHub-style tables enabled.
#[derive(Debug, Clone, Copy)]
pub struct PulldownMarkdownRenderer {
    options: Options,
}

impl PulldownMarkdownRenderer {
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
        }
    }
}

impl Default for PulldownMarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for PulldownMarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::FileReportSink;
    use docqa_application::GenerateReportUseCase;
    use docqa_domain::{QaRecord, Question, SessionHistory};
    use std::sync::Arc;

    fn render(md: &str) -> String {
        PulldownMarkdownRenderer::new().render(md)
    }

    #[test]
    fn test_renders_tables() {
        let html = render("| Question | Answer |\n|---|---|\n| When? | March 1 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Question</th>"));
        assert!(html.contains("<td>March 1</td>"));
    }

    #[test]
    fn test_renders_bold() {
        assert_eq!(render("**March 1**").trim(), "<p><strong>March 1</strong></p>");
    }

    fn report_for(answers: &[&str]) -> String {
        report(&answers.iter().map(|a| QaRecord::from_answer(a)).collect::<SessionHistory>())
    }

    fn report(history: &SessionHistory) -> String {
        let dir = tempfile::tempdir().unwrap();
        GenerateReportUseCase::new(
            Arc::new(PulldownMarkdownRenderer::new()),
            Arc::new(FileReportSink::new(dir.path().join("output.html"))),
        )
        .render(history)
        .unwrap()
    }

    #[test]
    fn test_unterminated_fence_stays_in_its_record() {
        let html = report_for(&[
            "```markdown\n| Question | Answer |\n|---|---|\n| a | trunc",
            "**second**",
            "**third**",
        ]);
        assert_eq!(html.matches("<hr>").count(), 2);
        let second = html.find("<strong>second</strong>").unwrap();
        let third = html.find("<strong>third</strong>").unwrap();
        assert!(second < third);
    }

    #[test]
    fn test_table_record_followed_by_text() {
        let html = report_for(&["| Question | Answer |\n|---|---|\n| a | b |", "next"]);
        assert_eq!(html.matches("<hr>").count(), 1);
        assert!(html.contains("<p>next</p>"));
        assert!(!html.contains("<td>next</td>"));
    }

    #[test]
    fn test_history_keeps_order() {
        let question = Question::try_new("bad?").unwrap();
        let history: SessionHistory = vec![
            QaRecord::from_answer("**first**"),
            QaRecord::from_error(&question),
            QaRecord::from_answer("third"),
        ]
        .into_iter()
        .collect();
        let html = report(&history);

        assert_eq!(html.matches("<hr>").count(), 2);
        let first = html.find("<strong>first</strong>").unwrap();
        let table = html.find("<td>bad?</td>").unwrap();
        let third = html.find("<p>third</p>").unwrap();
        assert!(first < table && table < third);
    }
}
