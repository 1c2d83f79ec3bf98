//! Generate Report use case
//!
//! Renders the whole session history into one standalone HTML page and
//! hands it to the report sink. Records are rendered one at a time and
//! joined as HTML, so markup in one record cannot run into the next.

use crate::ports::report::{MarkdownRenderer, ReportError, ReportSink};
use docqa_domain::{ReportPage, SessionHistory, join_fragments};
use std::sync::Arc;
use tracing::info;

pub struct GenerateReportUseCase {
    renderer: Arc<dyn MarkdownRenderer>,
    sink: Arc<dyn ReportSink>,
}

impl GenerateReportUseCase {
    pub fn new(renderer: Arc<dyn MarkdownRenderer>, sink: Arc<dyn ReportSink>) -> Self {
        Self { renderer, sink }
    }

    /// Build the HTML document for `history` without writing it.
    pub fn render(&self, history: &SessionHistory) -> Result<String, ReportError> {
        if history.is_empty() {
            return Err(ReportError::EmptyHistory);
        }
        let body = join_fragments(
            history
                .iter()
                .map(|record| self.renderer.render(record.markdown())),
        );
        Ok(ReportPage::wrap(&body))
    }

    /// Render and write the report, overwriting any previous one.
    pub fn execute(&self, history: &SessionHistory) -> Result<(), ReportError> {
        let document = self.render(history)?;
        self.sink.write(&document)?;
        info!(
            "Wrote report with {} record(s) to {}",
            history.len(),
            self.sink.location()
        );
        Ok(())
    }
}
