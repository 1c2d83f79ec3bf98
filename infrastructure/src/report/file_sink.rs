//! HTML report file

use docqa_application::{ReportError, ReportSink};
use std::path::{Path, PathBuf};

/// Writes the report to a fixed path, replacing the previous file.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileReportSink {
    fn write(&self, document: &str) -> Result<(), ReportError> {
        std::fs::write(&self.path, document).map_err(|e| ReportError::Write {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrites_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.html");
        std::fs::write(&path, "old report with more text").unwrap();

        let sink = FileReportSink::new(&path);
        sink.write("<html>new</html>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html>new</html>");
        assert_eq!(sink.location(), path.display().to_string());
    }

    #[test]
    fn test_write_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileReportSink::new(dir.path());
        let err = sink.write("x").unwrap_err();
        assert!(matches!(err, ReportError::Write { path, .. } if path == dir.path()));
    }
}
