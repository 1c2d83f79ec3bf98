//! PDF directory loader

use docqa_application::{KnowledgeError, KnowledgeLoaderPort};
use docqa_domain::KnowledgeDocument;
use glob::{Pattern, glob};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loads every `*.pdf` directly inside the knowledge directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfKnowledgeLoader;

impl PdfKnowledgeLoader {
    pub fn new() -> Self {
        Self
    }

    /// PDF files in `dir`, sorted by path. Subdirectories are not searched.
    pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, KnowledgeError> {
        // Escape the directory so `[` or `*` in its name match literally.
        let pattern = Path::new(&Pattern::escape(&dir.to_string_lossy())).join("*.pdf");
        let pattern = pattern.to_string_lossy();

        let entries = glob(&pattern).map_err(|e| KnowledgeError::Io {
            path: dir.to_path_buf(),
            message: format!("Invalid glob pattern: {}", e),
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(path) if path.is_file() => Some(path),
                Ok(_) => None,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .collect();
        paths.sort();
        Ok(paths)
    }

    fn extract(path: &Path) -> Option<KnowledgeDocument> {
        let text = match pdf_extract::extract_text(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: text extraction failed: {}", path.display(), e);
                return None;
            }
        };

        if text.trim().is_empty() {
            warn!("Skipping {}: no extractable text", path.display());
            return None;
        }

        debug!("Extracted {} chars from {}", text.len(), path.display());
        Some(KnowledgeDocument::new(path.display().to_string(), text))
    }
}

impl KnowledgeLoaderPort for PdfKnowledgeLoader {
    fn load(&self, dir: &Path) -> Result<Vec<KnowledgeDocument>, KnowledgeError> {
        if !dir.is_dir() {
            return Err(KnowledgeError::NoDocuments(dir.to_path_buf()));
        }

        let paths = Self::discover(dir)?;
        let documents: Vec<KnowledgeDocument> =
            paths.iter().filter_map(|p| Self::extract(p)).collect();

        if documents.is_empty() {
            return Err(KnowledgeError::NoDocuments(dir.to_path_buf()));
        }

        info!(
            "Loaded {} of {} PDF(s) from {}",
            documents.len(),
            paths.len(),
            dir.display()
        );
        Ok(documents)
    }
}
