//! Knowledge source ports

use super::embedding::EmbeddingError;
use async_trait::async_trait;
use docqa_domain::{DomainError, KnowledgeDocument, ScoredChunk};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("No PDFs found in {0}. Put your files there.")]
    NoDocuments(PathBuf),

    #[error("Failed to read knowledge source {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Loads the raw documents of the knowledge source.
pub trait KnowledgeLoaderPort: Send + Sync {
    /// Load every document under `dir`.
    ///
    /// Fails with [`KnowledgeError::NoDocuments`] when nothing usable is
    /// found.
    fn load(&self, dir: &Path) -> Result<Vec<KnowledgeDocument>, KnowledgeError>;
}

/// Finds the chunks most relevant to a question.
#[async_trait]
pub trait KnowledgeRetriever: Send + Sync {
    async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>, KnowledgeError>;
}
