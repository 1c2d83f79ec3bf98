//! Knowledge base construction and retrieval
//!
//! Ingests the knowledge source once at startup: load documents, chunk
//! them, embed the chunks in batches and keep everything in an in-memory
//! [`VectorIndex`]. Retrieval embeds the query and ranks by cosine
//! similarity.

use crate::config::RetrievalParams;
use crate::ports::embedding::{EmbeddingError, EmbeddingProvider};
use crate::ports::knowledge::{KnowledgeError, KnowledgeLoaderPort, KnowledgeRetriever};
use async_trait::async_trait;
use docqa_domain::{Chunker, ScoredChunk, VectorIndex};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Embedded chunks of every knowledge document.
pub struct KnowledgeBase {
    index: VectorIndex,
    embedder: Arc<dyn EmbeddingProvider>,
    documents: usize,
}

impl KnowledgeBase {
    /// Load, chunk and embed everything under `dir`.
    pub async fn build(
        loader: &dyn KnowledgeLoaderPort,
        embedder: Arc<dyn EmbeddingProvider>,
        dir: &Path,
        params: &RetrievalParams,
    ) -> Result<Self, KnowledgeError> {
        let documents = loader.load(dir)?;
        info!("Loaded {} knowledge document(s) from {}", documents.len(), dir.display());

        let chunker = Chunker::new(params.chunk)?;
        let chunks = chunker.chunk_all(&documents);
        if chunks.is_empty() {
            return Err(KnowledgeError::NoDocuments(dir.to_path_buf()));
        }

        let mut index = VectorIndex::new();
        let batch_size = params.embed_batch_size.max(1);
        for (n, batch) in chunks.chunks(batch_size).enumerate() {
            let texts: Vec<String> = batch.iter().map(|c| c.text.clone()).collect();
            let vectors = embedder.embed_documents(&texts).await?;
            if vectors.len() != batch.len() {
                return Err(EmbeddingError::CountMismatch {
                    expected: batch.len(),
                    actual: vectors.len(),
                }
                .into());
            }
            debug!("Embedded batch {} ({} chunks)", n + 1, batch.len());

            for (chunk, vector) in batch.iter().zip(vectors) {
                index.insert(chunk.clone(), vector)?;
            }
        }

        info!("Knowledge base ready: {} chunks", index.len());
        Ok(Self {
            index,
            embedder,
            documents: documents.len(),
        })
    }

    pub fn document_count(&self) -> usize {
        self.documents
    }

    pub fn chunk_count(&self) -> usize {
        self.index.len()
    }
}

#[async_trait]
impl KnowledgeRetriever for KnowledgeBase {
    async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>, KnowledgeError> {
        let vector = self.embedder.embed_query(query).await?;
        Ok(self.index.search(&vector, k)?)
    }
}
