//! Retrieval parameters for the knowledge base.

use docqa_domain::ChunkConfig;
use serde::{Deserialize, Serialize};

/// Chunking and top-k settings for the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalParams {
    pub chunk: ChunkConfig,
    /// Excerpts handed to the crew per question.
    pub top_k: usize,
    /// Maximum texts per embedding request.
    pub embed_batch_size: usize,
}

impl Default for RetrievalParams {
    fn default() -> Self {
        Self {
            chunk: ChunkConfig::default(),
            top_k: 5,
            embed_batch_size: 100,
        }
    }
}

impl RetrievalParams {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_embed_batch_size(mut self, size: usize) -> Self {
        self.embed_batch_size = size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = RetrievalParams::default();
        assert_eq!(params.top_k, 5);
        assert_eq!(params.embed_batch_size, 100);
        assert_eq!(params.chunk.chunk_size, 1200);
    }

    #[test]
    fn test_batch_size_never_zero() {
        assert_eq!(RetrievalParams::default().with_embed_batch_size(0).embed_batch_size, 1);
    }
}
