//! Overlapping character-window chunker

use super::entities::{KnowledgeChunk, KnowledgeDocument};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Window size and overlap, both in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1200,
            chunk_overlap: 150,
        }
    }
}

impl ChunkConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.chunk_size == 0 {
            return Err(DomainError::InvalidChunkConfig(
                "chunk_size must be positive".to_string(),
            ));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(DomainError::InvalidChunkConfig(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

/// Splits documents into overlapping windows.
///
/// Whitespace runs are collapsed to single spaces before splitting, so PDF
/// layout noise does not eat into the window budget. Consecutive windows
/// share exactly `chunk_overlap` characters.
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkConfig,
}

impl Chunker {
    pub fn new(config: ChunkConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> ChunkConfig {
        self.config
    }

    pub fn chunk(&self, document: &KnowledgeDocument) -> Vec<KnowledgeChunk> {
        let normalized = document.text.split_whitespace().collect::<Vec<_>>().join(" ");
        let chars: Vec<char> = normalized.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }

        let step = self.config.chunk_size - self.config.chunk_overlap;
        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let end = (start + self.config.chunk_size).min(chars.len());
            let text: String = chars[start..end].iter().collect();
            if !text.trim().is_empty() {
                chunks.push(KnowledgeChunk {
                    source: document.source.clone(),
                    index: chunks.len(),
                    text,
                });
            }
            if end == chars.len() {
                break;
            }
            start += step;
        }

        chunks
    }

    pub fn chunk_all(&self, documents: &[KnowledgeDocument]) -> Vec<KnowledgeChunk> {
        documents.iter().flat_map(|d| self.chunk(d)).collect()
    }
}
