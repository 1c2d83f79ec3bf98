//! In-memory vector index with cosine similarity

use super::entities::{KnowledgeChunk, ScoredChunk};
use crate::core::error::DomainError;

/// Cosine similarity of two equal-length vectors.
///
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Chunks paired with their embeddings. All vectors share one dimension.
#[derive(Debug, Clone, Default)]
pub struct VectorIndex {
    entries: Vec<(KnowledgeChunk, Vec<f32>)>,
    dimension: Option<usize>,
}

impl VectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chunk: KnowledgeChunk, embedding: Vec<f32>) -> Result<(), DomainError> {
        match self.dimension {
            Some(expected) if expected != embedding.len() => {
                return Err(DomainError::DimensionMismatch {
                    expected,
                    actual: embedding.len(),
                });
            }
            None => self.dimension = Some(embedding.len()),
            _ => {}
        }
        self.entries.push((chunk, embedding));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// The `k` most similar chunks, best first. Equal scores keep
    /// insertion order.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredChunk>, DomainError> {
        if let Some(expected) = self.dimension
            && expected != query.len()
        {
            return Err(DomainError::DimensionMismatch {
                expected,
                actual: query.len(),
            });
        }

        let mut scored: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|(chunk, embedding)| ScoredChunk {
                chunk: chunk.clone(),
                score: cosine_similarity(query, embedding),
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(k);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str) -> KnowledgeChunk {
        KnowledgeChunk {
            source: "doc.pdf".to_string(),
            index: 0,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_search_orders_by_similarity() {
        let mut index = VectorIndex::new();
        index.insert(chunk("east"), vec![1.0, 0.0]).unwrap();
        index.insert(chunk("north"), vec![0.0, 1.0]).unwrap();
        index.insert(chunk("north-east"), vec![0.7, 0.7]).unwrap();

        let hits = index.search(&[0.0, 1.0], 2).unwrap();
        let texts: Vec<_> = hits.iter().map(|h| h.chunk.text.as_str()).collect();
        assert_eq!(texts, vec!["north", "north-east"]);
        assert!(hits[0].score >= hits[1].score);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut index = VectorIndex::new();
        index.insert(chunk("first"), vec![1.0, 0.0]).unwrap();
        index.insert(chunk("second"), vec![2.0, 0.0]).unwrap();
        let hits = index.search(&[1.0, 0.0], 5).unwrap();
        assert_eq!(hits[0].chunk.text, "first");
        assert_eq!(hits[1].chunk.text, "second");
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut index = VectorIndex::new();
        index.insert(chunk("a"), vec![1.0, 0.0]).unwrap();
        assert!(index.insert(chunk("b"), vec![1.0]).is_err());
        assert!(index.search(&[1.0, 0.0, 0.0], 1).is_err());
        assert_eq!(index.dimension(), Some(2));
    }
}
