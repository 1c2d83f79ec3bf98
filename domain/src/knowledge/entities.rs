//! Knowledge entities

use serde::{Deserialize, Serialize};

/// Plain text extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    /// File name the text came from (e.g. `handbook.pdf`).
    pub source: String,
    pub text: String,
}

impl KnowledgeDocument {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// A window of a document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeChunk {
    pub source: String,
    /// Position of this chunk within its document, starting at 0.
    pub index: usize,
    pub text: String,
}

/// A chunk together with its similarity to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: KnowledgeChunk,
    pub score: f32,
}
