//! Knowledge subdomain: documents extracted from PDFs, their chunks, and
//! the in-memory vector index used for retrieval.

pub mod chunker;
pub mod entities;
pub mod vector;
