//! Knowledge source adapters

mod pdf_loader;

pub use pdf_loader::PdfKnowledgeLoader;
