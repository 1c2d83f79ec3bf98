//! Configuration value objects for the domain layer
//!
//! Backend settings resolved once at startup and shared, read-only, by
//! every component that talks to the model provider.

mod settings;

pub use settings::{EmbeddingSettings, LlmSettings};
