//! Application-level configuration.
//!
//! - [`RuntimeConfig`]: backend settings and credential, resolved once at startup
//! - [`RetrievalParams`]: how much knowledge each question sees

pub mod retrieval_params;
pub mod runtime_config;

pub use retrieval_params::RetrievalParams;
pub use runtime_config::RuntimeConfig;
