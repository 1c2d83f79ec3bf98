//! Configuration loading for docqa
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables (`GEMINI_API_KEY`, `LLM_MODEL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./docqa.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/docqa/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigError, FileConfig};
pub use loader::ConfigLoader;
