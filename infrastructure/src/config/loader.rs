//! Configuration loader with multi-source merging

use super::file_config::{ConfigError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "docqa.toml";

/// Environment variables read at startup, besides the API key pair.
pub const ENV_KEYS: &[&str] = &[
    "EMBEDDINGS_PROVIDER",
    "EMBEDDINGS_MODEL",
    "LLM_MODEL",
    "LLM_TEMPERATURE",
    "LLM_MAX_TOKENS",
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// With `include_files == false` (`--no-config`) only defaults and the
    /// environment are used.
    pub fn load(config_path: Option<&Path>, include_files: bool) -> Result<FileConfig, ConfigError> {
        Self::figment(config_path, include_files)
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// The merged provider stack, lowest priority first.
    pub fn figment(config_path: Option<&Path>, include_files: bool) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if include_files {
            if let Some(global_path) = Self::global_config_path()
                && global_path.exists()
            {
                figment = figment.merge(Toml::file(&global_path));
            }

            let project = PathBuf::from(PROJECT_CONFIG_FILE);
            if project.exists() {
                figment = figment.merge(Toml::file(&project));
            }

            if let Some(path) = config_path {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment
            .merge(Env::raw().only(ENV_KEYS))
            .merge(
                Env::raw()
                    .only(&["GOOGLE_API_KEY"])
                    .map(|_| "gemini_api_key".into()),
            )
            .merge(Env::raw().only(&["GEMINI_API_KEY"]))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/docqa/config.toml if set,
    /// otherwise falls back to ~/.config/docqa/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("docqa").join("config.toml"))
    }

    /// Print the config sources being used (for `--show-config`)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        for key in ENV_KEYS.iter().chain(&["GEMINI_API_KEY", "GOOGLE_API_KEY"]) {
            let state = if std::env::var_os(key).is_some() {
                "[SET  ]"
            } else {
                "[     ]"
            };
            println!("  {} Env:     {}", state, key);
        }

        if let Some(path) = config_path {
            let state = if path.exists() { "[FOUND]" } else { "[MISSING]" };
            println!("  {} Explicit: {}", state, path.display());
        }

        if Path::new(PROJECT_CONFIG_FILE).exists() {
            println!("  [FOUND] Project: ./{}", PROJECT_CONFIG_FILE);
        } else {
            println!("  [     ] Project: ./{}", PROJECT_CONFIG_FILE);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_env() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load(None, false).unwrap();
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("GEMINI_API_KEY", "gemini-key");
            jail.set_env("LLM_MODEL", "gemini/gemini-1.5-flash");
            jail.set_env("LLM_TEMPERATURE", "0.7");
            jail.set_env("LLM_MAX_TOKENS", "2048");

            let config = ConfigLoader::load(None, false).unwrap();
            assert_eq!(config.gemini_api_key.as_deref(), Some("gemini-key"));
            assert_eq!(config.llm_model, "gemini/gemini-1.5-flash");
            assert!((config.llm_temperature - 0.7).abs() < 1e-6);
            assert_eq!(config.llm_max_tokens, 2048);
            Ok(())
        });
    }

    #[test]
    fn test_google_key_is_fallback() {
        Jail::expect_with(|jail| {
            jail.set_env("GOOGLE_API_KEY", "google-key");
            let config = ConfigLoader::load(None, false).unwrap();
            assert_eq!(config.gemini_api_key.as_deref(), Some("google-key"));

            jail.set_env("GEMINI_API_KEY", "gemini-key");
            let config = ConfigLoader::load(None, false).unwrap();
            assert_eq!(config.gemini_api_key.as_deref(), Some("gemini-key"));
            Ok(())
        });
    }

    #[test]
    fn test_env_beats_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                PROJECT_CONFIG_FILE,
                r#"
llm_model = "from-file"
llm_max_tokens = 100
"#,
            )?;
            jail.set_env("LLM_MODEL", "from-env");

            let config = ConfigLoader::load(None, true).unwrap();
            assert_eq!(config.llm_model, "from-env");
            assert_eq!(config.llm_max_tokens, 100);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "embeddings_model = \"models/custom\"")?;
            let config = ConfigLoader::load(Some(Path::new("custom.toml")), true).unwrap();
            assert_eq!(config.embeddings_model, "models/custom");
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("docqa"));
    }
}
