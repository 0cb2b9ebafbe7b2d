use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tdsearch_core::IndexFiles;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TDSEARCH_CONFIG";

/// Configuration for tdsearch.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. Environment variables (TDSEARCH_* prefix, highest priority)
/// 2. Config file (~/.config/tdsearch/config.toml, or $TDSEARCH_CONFIG)
/// 3. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter for diagnostics written to stderr.
    ///
    /// Can be set via:
    /// - ENV: TDSEARCH_LOG_LEVEL (RUST_LOG takes precedence when set)
    /// - Config: log_level = "debug"
    /// - Default: warn
    pub log_level: String,

    /// Artifact file names inside the index directory.
    ///
    /// Set via the `[files]` table (`terms`, `documents`, `matrix`).
    pub files: IndexFiles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: String::from("warn"),
            files: IndexFiles::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file and `TDSEARCH_*` environment variables.
    ///
    /// An explicit `path` must exist. Without one, the default config file
    /// is read only if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is missing (explicit path only)
    /// or cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Some(path.to_path_buf())
            }
            None => Some(config_file_path()).filter(|p| p.exists()),
        };

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if let Some(config_path) = config_path {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .with_context(|| format!("Failed to load config file {}", config_path.display()))?;
        }

        let env_opts = env::Options::with_top_level("tdsearch");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/tdsearch/config.toml
/// - macOS: ~/Library/Application Support/tdsearch/config.toml
/// - Windows: %APPDATA%\tdsearch\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tdsearch")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.files.matrix, "td_matrix.txt");
    }

    #[test]
    fn test_config_file_with_files_table() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[files]\nmatrix = \"matrix.txt\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.files.matrix, "matrix.txt");
        assert_eq!(config.files.terms, "sorted_terms.txt");
    }

    #[test]
    fn test_invalid_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "log_level = [").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/tdsearch.toml")));
        assert!(result.is_err());
    }
}
