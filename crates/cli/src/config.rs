//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `NEDGE_DATA_DIR` - Directory collections are saved in (default: `.nedge`)
//! - `NEDGE_PERSISTENCE` - `file` to save collections, `none` to keep them in
//!   memory for the duration of one command (default: `file`)
//! - `RUST_LOG` - Log filter (default: `nedge_cli=info,nedge_core=info`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".nedge";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where collections are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistenceMode {
    /// One JSON file per collection under the data directory.
    #[default]
    File,
    /// Nothing is read or written.
    None,
}

impl std::str::FromStr for PersistenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "none" => Ok(Self::None),
            other => Err(format!("expected `file` or `none`, got `{other}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the saved collections
    pub data_dir: PathBuf,
    /// Persistence backend
    pub persistence: PersistenceMode,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = PathBuf::from(get_env_or_default(&lookup, "NEDGE_DATA_DIR", DEFAULT_DATA_DIR));
        let persistence = get_env_or_default(&lookup, "NEDGE_PERSISTENCE", "file")
            .parse::<PersistenceMode>()
            .map_err(|e| ConfigError::InvalidEnvVar("NEDGE_PERSISTENCE".to_string(), e))?;

        Ok(Self {
            data_dir,
            persistence,
        })
    }

    /// Apply command-line overrides on top of the environment.
    #[must_use]
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, ephemeral: bool) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if ephemeral {
            self.persistence = PersistenceMode::None;
        }
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value. Empty values count as unset.
fn get_env_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    get_optional_env(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Get an optional variable.
fn get_optional_env<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}
