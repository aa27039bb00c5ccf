//! CLI error type.

use std::path::PathBuf;

use nedge_core::GarmentId;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors a command can end with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A catalog file could not be read.
    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not a JSON array of shoot rows.
    #[error("Failed to parse {path}: {source}")]
    DecodeInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output could not be encoded.
    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),

    /// No shoot in the catalog has this slug.
    #[error("Shoot not found: {0}")]
    ShootNotFound(String),

    /// The shoot exists but does not feature this garment.
    #[error("Garment {id} is not part of shoot {slug}")]
    GarmentNotFound { slug: String, id: GarmentId },

    /// A `--field` argument is not of the form `key=value`, or names an
    /// identity field.
    #[error("Invalid field {0:?}, expected key=value with a key other than title or stylist")]
    InvalidField(String),
}

/// Result type alias for `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
