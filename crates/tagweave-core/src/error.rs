//! Error types for the Tagweave synthesis pipeline.
//!
//! Errors are organized by stage so every fatal condition surfaces a
//! human-readable message naming the offending path or section.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Tagweave operations.
#[derive(Error, Debug)]
pub enum TagweaveError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Ingestion errors (input directory, label files)
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Ingestion errors.
///
/// Total absence of usable input is fatal; a single malformed label file is
/// not (it is skipped with a warning during corpus loading).
#[derive(Error, Debug)]
pub enum IngestError {
    /// Input directory does not exist
    #[error("Input directory not found: {0}")]
    MissingInput(PathBuf),

    /// Input path exists but is not a directory
    #[error("Input path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// No label files found in the input directory
    #[error("No label files (*.txt) found in {0}")]
    NoLabelFiles(PathBuf),

    /// Every label file was empty or below threshold
    #[error("No qualifying labels in {dir} (threshold {threshold})")]
    EmptyCorpus { dir: PathBuf, threshold: f32 },
}

/// Convenience type alias for Tagweave results.
pub type Result<T> = std::result::Result<T, TagweaveError>;
