//! Configuration management for Tagweave.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. All config structs implement `Default`; CLI flags override
//! loaded values before validation.

use crate::error::ConfigError;
use crate::synth::SeedPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Labels stripped from the corpus by default: watermark/meta tags that
/// describe the source file rather than the depicted content.
pub const DEFAULT_EXCLUDE_LABELS: &[&str] = &[
    "sample",
    "watermark",
    "english text",
    "artist name",
    "cover",
    "artist logo",
    "web address",
    "doujin cover",
    "content rating",
    "novel cover",
    "copyright name",
    "company name",
    "logo",
    "chinese text",
    "character name",
    "character profile",
    "fake screenshot",
    "stats",
    "pixelated",
    "mosaic censoring",
    "censored",
    "copyright notice",
];

/// Root configuration structure for Tagweave.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Label ingestion settings
    pub ingest: IngestConfig,

    /// Group synthesis settings
    pub synthesis: SynthesisConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories, falling back to
    /// ~/.tagweave/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("io", "tagweave", "tagweave")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".tagweave").join("config.toml")
            })
    }

    /// Check value ranges across all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.ingest.threshold) {
            return Err(ConfigError::ValidationError(format!(
                "ingest.threshold must be in [0, 1], got {}",
                self.ingest.threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.synthesis.similarity_threshold) {
            return Err(ConfigError::ValidationError(format!(
                "synthesis.similarity_threshold must be in [0, 1], got {}",
                self.synthesis.similarity_threshold
            )));
        }
        if self.synthesis.min_group_size == 0 {
            return Err(ConfigError::ValidationError(
                "synthesis.min_group_size must be at least 1".to_string(),
            ));
        }
        if self.synthesis.max_group_size < self.synthesis.min_group_size {
            return Err(ConfigError::ValidationError(format!(
                "synthesis.max_group_size ({}) must be >= min_group_size ({})",
                self.synthesis.max_group_size, self.synthesis.min_group_size
            )));
        }
        Ok(())
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Label ingestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Minimum classifier confidence to keep a label
    pub threshold: f32,

    /// Labels removed entirely before classification (case-insensitive)
    pub exclude_labels: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            threshold: 0.35,
            exclude_labels: DEFAULT_EXCLUDE_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Group synthesis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Minimum group size for the greedy pass (residual chunks may be smaller)
    pub min_group_size: usize,

    /// Maximum labels per group
    pub max_group_size: usize,

    /// Minimum Jaccard similarity for a label to join a growing group
    pub similarity_threshold: f64,

    /// How the seed label of each group is chosen
    pub seed_policy: SeedPolicy,

    /// RNG seed for the random seed policy (reproducibility)
    pub rng_seed: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            min_group_size: 3,
            max_group_size: 10,
            similarity_threshold: 0.5,
            seed_policy: SeedPolicy::Frequency,
            rng_seed: 0,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("wildcard" or "json")
    pub format: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "wildcard".to_string(),
            pretty: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
