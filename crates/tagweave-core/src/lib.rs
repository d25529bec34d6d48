//! Tagweave Core - wildcard template synthesis from tagged image corpora.
//!
//! Tagweave ingests per-image label files produced by an external vision
//! tagger and synthesizes a sectioned prompt-template ("wildcard") library
//! for generative image synthesis.
//!
//! # Architecture
//!
//! A pure, single-pass batch pipeline:
//!
//! ```text
//! Label files → Corpus → Classify → Co-occurrence → Synthesize → Library
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use tagweave_core::{build_library, Config, OutputFormat};
//!
//! fn main() -> tagweave_core::Result<()> {
//!     let config = Config::load()?;
//!     let library = build_library(&config, std::path::Path::new("./tags"))?;
//!     println!("{}", library.to_wildcard());
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod config;
pub mod cooccur;
pub mod error;
pub mod ingest;
pub mod synth;
pub mod template;
pub mod types;

pub use classify::{classify, Category};
pub use config::Config;
pub use cooccur::CooccurrenceTable;
pub use error::{ConfigError, IngestError, Result, TagweaveError};
pub use ingest::Corpus;
pub use synth::{synthesize, SeedPolicy, SynthOptions};
pub use template::{OutputFormat, TemplateLibrary};
pub use types::{Item, LabelRecord, TagGroup};

use std::collections::HashMap;
use std::path::Path;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the whole pipeline: load the corpus at `input` and synthesize the
/// template library.
///
/// The library is built entirely in memory; callers write it out in a single
/// step, so a failing run never leaves a partial artifact behind.
pub fn build_library(config: &Config, input: &Path) -> Result<TemplateLibrary> {
    let corpus = Corpus::load(input, &config.ingest)?;
    let table = CooccurrenceTable::build(&corpus.items);
    tracing::debug!("Co-occurrence table: {} pair(s)", table.pair_len());

    // Route every vocabulary label into exactly one category. Vocabulary
    // order is deterministic, so per-category lists are too.
    let mut by_category: HashMap<Category, Vec<String>> = HashMap::new();
    for label in corpus.vocabulary() {
        by_category.entry(classify(&label)).or_default().push(label);
    }

    let subject_labels = by_category.remove(&Category::Subject).unwrap_or_default();
    let options = SynthOptions::from(&config.synthesis);

    let mut groups = Vec::new();
    for category in Category::DISPLAY_ORDER {
        let labels = by_category.remove(&category).unwrap_or_default();
        let category_groups = synthesize(&labels, &corpus.frequencies, &table, &options);
        tracing::info!(
            "{}: {} label(s) in {} group(s)",
            category.section(),
            labels.len(),
            category_groups.len(),
        );
        groups.push((category, category_groups));
    }

    Ok(TemplateLibrary::assemble(&subject_labels, groups))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_build_library_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["001.txt", "002.txt", "003.txt"] {
            std::fs::write(
                dir.path().join(name),
                "1girl, long_hair, blue_eyes, smile, school_uniform",
            )
            .unwrap();
        }

        let mut config = Config::default();
        config.ingest.threshold = 0.0;

        let library = build_library(&config, dir.path()).unwrap();
        let text = library.to_wildcard();

        assert!(text.starts_with("character_main:"));
        assert!(text.contains("long_hair"));
        assert!(text.contains("school_uniform"));
    }
}
