//! Label ingestion: file discovery, record parsing, and corpus assembly.

pub mod discovery;
pub mod reader;

use std::collections::HashMap;
use std::path::Path;

use crate::config::IngestConfig;
use crate::error::{IngestError, Result};
use crate::types::Item;

/// The loaded corpus: per-item label sets plus the global frequency table.
///
/// Built in one pass and immutable afterwards. The exclusion list and the
/// confidence threshold are applied here, so nothing downstream ever sees
/// an excluded or sub-threshold label.
#[derive(Debug)]
pub struct Corpus {
    /// One entry per item that had at least one qualifying label
    pub items: Vec<Item>,

    /// label -> number of items containing it
    pub frequencies: HashMap<String, usize>,
}

impl Corpus {
    /// Load the corpus from a directory of label record files.
    ///
    /// A missing directory or zero qualifying files is fatal. A single
    /// unreadable file is not: the item is skipped with a warning so one
    /// bad file cannot abort the whole batch.
    pub fn load(dir: &Path, options: &IngestConfig) -> Result<Self> {
        let files = discovery::discover(dir)?;
        tracing::info!("Found {} label file(s) in {}", files.len(), dir.display());

        let excluded: Vec<String> = options
            .exclude_labels
            .iter()
            .map(|l| l.trim().to_lowercase())
            .collect();

        let mut items = Vec::new();
        let mut frequencies: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0usize;

        for path in &files {
            let records = match reader::read_records(path) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Skipping unreadable label file {}: {e}", path.display());
                    skipped += 1;
                    continue;
                }
            };

            let mut labels: Vec<String> = Vec::new();
            for record in records {
                if record.confidence < options.threshold {
                    continue;
                }
                let label = record.label.trim().to_string();
                if label.is_empty() {
                    continue;
                }
                if excluded.contains(&label.to_lowercase()) {
                    continue;
                }
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }

            if labels.is_empty() {
                continue;
            }

            for label in &labels {
                *frequencies.entry(label.clone()).or_insert(0) += 1;
            }

            let id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("item")
                .to_string();
            items.push(Item::new(id, labels));
        }

        if skipped > 0 {
            tracing::warn!("{skipped} label file(s) skipped due to read errors");
        }

        if items.is_empty() {
            return Err(IngestError::EmptyCorpus {
                dir: dir.to_path_buf(),
                threshold: options.threshold,
            }
            .into());
        }

        tracing::info!(
            "Loaded {} item(s), {} unique label(s)",
            items.len(),
            frequencies.len(),
        );

        Ok(Self { items, frequencies })
    }

    /// The filtered label vocabulary in deterministic order
    /// (frequency descending, then name).
    pub fn vocabulary(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.frequencies.keys().cloned().collect();
        labels.sort_by(|a, b| {
            self.frequencies[b]
                .cmp(&self.frequencies[a])
                .then_with(|| a.cmp(b))
        });
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_basic_corpus() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "001.txt", "long_hair, blue_eyes, smile");
        write(dir.path(), "002.txt", "long_hair, frown");

        let options = IngestConfig {
            threshold: 0.0,
            exclude_labels: vec![],
        };
        let corpus = Corpus::load(dir.path(), &options).unwrap();

        assert_eq!(corpus.items.len(), 2);
        assert_eq!(corpus.items[0].id, "001");
        assert_eq!(corpus.frequencies["long_hair"], 2);
        assert_eq!(corpus.frequencies["smile"], 1);
    }

    #[test]
    fn test_threshold_filters_labels() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "001.txt", "long_hair: 0.9\nsmile: 0.2");

        let options = IngestConfig {
            threshold: 0.5,
            exclude_labels: vec![],
        };
        let corpus = Corpus::load(dir.path(), &options).unwrap();

        assert_eq!(corpus.items[0].labels, vec!["long_hair"]);
        assert!(!corpus.frequencies.contains_key("smile"));
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "001.txt", "Pool, long_hair");

        let options = IngestConfig {
            threshold: 0.0,
            exclude_labels: vec!["pool".to_string()],
        };
        let corpus = Corpus::load(dir.path(), &options).unwrap();

        assert_eq!(corpus.items[0].labels, vec!["long_hair"]);
        assert!(!corpus.frequencies.contains_key("Pool"));
    }

    #[test]
    fn test_item_with_no_qualifying_labels_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "001.txt", "smile: 0.1");
        write(dir.path(), "002.txt", "smile: 0.9");

        let options = IngestConfig {
            threshold: 0.5,
            exclude_labels: vec![],
        };
        let corpus = Corpus::load(dir.path(), &options).unwrap();
        assert_eq!(corpus.items.len(), 1);
        assert_eq!(corpus.items[0].id, "002");
    }

    #[test]
    fn test_all_filtered_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "001.txt", "smile: 0.1");

        let options = IngestConfig {
            threshold: 0.9,
            exclude_labels: vec![],
        };
        assert!(Corpus::load(dir.path(), &options).is_err());
    }

    #[test]
    fn test_duplicate_labels_deduped_per_item() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "001.txt", "smile, smile, long_hair");

        let options = IngestConfig {
            threshold: 0.0,
            exclude_labels: vec![],
        };
        let corpus = Corpus::load(dir.path(), &options).unwrap();
        assert_eq!(corpus.items[0].labels, vec!["smile", "long_hair"]);
        assert_eq!(corpus.frequencies["smile"], 1);
    }

    #[test]
    fn test_vocabulary_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "001.txt", "b_common, a_common, rare");
        write(dir.path(), "002.txt", "b_common, a_common");

        let options = IngestConfig {
            threshold: 0.0,
            exclude_labels: vec![],
        };
        let corpus = Corpus::load(dir.path(), &options).unwrap();
        assert_eq!(corpus.vocabulary(), vec!["a_common", "b_common", "rare"]);
    }
}
