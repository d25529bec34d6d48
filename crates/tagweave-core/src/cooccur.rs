//! Label co-occurrence model.
//!
//! Built in a single pass over the corpus and threaded through the pipeline
//! as an immutable value. Similarity between two labels is Jaccard over the
//! item sets containing them: a pair never observed together scores 0.0.

use std::collections::HashMap;

use crate::types::Item;

/// Symmetric pairwise co-occurrence counts plus per-label item counts.
#[derive(Debug, Default)]
pub struct CooccurrenceTable {
    /// (a, b) with a < b lexicographically -> number of items containing both
    pair_counts: HashMap<(String, String), usize>,

    /// label -> number of items containing it
    item_counts: HashMap<String, usize>,
}

impl CooccurrenceTable {
    /// Build the table from per-item label sets.
    ///
    /// For every unordered pair of distinct labels in an item, the pair count
    /// is incremented once. O(sum of k^2) over per-item label counts, which
    /// stay small under the inclusion threshold.
    pub fn build(items: &[Item]) -> Self {
        let mut table = Self::default();

        for item in items {
            for label in &item.labels {
                *table.item_counts.entry(label.clone()).or_insert(0) += 1;
            }
            for (i, a) in item.labels.iter().enumerate() {
                for b in &item.labels[i + 1..] {
                    *table.pair_counts.entry(Self::key(a, b)).or_insert(0) += 1;
                }
            }
        }

        table
    }

    fn key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    /// Number of items containing both labels.
    pub fn pair_count(&self, a: &str, b: &str) -> usize {
        if a == b {
            return self.item_count(a);
        }
        self.pair_counts
            .get(&Self::key(a, b))
            .copied()
            .unwrap_or(0)
    }

    /// Number of items containing the label.
    pub fn item_count(&self, label: &str) -> usize {
        self.item_counts.get(label).copied().unwrap_or(0)
    }

    /// Jaccard similarity: |items with both| / |items with either|.
    ///
    /// Unknown labels and never-co-occurring pairs score 0.0.
    pub fn jaccard(&self, a: &str, b: &str) -> f64 {
        let both = self.pair_count(a, b);
        let either = self.item_count(a) + self.item_count(b) - both;
        if either == 0 {
            0.0
        } else {
            both as f64 / either as f64
        }
    }

    /// Number of distinct pairs observed.
    pub fn pair_len(&self) -> usize {
        self.pair_counts.len()
    }
}
