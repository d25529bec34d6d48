//! Core data types for the Tagweave synthesis pipeline.

use serde::{Deserialize, Serialize};

/// A single label with its classifier confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Normalized label text (trimmed)
    pub label: String,

    /// Confidence score from 0.0 to 1.0 (1.0 when the file omits scores)
    pub confidence: f32,
}

impl LabelRecord {
    /// Create a new record with the given label and confidence.
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// One classified image's worth of labels.
///
/// Items are read-only co-occurrence evidence: the ordered list of labels
/// that passed the inclusion threshold, deduplicated, keyed by an opaque
/// identifier derived from the source filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Identifier derived from the source filename (stem)
    pub id: String,

    /// Labels that passed the threshold, in file order, no duplicates
    pub labels: Vec<String>,
}

impl Item {
    /// Create an item from an id and its qualifying labels.
    pub fn new(id: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            id: id.into(),
            labels,
        }
    }
}

/// A bounded-size cluster of related labels within one category.
///
/// The unit of synthesized output: 1..=max_group_size labels, no duplicates,
/// insertion-ordered (seed label first). Groups carry no back-reference to
/// the items they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroup {
    labels: Vec<String>,
}

impl TagGroup {
    /// Create a group from an ordered label list.
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// The labels in this group, in synthesis order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels in the group.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the group is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Render the group as a comma-joined template line.
    pub fn join(&self) -> String {
        self.labels.join(", ")
    }
}
