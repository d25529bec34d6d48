//! Rule-based label categorization.
//!
//! Routes each free-text label into exactly one semantic category via
//! ordered substring matching against the canonical keyword table.

mod keywords;

pub use keywords::{MULTI_SUBJECT_MARKERS, SINGLE_SUBJECT_MARKERS};

use keywords::{ORDERED_KEYWORDS, SUBJECT_MARKERS};
use serde::{Deserialize, Serialize};

/// Fixed set of semantic buckets a label is routed into.
///
/// `Subject` is the reserved bucket for subject-count/gender markers
/// (matched exactly, never by substring); everything else is matched by
/// keyword in the order of [`Category::DISPLAY_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Main-subject markers (1girl, solo, 2girls, ...)
    Subject,
    /// Hair, eyes, and other facial attributes
    Face,
    /// Body attributes
    Body,
    /// Clothing and accessories
    Clothing,
    /// Poses and body positions
    Pose,
    /// Facial expressions and emotions
    Emotion,
    /// Camera angle and framing
    Angle,
    /// Scenery and background elements
    Background,
    /// Art style, medium, and rendering quality
    Style,
    /// Explicit content
    Explicit,
    /// No keyword matched
    Uncategorized,
}

impl Category {
    /// Categories in serialized section order, `Subject` excluded
    /// (it is rendered as the synthetic `character_main` section).
    pub const DISPLAY_ORDER: [Category; 10] = [
        Category::Face,
        Category::Body,
        Category::Clothing,
        Category::Pose,
        Category::Emotion,
        Category::Angle,
        Category::Background,
        Category::Style,
        Category::Explicit,
        Category::Uncategorized,
    ];

    /// Section name used in the serialized template library.
    pub fn section(&self) -> &'static str {
        match self {
            Category::Subject => "character_main",
            Category::Face => "character_face",
            Category::Body => "character_body",
            Category::Clothing => "clothing",
            Category::Pose => "pose",
            Category::Emotion => "emotion",
            Category::Angle => "angle",
            Category::Background => "background",
            Category::Style => "style",
            Category::Explicit => "sexual",
            Category::Uncategorized => "uncategorized",
        }
    }
}

/// Lowercase a label and fold spaces to underscores for matching.
fn normalize(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Assign a label to its category.
///
/// Deterministic, pure function of the label text and the static keyword
/// table. Subject markers are matched exactly and checked first; all other
/// categories are scanned in a fixed priority order, first match wins. The
/// ordering is significant: hair/eye keywords route "blue_hair" to `Face`
/// before any generic color or body keyword can claim it, and `Body` is
/// checked before `Explicit`, so overlap terms like "breasts" file under
/// `Body`. No match at all yields `Uncategorized`.
pub fn classify(label: &str) -> Category {
    let normalized = normalize(label);

    if SUBJECT_MARKERS.contains(&normalized.as_str()) {
        return Category::Subject;
    }

    for (category, keyword_set) in ORDERED_KEYWORDS {
        if keyword_set.iter().any(|k| normalized.contains(k)) {
            return *category;
        }
    }

    Category::Uncategorized
}

/// True if the (normalized) label is a single-subject marker.
pub fn is_single_subject(label: &str) -> bool {
    SINGLE_SUBJECT_MARKERS.contains(&normalize(label).as_str())
}

/// True if the (normalized) label is a multi-subject marker.
pub fn is_multi_subject(label: &str) -> bool {
    MULTI_SUBJECT_MARKERS.contains(&normalize(label).as_str())
}
