//! Template library assembly and serialization.
//!
//! The final artifact: an ordered section -> template-line mapping. The
//! synthetic `character_main` section is always first and references every
//! non-empty category symbolically (`__section__`); the placeholders are
//! substituted by the downstream templating engine at use time, never here.

use serde::Serialize;

use crate::classify::{self, Category};
use crate::types::TagGroup;

/// Subject archetype prefixes for the `character_main` template lines.
const SINGLE_SUBJECT_PREFIX: &str = "1girl, solo";
const MULTI_SUBJECT_PREFIX: &str = "2girls, multiple girls";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Sectioned wildcard text (the hand-editable default)
    Wildcard,
    /// JSON rendering of the same structure
    Json,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wildcard" | "yaml" => Some(Self::Wildcard),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// One serialized section: a name and its template lines.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub name: String,
    pub lines: Vec<String>,
}

/// The assembled category -> tag-group library.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateLibrary {
    sections: Vec<Section>,
}

impl TemplateLibrary {
    /// Assemble the library from subject markers and per-category groups.
    ///
    /// `groups` must be in display order. Categories with zero groups are
    /// omitted entirely: they get no section and no back-reference in the
    /// `character_main` lines (sparse categories are expected, not errors).
    /// The single-subject archetype is always emitted; the multi-subject
    /// archetype only when a multi-subject marker was observed.
    pub fn assemble(subject_labels: &[String], groups: Vec<(Category, Vec<TagGroup>)>) -> Self {
        let references: Vec<String> = groups
            .iter()
            .filter(|(_, g)| !g.is_empty())
            .map(|(category, _)| format!("__{}__", category.section()))
            .collect();

        let mut main_lines = vec![main_line(SINGLE_SUBJECT_PREFIX, &references)];
        if subject_labels.iter().any(|l| classify::is_multi_subject(l)) {
            main_lines.push(main_line(MULTI_SUBJECT_PREFIX, &references));
        }

        let mut sections = vec![Section {
            name: Category::Subject.section().to_string(),
            lines: main_lines,
        }];

        for (category, category_groups) in groups {
            if category_groups.is_empty() {
                continue;
            }
            sections.push(Section {
                name: category.section().to_string(),
                lines: category_groups.iter().map(TagGroup::join).collect(),
            });
        }

        Self { sections }
    }

    /// Sections in serialization order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Render in the requested format.
    pub fn render(&self, format: OutputFormat, pretty: bool) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Wildcard => Ok(self.to_wildcard()),
            OutputFormat::Json => {
                if pretty {
                    serde_json::to_string_pretty(self)
                } else {
                    serde_json::to_string(self)
                }
            }
        }
    }

    /// Render as sectioned wildcard text.
    ///
    /// Format is stable and hand-editable: a `name:` header, one quoted
    /// `  - "..."` entry per line, exactly one blank line between sections.
    pub fn to_wildcard(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&section.name);
            out.push_str(":\n");
            for line in &section.lines {
                out.push_str(&format!("  - \"{line}\"\n"));
            }
        }
        out
    }
}

fn main_line(prefix: &str, references: &[String]) -> String {
    if references.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}, {}", references.join(", "))
    }
}
