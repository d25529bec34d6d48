//! Label record file parsing.
//!
//! A record file holds one item's labels in the formats the external
//! taggers emit, mixed freely across lines:
//!
//! - a comma-separated label list: `long_hair, blue_eyes, smile`
//! - a `label: score` entry
//! - a `label, score` entry
//! - a bare label (score defaults to 1.0)
//!
//! Lines with unparseable scores are skipped; empty labels are dropped.

use std::path::Path;

use crate::types::LabelRecord;

/// Read all label records from one file.
///
/// I/O failures bubble up so the caller can decide whether the item is
/// skipped (per-item errors are warnings, not fatal).
pub fn read_records(path: &Path) -> std::io::Result<Vec<LabelRecord>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_content(&content))
}

/// Parse a record file body into label records.
pub fn parse_content(content: &str) -> Vec<LabelRecord> {
    let content = content.trim();
    if content.is_empty() {
        return Vec::new();
    }

    content.lines().flat_map(parse_line).collect()
}

/// Parse one line: a `label: score` or `label, score` entry, a
/// comma-separated label list, or a bare label.
fn parse_line(line: &str) -> Vec<LabelRecord> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    if let Some((label, score)) = line.split_once(':') {
        let label = label.trim();
        if label.is_empty() {
            return Vec::new();
        }
        // Unparseable score: skip the line rather than guess
        return match score.trim().parse::<f32>() {
            Ok(confidence) => vec![LabelRecord::new(label, confidence)],
            Err(_) => Vec::new(),
        };
    }

    // `label, 0.87` with a single trailing score
    if is_scored_line(line) {
        if let Some((label, score)) = line.split_once(',') {
            let label = label.trim();
            if label.is_empty() {
                return Vec::new();
            }
            if let Ok(confidence) = score.trim().parse::<f32>() {
                return vec![LabelRecord::new(label, confidence)];
            }
        }
    }

    // Any remaining commas mark a plain label list
    if line.contains(',') {
        return line
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty() && !is_numeric(t))
            .map(|t| LabelRecord::new(t, 1.0))
            .collect();
    }

    vec![LabelRecord::new(line, 1.0)]
}

/// True for a single line shaped like `label, 0.87` (one trailing score).
fn is_scored_line(line: &str) -> bool {
    match line.split_once(',') {
        Some((_, rest)) => rest.trim().parse::<f32>().is_ok() && !rest.contains(','),
        None => false,
    }
}

fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}
