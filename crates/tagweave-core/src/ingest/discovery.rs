//! Label file discovery.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::IngestError;

/// Find all label record files (*.txt) under the input directory.
///
/// Results are sorted by path for deterministic ordering. A missing or
/// non-directory input and an empty result are both fatal: the run must
/// abort before any output is written.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    if !dir.exists() {
        return Err(IngestError::MissingInput(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(IngestError::NotADirectory(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_label_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();

    if files.is_empty() {
        return Err(IngestError::NoLabelFiles(dir.to_path_buf()));
    }

    Ok(files)
}

fn is_label_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}
