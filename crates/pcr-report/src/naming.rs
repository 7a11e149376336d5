//! Default output file naming.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use pcr_core::Project;

/// Keep only characters that are safe in a file name on every platform we
/// care about: alphanumerics, space, `-` and `_`. Trailing whitespace is
/// dropped; an empty result falls back to `fallback`.
#[must_use]
pub fn safe_file_stem(name: &str, fallback: &str) -> String {
    let stem: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let stem = stem.trim_end();
    if stem.trim().is_empty() {
        fallback.to_string()
    } else {
        stem.to_string()
    }
}

/// `{dir}/{project name} - Cost Report - {YYYY-MM-DD HH-MM}.csv`
#[must_use]
pub fn default_report_path(dir: &Path, project: &Project, now: NaiveDateTime) -> PathBuf {
    let stem = safe_file_stem(&project.name, &safe_file_stem(&project.id, "project"));
    dir.join(format!(
        "{stem} - Cost Report - {}.csv",
        now.format("%Y-%m-%d %H-%M")
    ))
}
