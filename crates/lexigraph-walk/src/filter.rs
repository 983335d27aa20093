//! Change-set path filtering and project-relative path normalization.
//!
//! Changed-file paths arrive from the caller in whatever shape its VCS
//! tooling produced; everything is normalized to `./`-prefixed,
//! forward-slash form before comparison so incremental runs match the
//! paths the walker stamps into `filename` properties.

use std::collections::HashSet;
use std::path::Path;

/// Decides which files participate in a run.
///
/// An empty change-set selects every eligible file (full-project mode);
/// otherwise only listed files are traversed.
#[derive(Debug, Clone)]
pub struct PathFilter {
    changed: HashSet<String>,
}

impl PathFilter {
    pub fn new(changed_files: &[String]) -> Self {
        Self {
            changed: changed_files.iter().map(|f| Self::normalize(f)).collect(),
        }
    }

    /// Normalize a path string to `./`-prefixed forward-slash form.
    /// The bare project root stays `"."`.
    pub fn normalize(path: &str) -> String {
        let path = path.replace('\\', "/");
        if path == "." || path.starts_with("./") {
            path
        } else {
            format!("./{path}")
        }
    }

    /// Whether a project-relative path is selected for traversal.
    pub fn selects(&self, rel_path: &str) -> bool {
        self.changed.is_empty() || self.changed.contains(rel_path)
    }

    /// True in full-project mode (no change-set supplied).
    pub fn selects_all(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Render a path relative to the project root in normalized form.
/// The root itself renders as `"."`.
pub fn project_relative(base: &Path, path: &Path) -> String {
    if path == base {
        return ".".to_string();
    }
    let rel = path.strip_prefix(base).unwrap_or(path);
    PathFilter::normalize(&rel.to_string_lossy())
}
