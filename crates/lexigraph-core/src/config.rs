//! Project-local configuration for the directory walker.
//!
//! Loads/saves a TOML config at `<project root>/lexigraph.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::LexigraphError;

/// Knobs for the filesystem side of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Directory names never entered during traversal.
    pub skip_dirs: Vec<String>,
    /// Whether to follow symlinks while scanning subtrees for eligibility.
    pub follow_links: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            skip_dirs: [
                ".git",
                ".hg",
                "__pycache__",
                "node_modules",
                "target",
                "vendor",
                "dist",
                "build",
                ".venv",
                "venv",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            follow_links: false,
        }
    }
}

impl WalkConfig {
    /// File name looked up under the project root.
    pub const FILE_NAME: &'static str = "lexigraph.toml";

    /// Load configuration from the given path.
    pub fn load(path: &Path) -> Result<Self, LexigraphError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| LexigraphError::Config(e.to_string()))
    }

    /// Save configuration to the given path.
    pub fn save(&self, path: &Path) -> Result<(), LexigraphError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| LexigraphError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `<root>/lexigraph.toml` if present, else the defaults.
    pub fn load_or_default(root: &Path) -> Self {
        let path = Self::default_path(root);
        if path.exists() {
            Self::load(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Default config path for a project root.
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(Self::FILE_NAME)
    }

    /// Whether a directory name is excluded from traversal.
    pub fn skips_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|d| d == name)
    }
}
