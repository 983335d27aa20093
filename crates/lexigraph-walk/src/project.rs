//! Filesystem layer of the walk.
//!
//! Emits the synthetic project root, then walks directories depth-first
//! with entries sorted by name. A directory node is emitted only when its
//! subtree holds at least one eligible file, decided by a pre-scan, so
//! the stream stays in strict pre-order (every parent precedes all of its
//! descendants) while empty branches are pruned entirely. Failures are
//! local: an unreadable or unparseable file is logged and skipped, and
//! traversal continues with its siblings.

use std::fs;
use std::path::{Path, PathBuf};

use lexigraph_core::{CommonKind, GraphNode, KeyAllocator, Kind, LexigraphError, WalkConfig};
use walkdir::WalkDir;

use crate::emit::NodeSink;
use crate::filter::{project_relative, PathFilter};
use crate::parser::SourceParser;
use crate::walker::AstWalker;

/// Counters for one completed run.
#[derive(Debug, Default)]
pub struct WalkSummary {
    /// Files parsed and walked successfully.
    pub files_parsed: usize,
    /// Files skipped on read or parse failure.
    pub files_failed: usize,
    /// Eligible-extension files excluded by the change-set.
    pub files_filtered: usize,
    /// Directory nodes emitted.
    pub dirs_emitted: usize,
    /// Total nodes emitted, filesystem and syntax combined.
    pub nodes_emitted: usize,
}

/// Drives one whole run: project node, directory recursion, per-file
/// parse + AST walk.
pub struct ProjectWalker<'a, S: NodeSink> {
    base_dir: PathBuf,
    keys: KeyAllocator,
    parser: SourceParser,
    filter: PathFilter,
    config: WalkConfig,
    namespace: &'static str,
    sink: &'a mut S,
    summary: WalkSummary,
}

impl<'a, S: NodeSink> ProjectWalker<'a, S> {
    /// Build a walker for one run. Fails only on a malformed trunk seed,
    /// the single fatal precondition, checked before any traversal.
    pub fn new(
        base_dir: &Path,
        trunk_seed: &str,
        changed_files: &[String],
        config: WalkConfig,
        sink: &'a mut S,
    ) -> Result<Self, LexigraphError> {
        let keys = KeyAllocator::new(trunk_seed)?;
        let parser = SourceParser::new();
        let namespace = parser.primary_namespace();
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            keys,
            parser,
            filter: PathFilter::new(changed_files),
            config,
            namespace,
            sink,
            summary: WalkSummary::default(),
        })
    }

    /// Run the walk to completion and return the summary.
    pub fn run(mut self) -> Result<WalkSummary, LexigraphError> {
        let mut project = GraphNode::new(
            self.keys.root_key().to_string(),
            Kind::new(self.namespace, "project", false),
            CommonKind::Project,
        );
        project.set_property("filename", ".");
        self.emit(&project)?;

        let base = self.base_dir.clone();
        if self.subtree_has_eligible(&base) {
            self.walk_dir(&project.key, &base, Vec::new())?;
        }

        tracing::info!(
            "Walked {}: {} files parsed, {} failed, {} filtered by change-set, {} dirs, {} nodes emitted",
            self.base_dir.display(),
            self.summary.files_parsed,
            self.summary.files_failed,
            self.summary.files_filtered,
            self.summary.dirs_emitted,
            self.summary.nodes_emitted,
        );

        Ok(self.summary)
    }

    /// Emit one directory node, then its entries in sorted order.
    /// The caller has already established that this subtree is eligible.
    fn walk_dir(
        &mut self,
        parent_key: &str,
        dir: &Path,
        older_siblings: Vec<String>,
    ) -> Result<String, LexigraphError> {
        let rel = project_relative(&self.base_dir, dir);

        let mut node = GraphNode::new(
            self.keys.next(),
            Kind::new(self.namespace, "dir", false),
            CommonKind::Dir,
        );
        node.parent_key = parent_key.to_string();
        node.older_siblings = older_siblings;
        node.set_property("filename", rel.clone());
        self.emit(&node)?;
        self.summary.dirs_emitted += 1;
        let dir_key = node.key;

        let mut entries: Vec<fs::DirEntry> = match fs::read_dir(dir) {
            Ok(iter) => iter.filter_map(Result::ok).collect(),
            Err(err) => {
                tracing::warn!("failed to list {rel}: {err}");
                return Ok(dir_key);
            }
        };
        entries.sort_by_key(|entry| entry.file_name());

        let mut children: Vec<String> = Vec::new();
        for entry in entries {
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(err) => {
                    tracing::warn!("failed to stat {}: {err}", path.display());
                    continue;
                }
            };

            if file_type.is_dir() {
                let name = entry.file_name();
                if self.config.skips_dir(&name.to_string_lossy()) {
                    continue;
                }
                if self.subtree_has_eligible(&path) {
                    let key = self.walk_dir(&dir_key, &path, children.clone())?;
                    children.push(key);
                }
            } else if file_type.is_file() {
                if let Some(key) = self.walk_file(&dir_key, &path, children.clone())? {
                    children.push(key);
                }
            }
        }

        Ok(dir_key)
    }

    /// Emit one file node and walk its syntax tree.
    ///
    /// Returns the file node's key, or `None` when the file did not
    /// participate (wrong extension, filtered out, or unreadable). A file
    /// the parser rejects keeps its file node but contributes no interior.
    fn walk_file(
        &mut self,
        parent_key: &str,
        path: &Path,
        older_siblings: Vec<String>,
    ) -> Result<Option<String>, LexigraphError> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Ok(None);
        };
        if !self.parser.supports_extension(ext) {
            return Ok(None);
        }

        let rel = project_relative(&self.base_dir, path);
        if !self.filter.selects(&rel) {
            self.summary.files_filtered += 1;
            return Ok(None);
        }

        let content = match fs::read(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("failed to read {rel}: {err}");
                self.summary.files_failed += 1;
                return Ok(None);
            }
        };

        let mut node = GraphNode::new(
            self.keys.next(),
            Kind::new(self.namespace, "file", true),
            CommonKind::File,
        );
        node.parent_key = parent_key.to_string();
        node.older_siblings = older_siblings;
        node.set_property("filename", rel.clone());
        self.emit(&node)?;
        let file_key = node.key;

        match self.parser.parse_file(&rel, &content) {
            Ok(parsed) => {
                let walker = AstWalker::new(
                    &rel,
                    &content,
                    parsed.grammar,
                    &mut self.keys,
                    &mut *self.sink,
                );
                let emitted = walker.walk(parsed.tree.root_node(), &file_key)?;
                self.summary.nodes_emitted += emitted;
                self.summary.files_parsed += 1;
            }
            Err(err) => {
                tracing::warn!("skipping contents of {rel}: {err}");
                self.summary.files_failed += 1;
            }
        }

        Ok(Some(file_key))
    }

    /// Whether a subtree holds at least one eligible file. Directories
    /// with none are pruned from the output entirely.
    fn subtree_has_eligible(&self, dir: &Path) -> bool {
        let walker = WalkDir::new(dir)
            .follow_links(self.config.follow_links)
            .into_iter()
            .filter_entry(|entry| {
                // depth 0 is the scan root itself; only descendants are
                // subject to the skip list
                if entry.depth() > 0 && entry.file_type().is_dir() {
                    !self.config.skips_dir(&entry.file_name().to_string_lossy())
                } else {
                    true
                }
            });

        for entry in walker.flatten() {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !self.parser.supports_extension(ext) {
                continue;
            }
            let rel = project_relative(&self.base_dir, entry.path());
            if self.filter.selects(&rel) {
                return true;
            }
        }

        false
    }

    fn emit(&mut self, node: &GraphNode) -> Result<(), LexigraphError> {
        self.sink.emit(node)?;
        self.summary.nodes_emitted += 1;
        Ok(())
    }
}
