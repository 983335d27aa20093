//! Grammar trait: the seam between the walker and a concrete tree-sitter
//! dialect.

use lexigraph_core::Classification;

/// Trait for per-language grammar support.
///
/// Each language implements this trait to supply its tree-sitter grammar
/// and the classification table mapping that grammar's construct names into
/// the shared taxonomy.
pub trait Grammar: Send + Sync {
    /// Human-readable language name (e.g. "python").
    fn name(&self) -> &str;

    /// Dialect tag stamped into every emitted `kind.namespace`. Two
    /// incompatible grammar revisions of the same language must use
    /// different namespaces.
    fn namespace(&self) -> &'static str;

    /// File extensions this grammar handles (e.g. `&["py"]`).
    fn extensions(&self) -> &[&str];

    /// The tree-sitter Language for configuring the parser.
    fn language(&self) -> tree_sitter::Language;

    /// Classify a normalized construct name into the shared taxonomy.
    ///
    /// Must never fail: unknown constructs fall back to the unclassified
    /// entry so grammar additions degrade gracefully instead of aborting
    /// a run.
    fn classify(&self, kind_name: &str) -> Classification;
}
