//! Parse coordinator.
//!
//! Detects the grammar from the file extension, configures a tree-sitter
//! parser, and hands back the parsed tree together with its grammar. Files
//! the parser rejects surface as per-file `Parse` errors, never as run
//! aborts.

use std::path::Path;

use lexigraph_core::LexigraphError;
use tree_sitter::Parser;

use crate::grammar::Grammar;
use crate::languages;

/// A successfully parsed file: the tree plus the grammar that produced it.
pub struct ParsedFile<'p> {
    pub grammar: &'p dyn Grammar,
    pub tree: tree_sitter::Tree,
}

impl std::fmt::Debug for ParsedFile<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("grammar", &self.grammar.name())
            .field("tree", &self.tree)
            .finish()
    }
}

/// Coordinates tree-sitter parsing across the registered grammars.
pub struct SourceParser {
    grammars: Vec<Box<dyn Grammar>>,
}

impl SourceParser {
    /// Create a SourceParser with all registered grammars.
    pub fn new() -> Self {
        Self {
            grammars: languages::all_grammars(),
        }
    }

    /// Parse one file's contents.
    ///
    /// Returns `Parse` when the grammar produces no tree or the tree
    /// contains syntax errors; the caller skips the file's interior and
    /// continues. Returns `Unsupported` for an extension no grammar
    /// handles; project traversal pre-filters by extension, so that case
    /// only surfaces on direct misuse.
    pub fn parse_file(&self, path: &str, content: &[u8]) -> Result<ParsedFile<'_>, LexigraphError> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| LexigraphError::Unsupported(path.to_string()))?;

        let grammar = self
            .grammar_for_extension(extension)
            .ok_or_else(|| LexigraphError::Unsupported(path.to_string()))?;

        let mut parser = Parser::new();
        parser
            .set_language(&grammar.language())
            .map_err(|e| LexigraphError::Parse(format!("{path}: {e}")))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| LexigraphError::Parse(format!("{path}: parser produced no tree")))?;

        if tree.root_node().has_error() {
            return Err(LexigraphError::Parse(format!(
                "{path}: source contains syntax errors"
            )));
        }

        Ok(ParsedFile { grammar, tree })
    }

    /// Check if a given file extension is supported by any grammar.
    pub fn supports_extension(&self, ext: &str) -> bool {
        self.grammars.iter().any(|g| g.extensions().contains(&ext))
    }

    /// The namespace stamped onto filesystem-level nodes (project, dir,
    /// file): the first registered grammar's dialect tag.
    pub fn primary_namespace(&self) -> &'static str {
        self.grammars[0].namespace()
    }

    fn grammar_for_extension(&self, ext: &str) -> Option<&dyn Grammar> {
        self.grammars
            .iter()
            .find(|g| g.extensions().contains(&ext))
            .map(|g| g.as_ref())
    }
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}
