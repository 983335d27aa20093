//! Pre-order AST walk.
//!
//! Visits every named syntax node depth-first, allocating keys in visit
//! order, so a parent's key always precedes all of its descendants' keys
//! in the emitted stream. An explicit ancestor stack keeps the enclosing
//! parent key available in O(1) and carries the per-parent child-key lists
//! that become `olderSiblings`.

use lexigraph_core::{normalize_kind_name, GraphNode, KeyAllocator, Kind, LexigraphError};
use tree_sitter::Node as SyntaxNode;

use crate::emit::NodeSink;
use crate::grammar::Grammar;

/// Named trivia the emitted dialect does not model: comments, line
/// continuations, and string delimiter tokens. Skipped without recursion.
const SKIPPED_KINDS: &[&str] = &["comment", "line_continuation", "string_start", "string_end"];

/// Walks one parsed syntax tree, emitting one node per named syntax
/// element.
pub struct AstWalker<'a, S: NodeSink> {
    filename: &'a str,
    source: &'a [u8],
    grammar: &'a dyn Grammar,
    keys: &'a mut KeyAllocator,
    sink: &'a mut S,
    stack: Vec<GraphNode>,
    /// Child keys recorded directly under the external parent.
    top_siblings: Vec<String>,
    emitted: usize,
}

impl<'a, S: NodeSink> AstWalker<'a, S> {
    pub fn new(
        filename: &'a str,
        source: &'a [u8],
        grammar: &'a dyn Grammar,
        keys: &'a mut KeyAllocator,
        sink: &'a mut S,
    ) -> Self {
        Self {
            filename,
            source,
            grammar,
            keys,
            sink,
            stack: Vec::new(),
            top_siblings: Vec::new(),
            emitted: 0,
        }
    }

    /// Walk the tree rooted at `root`, attaching its top-level node(s)
    /// under `parent_key`. Returns the number of nodes emitted.
    pub fn walk(mut self, root: SyntaxNode<'_>, parent_key: &str) -> Result<usize, LexigraphError> {
        self.visit(root, parent_key)?;
        Ok(self.emitted)
    }

    fn visit(&mut self, syntax: SyntaxNode<'_>, external_parent: &str) -> Result<(), LexigraphError> {
        if !syntax.is_named() || SKIPPED_KINDS.contains(&syntax.kind()) {
            return Ok(());
        }

        let kind_name = normalize_kind_name(syntax.kind());
        let classification = self.grammar.classify(&kind_name);

        let mut node = GraphNode::new(
            self.keys.next(),
            Kind::new(self.grammar.namespace(), kind_name, classification.orderable),
            classification.common_kind,
        );

        node.set_property("filename", self.filename);
        let start = syntax.start_position();
        let end = syntax.end_position();
        node.set_property("start_line", start.row + 1);
        node.set_property("start_column", start.column);
        node.set_property("end_line", end.row + 1);
        node.set_property("end_column", end.column);

        if matches!(syntax.kind(), "function_definition" | "class_definition") {
            if let Some(name) = syntax.child_by_field_name("name") {
                node.set_property("name", node_text(name, self.source));
            }
        }

        match self.stack.last() {
            Some(parent) => {
                node.parent_key = parent.key.clone();
                node.older_siblings = parent.children.clone();
            }
            None => {
                node.parent_key = external_parent.to_string();
                node.older_siblings = self.top_siblings.clone();
            }
        }

        self.sink.emit(&node)?;
        self.emitted += 1;

        let key = node.key.clone();
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(key),
            None => self.top_siblings.push(key),
        }

        self.stack.push(node);
        let mut cursor = syntax.walk();
        let children: Vec<SyntaxNode<'_>> = syntax.named_children(&mut cursor).collect();
        for child in children {
            self.visit(child, external_parent)?;
        }
        self.stack.pop();

        Ok(())
    }
}

fn node_text(node: SyntaxNode<'_>, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or("").to_string()
}
