//! Graph emission.
//!
//! Nodes are serialized the instant they are created, one JSON object per
//! line (a streaming format, not an enclosing array) so downstream
//! consumers can begin ingesting before a run completes and a crash
//! mid-run leaves a well-formed prefix. Emission order is exactly
//! traversal order; memory use is bounded by traversal depth, not
//! project size.

use std::io::Write;

use lexigraph_core::{GraphNode, LexigraphError};

/// Anything that accepts nodes in emission order.
pub trait NodeSink {
    fn emit(&mut self, node: &GraphNode) -> Result<(), LexigraphError>;
}

/// Streaming sink: one compact JSON object per line.
pub struct JsonLinesEmitter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush the underlying writer at end of run.
    pub fn flush(&mut self) -> Result<(), LexigraphError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> NodeSink for JsonLinesEmitter<W> {
    fn emit(&mut self, node: &GraphNode) -> Result<(), LexigraphError> {
        let line = serde_json::to_string(node)?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

/// Batch sink: retains nodes in emission order. Used where the whole
/// graph is wanted in memory, primarily tests.
#[derive(Debug, Default)]
pub struct NodeBuffer {
    pub nodes: Vec<GraphNode>,
}

impl NodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl NodeSink for NodeBuffer {
    fn emit(&mut self, node: &GraphNode) -> Result<(), LexigraphError> {
        self.nodes.push(node.clone());
        Ok(())
    }
}
