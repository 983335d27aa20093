//! lexigraph-walk: Tree-sitter walking pipeline for the Lexigraph
//! syntax-graph builder.
//!
//! Turns a project directory into a flattened, uniquely keyed node graph:
//! each source file is parsed by tree-sitter, every named syntax node
//! becomes one emitted graph node, and the whole stream is written in
//! strict pre-order so downstream consumers can process parents before
//! children without buffering.
//!
//! # Architecture
//!
//! - **grammar** — Trait for per-language grammar + classification tables
//! - **languages** — Grammar implementations (currently: Python)
//! - **parser** — Parse coordinator dispatching on file extension
//! - **walker** — Pre-order AST walk with ancestor-stack sibling tracking
//! - **project** — Filesystem layer: project/dir/file nodes, pruning, isolation
//! - **filter** — Change-set path filter and `./`-normalization
//! - **emit** — Streaming JSON-lines emitter and in-memory buffer sink

pub mod emit;
pub mod filter;
pub mod grammar;
pub mod languages;
pub mod parser;
pub mod project;
pub mod walker;

pub use emit::{JsonLinesEmitter, NodeBuffer, NodeSink};
pub use filter::PathFilter;
pub use grammar::Grammar;
pub use parser::{ParsedFile, SourceParser};
pub use project::{ProjectWalker, WalkSummary};
pub use walker::AstWalker;
