/// Unified error type for Lexigraph.
///
/// `InvalidSeed` and `Config` are fatal at start-up, before any node is
/// emitted. `Io` and `Parse` are per-file: the project walker logs them
/// and continues with the next sibling.
#[derive(Debug, thiserror::Error)]
pub enum LexigraphError {
    #[error("invalid trunk seed: {0}")]
    InvalidSeed(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported file: {0}")]
    Unsupported(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
