//! Error types for graph alignment.

use thiserror::Error;

/// Errors from the concept lattice engine lifecycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FcaError {
    /// The formal context violates an engine precondition.
    #[error("invalid formal context: {0}")]
    InvalidContext(String),

    /// `compute()` was called before a successful `init()`.
    #[error("lattice engine not initialized; call init() first")]
    NotInitialized,

    /// Extents were requested before `compute()` ran.
    #[error("concepts not computed yet; call compute() first")]
    NotComputed,
}

/// Top-level error type for alignment runs.
#[derive(Error, Debug)]
pub enum AlignError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("FCA error: {0}")]
    Fca(#[from] FcaError),

    #[error("unknown output format: {0}. Use 'tsv', 'xml' or 'json'.")]
    UnknownFormat(String),

    #[error("unknown resource kind: {0}. Use 'class', 'property', 'instance' or 'all'.")]
    UnknownKind(String),
}
