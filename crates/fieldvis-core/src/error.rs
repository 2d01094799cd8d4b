//! Error types for fieldvis.

use thiserror::Error;

/// The main error type for fieldvis operations.
#[derive(Error, Debug)]
pub enum FieldvisError {
    /// An option was requested that is neither set nor declared.
    #[error("option '{0}' not found")]
    OptionMissing(String),

    /// An option holds a value of a different type than requested.
    #[error("option '{name}' has type {actual}, expected {expected}")]
    OptionType {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// An option value is outside the range the algorithm accepts.
    #[error("invalid value for option '{name}': {reason}")]
    InvalidOption { name: String, reason: String },

    /// Execution was cancelled through the abort flag.
    #[error("execution aborted")]
    Aborted,

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A vertex index refers past the end of the vertex buffer.
    #[error("index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds { index: u32, len: usize },

    /// A cell was given the wrong number of vertex indices for its type.
    #[error("{cell_type} cell needs {expected} indices, got {actual}")]
    CellArity {
        cell_type: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A grid has more nodes than can be built.
    #[error("grid with {nodes} nodes exceeds the supported size")]
    GridTooLarge { nodes: u64 },

    /// No algorithm is registered under the given name.
    #[error("algorithm '{0}' not found")]
    UnknownAlgorithm(String),

    /// An algorithm with the given name already exists.
    #[error("algorithm '{0}' already exists")]
    AlgorithmExists(String),

    /// Building a drawable failed.
    #[error("render error: {0}")]
    RenderError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for fieldvis operations.
pub type Result<T> = std::result::Result<T, FieldvisError>;
