//! Rendering error types.

use fieldvis_core::FieldvisError;
use thiserror::Error;

/// Errors that can occur while assembling drawables.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An index buffer refers past the end of the vertex buffers.
    #[error("index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds { index: u32, len: usize },

    /// A named vertex buffer has a different length than the others.
    #[error("vertex buffer '{name}' has {actual} elements, expected {expected}")]
    BufferLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// The element count does not fit the primitive kind.
    #[error("{count} elements do not form whole {kind} primitives")]
    IncompletePrimitive { kind: &'static str, count: usize },

    /// A primitive was configured without any vertex buffer.
    #[error("primitive has no vertex buffers")]
    NoVertexBuffers,

    /// A shader program was requested with an empty file path.
    #[error("shader program path is empty")]
    EmptyProgramPath,
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

impl From<RenderError> for FieldvisError {
    fn from(err: RenderError) -> Self {
        FieldvisError::RenderError(err.to_string())
    }
}
