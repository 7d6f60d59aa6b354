//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while emitting drawing primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Image pixels could not be interpreted.
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    /// Invalid image or surface dimensions (zero width or height).
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A path with no commands was submitted for filling or stroking.
    #[error("path has no commands")]
    EmptyPath,

    /// A primitive carried a NaN or infinite coordinate.
    #[error("non-finite coordinate in drawing primitive")]
    NonFiniteCoordinate,

    /// The render target refused further commands for this frame.
    #[error("command limit of {limit} exceeded")]
    CommandLimitExceeded { limit: usize },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
