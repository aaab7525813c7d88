//! Error types for netpbm-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] netpbm_core::Error),

    /// Degenerate target geometry (zero width or height)
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
