//! I/O error types
//!
//! Provides a unified error type for all image I/O operations. Header
//! problems, malformed samples and truncated data all map into `IoError`
//! variants so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
///
/// Wraps decoding/encoding errors as well as standard I/O and core-library
/// errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The pixel data ended early or could not be decoded
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The canvas cannot be represented in its format
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. a format tag mismatch)
    #[error("core error: {0}")]
    Core(#[from] netpbm_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
