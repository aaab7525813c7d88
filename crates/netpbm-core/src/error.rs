//! Error types for netpbm-core
//!
//! Provides a unified error type for all canvas, drawing and conversion
//! operations in the core crate. Each variant captures enough context for
//! diagnostics without exposing the backing grid.
//!
//! Addressing violations and degenerate geometry are always surfaced as typed
//! failures; nothing in this crate clamps or wraps a coordinate.

use crate::canvas::{PixelKind, PnmFormat};
use thiserror::Error;

/// netpbm-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Coordinate outside the canvas on get/set
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} canvas")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// Degenerate geometric input (zero radius, zero-height triangle, ...)
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Invalid canvas dimensions
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Pixel value exceeds the canvas maximum channel value
    #[error("pixel value {value} exceeds max value {max}")]
    ValueOutOfRange { value: u32, max: u8 },

    /// Format tag does not describe the canvas pixel variant
    #[error("format {format:?} cannot hold {kind:?} pixels")]
    FormatMismatch { format: PnmFormat, kind: PixelKind },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
