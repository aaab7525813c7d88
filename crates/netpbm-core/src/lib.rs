//! Netpbm Core - Canvas, rasterization and color-depth conversion
//!
//! This crate provides the in-memory side of the netpbm raster engine:
//!
//! - [`Canvas`] - The pixel grid container, generic over the pixel variant
//! - [`Rgb`] / [`Sample`] - Pixel types (`bool`, `u8`, [`Rgb`])
//! - [`Point`] - Integer coordinate
//! - [`PnmFormat`] - Format tag (P1 through P6)
//! - [`AnyCanvas`] - Canvas of a variant known only at run time
//! - [`graphics`] - Lines, rectangles, circles, triangles and polygons
//! - [`fractal`] - Koch and Sierpinski curves
//!
//! Orientation transforms and resampling live in `netpbm-transform`;
//! decoding and encoding live in `netpbm-io`.

pub mod canvas;
pub mod error;
pub mod point;

pub use canvas::fractal::{self, FractalCurve};
pub use canvas::graphics;
pub use canvas::{AnyCanvas, Canvas, PixelKind, PnmFormat, Rgb, Sample};
pub use error::{Error, Result};
pub use point::Point;
