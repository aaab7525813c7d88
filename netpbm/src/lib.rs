//! netpbm - Raster image engine for Rust
//!
//! Draws into monochrome, grayscale and color canvases and reads and writes
//! them as PBM, PGM and PPM files.
//!
//! # Overview
//!
//! - Canvas with bounds-checked pixel access
//! - Lines, rectangles, circles, triangles and polygons, outlined or filled
//! - Koch and Sierpinski fractal curves
//! - Inversion, flips, orthogonal rotation and nearest-neighbor resampling
//! - Conversion between color, grayscale and monochrome
//! - Plain and raw netpbm encoding
//!
//! # Example
//!
//! ```
//! use netpbm::{Canvas, Point, Rgb};
//!
//! let mut canvas: Canvas<Rgb> = Canvas::new(64, 48).unwrap();
//! canvas
//!     .draw_filled_circle(Point::new(32, 24), 10, Rgb::RED)
//!     .unwrap();
//! netpbm::transform::flip_lr_in_place(&mut canvas).unwrap();
//!
//! let gray = canvas.convert_to_gray();
//! let bytes = netpbm::io::encode(&gray.into()).unwrap();
//! assert!(bytes.starts_with(b"P2\n64 48\n255\n"));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use netpbm_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use netpbm_io as io;
pub use netpbm_transform as transform;
