//! netpbm-io - Reading and writing netpbm images
//!
//! Decodes PBM, PGM and PPM files (plain P1/P2/P3 and raw P4/P5/P6) into an
//! [`AnyCanvas`] and encodes canvases back using their own format tag.
//!
//! # Features
//!
//! - `pbm`, `pgm`, `ppm` - one per format family, all enabled by default.
//!   A disabled family reads and writes as [`IoError::UnsupportedFormat`].
//!
//! # Usage
//!
//! ```
//! use netpbm_core::PnmFormat;
//!
//! let canvas = netpbm_io::decode(b"P2\n2 1\n255\n0 255\n").unwrap();
//! assert_eq!(canvas.format(), PnmFormat::P2);
//!
//! let raw = canvas.convert(PnmFormat::P5).unwrap();
//! let bytes = netpbm_io::encode(&raw).unwrap();
//! assert_eq!(bytes, b"P5\n2 1\n255\n\x00\xff");
//! ```

mod error;
pub mod format;
pub mod header;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use header::{PnmHeader, read_image_header, read_image_header_mem};
pub use pnm::{read_pnm, write_pnm};

use netpbm_core::AnyCanvas;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Decode an image from bytes.
pub fn decode(data: &[u8]) -> IoResult<AnyCanvas> {
    pnm::decode_pnm(data)
}

/// Encode an image to bytes using its format tag.
pub fn encode(canvas: &AnyCanvas) -> IoResult<Vec<u8>> {
    format::check_enabled(canvas.format())?;
    pnm::encode_pnm(canvas)
}

/// Read an image from a file path
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<AnyCanvas> {
    let file = File::open(path)?;
    read_pnm(BufReader::new(file))
}

/// Write an image to a file path using its format tag.
pub fn write_image<P: AsRef<Path>>(canvas: &AnyCanvas, path: P) -> IoResult<()> {
    format::check_enabled(canvas.format())?;
    let file = File::create(path)?;
    write_pnm(canvas, BufWriter::new(file))
}
