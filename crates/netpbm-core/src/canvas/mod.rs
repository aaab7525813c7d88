//! Canvas - The pixel grid container
//!
//! `Canvas<P>` is the fundamental image type of the engine. It owns a
//! row-major grid of `width * height` samples with the origin at the top-left
//! corner, X increasing rightward and Y increasing downward.
//!
//! # Pixel variants
//!
//! The sample type selects the variant (see [`pixel`]): `Canvas<bool>` is
//! monochrome, `Canvas<u8>` grayscale and `Canvas<Rgb>` color. Converting
//! between variants builds a new canvas (see [`convert`]); the source stays
//! valid and unmodified.
//!
//! # Ownership model
//!
//! Whole-grid operations take `&mut self`, so no other reference can observe
//! an intermediate state. Operations that change the grid shape build the new
//! grid completely and then replace the canvas in a single assignment.

mod access;
pub mod convert;
pub mod fractal;
pub mod graphics;
mod ops;
pub mod pixel;

pub use convert::AnyCanvas;
pub use pixel::{PixelKind, Rgb, Sample};

use crate::error::{Error, Result};

/// Netpbm format tag
///
/// Identifies the textual (plain) or binary (raw) layout a canvas was
/// decoded from or will be encoded to. Each tag belongs to exactly one
/// pixel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// Plain (ASCII) bitmap
    P1,
    /// Plain (ASCII) graymap
    P2,
    /// Plain (ASCII) pixmap
    P3,
    /// Raw (binary) bitmap
    P4,
    /// Raw (binary) graymap
    P5,
    /// Raw (binary) pixmap
    P6,
}

impl PnmFormat {
    /// Look up a tag from its two-byte magic number (`b"P1"` .. `b"P6"`).
    pub fn from_magic(magic: &[u8]) -> Option<Self> {
        match magic {
            b"P1" => Some(Self::P1),
            b"P2" => Some(Self::P2),
            b"P3" => Some(Self::P3),
            b"P4" => Some(Self::P4),
            b"P5" => Some(Self::P5),
            b"P6" => Some(Self::P6),
            _ => None,
        }
    }

    /// Tag for a pixel variant and encoding.
    pub fn for_kind(kind: PixelKind, plain: bool) -> Self {
        match (kind, plain) {
            (PixelKind::Mono, true) => Self::P1,
            (PixelKind::Gray, true) => Self::P2,
            (PixelKind::Color, true) => Self::P3,
            (PixelKind::Mono, false) => Self::P4,
            (PixelKind::Gray, false) => Self::P5,
            (PixelKind::Color, false) => Self::P6,
        }
    }

    /// Magic number as written in the file header.
    pub fn magic(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
            Self::P5 => "P5",
            Self::P6 => "P6",
        }
    }

    /// Pixel variant this tag stores.
    pub fn kind(self) -> PixelKind {
        match self {
            Self::P1 | Self::P4 => PixelKind::Mono,
            Self::P2 | Self::P5 => PixelKind::Gray,
            Self::P3 | Self::P6 => PixelKind::Color,
        }
    }

    /// Whether the pixel data is written as ASCII decimal.
    pub fn is_plain(self) -> bool {
        matches!(self, Self::P1 | Self::P2 | Self::P3)
    }

    /// Whether the header carries a maxval field.
    pub fn has_max_value(self) -> bool {
        self.kind() != PixelKind::Mono
    }

    /// Same variant, switched to the encoding of `other`.
    pub fn with_encoding_of(self, other: PnmFormat) -> Self {
        Self::for_kind(self.kind(), other.is_plain())
    }

    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self.kind() {
            PixelKind::Mono => "pbm",
            PixelKind::Gray => "pgm",
            PixelKind::Color => "ppm",
        }
    }
}

/// Canvas - Main pixel grid container
///
/// # Examples
///
/// ```
/// use netpbm_core::{Canvas, PnmFormat, Rgb};
///
/// let mut canvas: Canvas<Rgb> = Canvas::new(640, 480).unwrap();
/// assert_eq!(canvas.size(), (640, 480));
/// assert_eq!(canvas.format(), PnmFormat::P3);
///
/// canvas.set(10, 20, Rgb::RED).unwrap();
/// assert_eq!(canvas.get(10, 20).unwrap(), Rgb::RED);
/// assert!(canvas.get(640, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas<P> {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Maximum channel value
    max_value: u8,
    /// Format tag used when encoding
    format: PnmFormat,
    /// Row-major samples, `width * height` long
    data: Vec<P>,
}

impl<P: Sample> Canvas<P> {
    /// Create a new canvas with the specified dimensions.
    ///
    /// Every pixel starts at the zero sample (off / black). `max_value` is
    /// the largest value the variant allows and the format tag is the plain
    /// tag of the variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_max_value(width, height, P::MAX_LIMIT)
    }

    /// Create a new canvas with an explicit maximum channel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 and
    /// [`Error::InvalidParameter`] if `max_value` is 0 or above the variant
    /// limit.
    pub fn with_max_value(width: u32, height: u32, max_value: u8) -> Result<Self> {
        let len = Self::grid_len(width, height)?;
        Self::check_max_value(max_value)?;
        Ok(Canvas {
            width,
            height,
            max_value,
            format: PnmFormat::for_kind(P::KIND, true),
            data: vec![P::default(); len],
        })
    }

    /// Assemble a canvas from already decoded parts.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions are zero, `data` does not hold exactly
    /// `width * height` samples, `format` belongs to another variant, or a
    /// sample exceeds `max_value`.
    pub fn from_raw(
        width: u32,
        height: u32,
        max_value: u8,
        format: PnmFormat,
        data: Vec<P>,
    ) -> Result<Self> {
        let len = Self::grid_len(width, height)?;
        Self::check_max_value(max_value)?;
        Self::check_format(format)?;
        if data.len() != len {
            return Err(Error::InvalidParameter(format!(
                "expected {} samples for {}x{}, got {}",
                len,
                width,
                height,
                data.len()
            )));
        }
        if let Some(bad) = data.iter().find(|v| !v.fits(max_value)) {
            return Err(Error::ValueOutOfRange {
                value: bad.peak() as u32,
                max: max_value,
            });
        }
        Ok(Canvas {
            width,
            height,
            max_value,
            format,
            data,
        })
    }

    /// Create a zeroed canvas with the same max value and format tag but new
    /// dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn create_template(&self, width: u32, height: u32) -> Result<Self> {
        let mut canvas = Self::with_max_value(width, height, self.max_value)?;
        canvas.format = self.format;
        Ok(canvas)
    }

    fn grid_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    fn check_max_value(max_value: u8) -> Result<()> {
        if max_value == 0 || max_value > P::MAX_LIMIT {
            return Err(Error::InvalidParameter(format!(
                "max value must be in 1..={}, got {}",
                P::MAX_LIMIT,
                max_value
            )));
        }
        Ok(())
    }

    fn check_format(format: PnmFormat) -> Result<()> {
        if format.kind() != P::KIND {
            return Err(Error::FormatMismatch {
                format,
                kind: P::KIND,
            });
        }
        Ok(())
    }

    /// Get the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the pixel variant.
    #[inline]
    pub fn kind(&self) -> PixelKind {
        P::KIND
    }

    /// Get the maximum channel value.
    #[inline]
    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Set the maximum channel value.
    ///
    /// This is a metadata change only: existing samples are not rescaled.
    /// Samples above the new maximum are left as they are; [`invert`]
    /// saturates them to zero and encoders reject them.
    ///
    /// [`invert`]: Canvas::invert_inplace
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `max_value` is 0 or above the
    /// variant limit (1 for monochrome).
    pub fn set_max_value(&mut self, max_value: u8) -> Result<()> {
        Self::check_max_value(max_value)?;
        self.max_value = max_value;
        Ok(())
    }

    /// Get the format tag.
    #[inline]
    pub fn format(&self) -> PnmFormat {
        self.format
    }

    /// Set the format tag.
    ///
    /// Only the plain/raw encoding of the same variant may be selected here;
    /// use [`AnyCanvas::convert`] to change the pixel variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatMismatch`] if `format` stores another variant.
    pub fn set_format(&mut self, format: PnmFormat) -> Result<()> {
        Self::check_format(format)?;
        self.format = format;
        Ok(())
    }

    /// Get raw access to the row-major samples.
    #[inline]
    pub fn data(&self) -> &[P] {
        &self.data
    }

    /// Consume the canvas and return its samples.
    pub fn into_data(self) -> Vec<P> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
