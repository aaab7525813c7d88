//! Pixel variant conversion functions
//!
//! Functions for converting between color, grayscale and monochrome
//! canvases. Every conversion builds a new canvas; the source is left
//! untouched. Output format tags keep the source's encoding (plain stays
//! plain, raw stays raw).
//!
//! | From | To | Rule |
//! |---|---|---|
//! | color | gray | `(r + g + b) / 3`, truncated, `max_value` kept |
//! | color, gray | mono | on iff intensity `> max_value / 2` |
//! | gray | color | channel replicated |
//! | mono | gray | on → `max_value`, off → 0 |

use super::{Canvas, PixelKind, PnmFormat, Rgb, Sample};
use crate::error::Result;
use log::debug;

impl<P: Sample> Canvas<P> {
    /// Build a canvas of another variant by mapping every sample.
    fn map_samples<Q: Sample>(&self, max_value: u8, f: impl Fn(P) -> Q) -> Canvas<Q> {
        debug!(
            "convert {}x{} {:?} -> {:?}",
            self.width,
            self.height,
            P::KIND,
            Q::KIND
        );
        Canvas {
            width: self.width,
            height: self.height,
            max_value,
            format: PnmFormat::for_kind(Q::KIND, self.format.is_plain()),
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl Canvas<Rgb> {
    /// Convert to grayscale using the truncated channel average.
    ///
    /// `max_value` is preserved. An average above `max_value` (possible only
    /// after a metadata-only [`Canvas::set_max_value`]) saturates to
    /// `max_value`.
    pub fn convert_to_gray(&self) -> Canvas<u8> {
        let max = self.max_value;
        self.map_samples(max, |v| v.to_gray().min(max))
    }

    /// Convert to monochrome: a pixel is on when its average intensity is
    /// strictly above `max_value / 2`.
    pub fn convert_to_mono(&self) -> Canvas<bool> {
        let threshold = self.max_value / 2;
        self.map_samples(1, |v| v.to_gray() > threshold)
    }
}

impl Canvas<u8> {
    /// Convert to monochrome: a pixel is on when it is strictly above
    /// `max_value / 2`.
    pub fn convert_to_mono(&self) -> Canvas<bool> {
        let threshold = self.max_value / 2;
        self.map_samples(1, |v| v > threshold)
    }

    /// Convert to color by replicating the gray level into all channels.
    pub fn convert_to_rgb(&self) -> Canvas<Rgb> {
        self.map_samples(self.max_value, Rgb::from_gray)
    }
}

impl Canvas<bool> {
    /// Convert to grayscale: on pixels become `max_value`, off pixels 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// if `max_value` is 0.
    pub fn convert_to_gray(&self, max_value: u8) -> Result<Canvas<u8>> {
        Canvas::<u8>::check_max_value(max_value)?;
        Ok(self.map_samples(max_value, |v| if v { max_value } else { 0 }))
    }
}

/// A canvas of any pixel variant
///
/// This is what a decoder produces when the variant is only known after
/// reading the format tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyCanvas {
    /// Monochrome canvas
    Mono(Canvas<bool>),
    /// Grayscale canvas
    Gray(Canvas<u8>),
    /// Color canvas
    Color(Canvas<Rgb>),
}

impl AnyCanvas {
    /// Get the pixel variant.
    pub fn kind(&self) -> PixelKind {
        match self {
            AnyCanvas::Mono(_) => PixelKind::Mono,
            AnyCanvas::Gray(_) => PixelKind::Gray,
            AnyCanvas::Color(_) => PixelKind::Color,
        }
    }

    /// Get `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        match self {
            AnyCanvas::Mono(c) => c.size(),
            AnyCanvas::Gray(c) => c.size(),
            AnyCanvas::Color(c) => c.size(),
        }
    }

    /// Get the canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.size().0
    }

    /// Get the canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.size().1
    }

    /// Get the maximum channel value.
    pub fn max_value(&self) -> u8 {
        match self {
            AnyCanvas::Mono(c) => c.max_value(),
            AnyCanvas::Gray(c) => c.max_value(),
            AnyCanvas::Color(c) => c.max_value(),
        }
    }

    /// Get the format tag.
    pub fn format(&self) -> PnmFormat {
        match self {
            AnyCanvas::Mono(c) => c.format(),
            AnyCanvas::Gray(c) => c.format(),
            AnyCanvas::Color(c) => c.format(),
        }
    }

    /// Convert to the pixel variant and encoding named by `format`.
    ///
    /// Changing the tag always converts the pixel data: color reduces to
    /// gray by channel average and to mono by threshold, gray widens to
    /// color by replication, mono widens with on → 255. A tag of the same
    /// variant only switches the encoding.
    pub fn convert(&self, format: PnmFormat) -> Result<AnyCanvas> {
        let mut out = match (self, format.kind()) {
            (AnyCanvas::Mono(c), PixelKind::Mono) => AnyCanvas::Mono(c.clone()),
            (AnyCanvas::Mono(c), PixelKind::Gray) => {
                AnyCanvas::Gray(c.convert_to_gray(u8::MAX)?)
            }
            (AnyCanvas::Mono(c), PixelKind::Color) => {
                AnyCanvas::Color(c.convert_to_gray(u8::MAX)?.convert_to_rgb())
            }
            (AnyCanvas::Gray(c), PixelKind::Mono) => AnyCanvas::Mono(c.convert_to_mono()),
            (AnyCanvas::Gray(c), PixelKind::Gray) => AnyCanvas::Gray(c.clone()),
            (AnyCanvas::Gray(c), PixelKind::Color) => AnyCanvas::Color(c.convert_to_rgb()),
            (AnyCanvas::Color(c), PixelKind::Mono) => AnyCanvas::Mono(c.convert_to_mono()),
            (AnyCanvas::Color(c), PixelKind::Gray) => AnyCanvas::Gray(c.convert_to_gray()),
            (AnyCanvas::Color(c), PixelKind::Color) => AnyCanvas::Color(c.clone()),
        };
        out.set_format(format)?;
        Ok(out)
    }

    /// Set the format tag; see [`Canvas::set_format`].
    pub fn set_format(&mut self, format: PnmFormat) -> Result<()> {
        match self {
            AnyCanvas::Mono(c) => c.set_format(format),
            AnyCanvas::Gray(c) => c.set_format(format),
            AnyCanvas::Color(c) => c.set_format(format),
        }
    }

    /// Invert every pixel in place; see [`Canvas::invert_inplace`].
    pub fn invert_inplace(&mut self) {
        match self {
            AnyCanvas::Mono(c) => c.invert_inplace(),
            AnyCanvas::Gray(c) => c.invert_inplace(),
            AnyCanvas::Color(c) => c.invert_inplace(),
        }
    }

    /// Borrow the monochrome canvas, if this is one.
    pub fn as_mono(&self) -> Option<&Canvas<bool>> {
        match self {
            AnyCanvas::Mono(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow the grayscale canvas, if this is one.
    pub fn as_gray(&self) -> Option<&Canvas<u8>> {
        match self {
            AnyCanvas::Gray(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow the color canvas, if this is one.
    pub fn as_color(&self) -> Option<&Canvas<Rgb>> {
        match self {
            AnyCanvas::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Take the monochrome canvas, if this is one.
    pub fn into_mono(self) -> Option<Canvas<bool>> {
        match self {
            AnyCanvas::Mono(c) => Some(c),
            _ => None,
        }
    }

    /// Take the grayscale canvas, if this is one.
    pub fn into_gray(self) -> Option<Canvas<u8>> {
        match self {
            AnyCanvas::Gray(c) => Some(c),
            _ => None,
        }
    }

    /// Take the color canvas, if this is one.
    pub fn into_color(self) -> Option<Canvas<Rgb>> {
        match self {
            AnyCanvas::Color(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Canvas<bool>> for AnyCanvas {
    fn from(c: Canvas<bool>) -> Self {
        AnyCanvas::Mono(c)
    }
}

impl From<Canvas<u8>> for AnyCanvas {
    fn from(c: Canvas<u8>) -> Self {
        AnyCanvas::Gray(c)
    }
}

impl From<Canvas<Rgb>> for AnyCanvas {
    fn from(c: Canvas<Rgb>) -> Self {
        AnyCanvas::Color(c)
    }
}
