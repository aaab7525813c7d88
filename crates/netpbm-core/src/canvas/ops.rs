//! Whole-canvas pixel operations
//!
//! Inversion, fill and pixel-wise comparison. Orientation changes (flip,
//! rotate) and resampling live in `netpbm-transform`.

use super::{Canvas, Sample};
use crate::error::Result;
use log::debug;

impl<P: Sample> Canvas<P> {
    /// Return an inverted copy of this canvas.
    ///
    /// See [`Canvas::invert_inplace`].
    pub fn invert(&self) -> Canvas<P> {
        let mut out = self.clone();
        out.invert_inplace();
        out
    }

    /// Invert every pixel in place.
    ///
    /// Each channel `v` becomes `max_value - v`; monochrome pixels are
    /// negated. A channel above `max_value` saturates to 0, so for in-range
    /// data two inversions restore the original exactly.
    pub fn invert_inplace(&mut self) {
        debug!(
            "invert {}x{} {:?} canvas, max value {}",
            self.width, self.height, P::KIND, self.max_value
        );
        let max = self.max_value;
        for v in self.data.iter_mut() {
            *v = v.invert(max);
        }
    }

    /// Set every pixel to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`](crate::Error::ValueOutOfRange) if
    /// `value` exceeds `max_value`.
    pub fn fill(&mut self, value: P) -> Result<()> {
        self.check_value(value)?;
        self.data.fill(value);
        Ok(())
    }

    /// Check if two canvases have the same dimensions, max value and pixels.
    ///
    /// Unlike `==`, the format tag is ignored.
    pub fn equals(&self, other: &Canvas<P>) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.max_value == other.max_value
            && self.data == other.data
    }

    /// Count the pixels equal to `value`.
    pub fn count_value(&self, value: P) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }
}
