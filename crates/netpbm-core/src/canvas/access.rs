//! Pixel access functions
//!
//! Bounds-checked getters and setters for individual pixels, plus the
//! unchecked row accessors used by whole-grid loops that already iterate
//! inside `0..width` x `0..height`.
//!
//! Coordinates are signed so that a negative coordinate is reported as an
//! addressing error instead of wrapping into range.

use super::{Canvas, Sample};
use crate::error::{Error, Result};
use crate::point::Point;

impl<P: Sample> Canvas<P> {
    /// Check whether `(x, y)` addresses a pixel of this canvas.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Check whether `p` addresses a pixel of this canvas.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.contains(p.x, p.y)
    }

    /// Validate `(x, y)` and return it as unsigned grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate lies outside the
    /// grid.
    #[inline]
    pub fn check_bounds(&self, x: i32, y: i32) -> Result<(u32, u32)> {
        if self.contains(x, y) {
            Ok((x as u32, y as u32))
        } else {
            Err(Error::OutOfBounds {
                x: x as i64,
                y: y as i64,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Check that the box spanning `min..=max` lies inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for the first corner outside the grid,
    /// `min` before `max`.
    pub fn check_box(&self, min: (i64, i64), max: (i64, i64)) -> Result<()> {
        for (x, y) in [min, max] {
            if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
                return Err(Error::OutOfBounds {
                    x,
                    y,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        Ok(())
    }

    /// Check that `value` lies within `0..=max_value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] otherwise.
    #[inline]
    pub fn check_value(&self, value: P) -> Result<()> {
        if value.fits(self.max_value) {
            Ok(())
        } else {
            Err(Error::ValueOutOfRange {
                value: value.peak() as u32,
                max: self.max_value,
            })
        }
    }

    /// Get the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate lies outside the
    /// grid.
    pub fn get(&self, x: i32, y: i32) -> Result<P> {
        let (x, y) = self.check_bounds(x, y)?;
        Ok(self.data[self.index(x, y)])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate lies outside the
    /// grid and [`Error::ValueOutOfRange`] if `value` exceeds `max_value`.
    /// The canvas is untouched on error.
    pub fn set(&mut self, x: i32, y: i32, value: P) -> Result<()> {
        self.check_value(value)?;
        let (x, y) = self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Get a pixel without coordinate validation.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`. In release builds an `x >= width` reads the
    /// next row; debug builds assert both coordinates.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> P {
        debug_assert!(x < self.width && y < self.height);
        self.data[self.index(x, y)]
    }

    /// Set a pixel without coordinate or value validation.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`, and in debug builds if `x >= width`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: P) {
        debug_assert!(x < self.width && y < self.height);
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Get the samples of row `y` for modification.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = self.index(0, y);
        let width = self.width as usize;
        &mut self.data[start..start + width]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> {
        self.data.chunks_exact(self.width as usize)
    }
}
