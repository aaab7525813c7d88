//! Pixel variants
//!
//! A canvas holds exactly one pixel variant. The variant is chosen by the
//! type parameter of [`Canvas`](super::Canvas):
//!
//! | Type | Variant | Range |
//! |---|---|---|
//! | `bool` | monochrome | off / on |
//! | `u8` | grayscale | `0..=max_value` |
//! | [`Rgb`] | color | each channel `0..=max_value` |

use std::fmt;

/// Pixel variant held by a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelKind {
    /// 1-bit on/off pixels
    Mono,
    /// Single channel intensity
    Gray,
    /// Three independent R, G, B channels
    Color,
}

/// A value that can be stored in a [`Canvas`](super::Canvas).
pub trait Sample: Copy + PartialEq + Default + fmt::Debug {
    /// Variant this sample type represents.
    const KIND: PixelKind;

    /// Largest `max_value` a canvas of this variant may declare.
    const MAX_LIMIT: u8;

    /// Check that every channel lies in `0..=max`.
    fn fits(self, max: u8) -> bool;

    /// Replace every channel `v` with `max - v`.
    ///
    /// Channels above `max` saturate to zero rather than wrapping.
    fn invert(self, max: u8) -> Self;

    /// Largest channel value, used in diagnostics.
    fn peak(self) -> u8;
}

impl Sample for bool {
    const KIND: PixelKind = PixelKind::Mono;
    const MAX_LIMIT: u8 = 1;

    #[inline]
    fn fits(self, _max: u8) -> bool {
        true
    }

    #[inline]
    fn invert(self, _max: u8) -> Self {
        !self
    }

    #[inline]
    fn peak(self) -> u8 {
        self as u8
    }
}

impl Sample for u8 {
    const KIND: PixelKind = PixelKind::Gray;
    const MAX_LIMIT: u8 = u8::MAX;

    #[inline]
    fn fits(self, max: u8) -> bool {
        self <= max
    }

    #[inline]
    fn invert(self, max: u8) -> Self {
        max.saturating_sub(self)
    }

    #[inline]
    fn peak(self) -> u8 {
        self
    }
}

/// RGB color pixel
///
/// Three independent 8-bit channels, copied by value on every read and
/// write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    /// Blue color
    pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    /// Gray level as the truncated channel average `(r + g + b) / 3`.
    pub fn to_gray(&self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// Gray pixel replicated into all three channels.
    pub const fn from_gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl Sample for Rgb {
    const KIND: PixelKind = PixelKind::Color;
    const MAX_LIMIT: u8 = u8::MAX;

    #[inline]
    fn fits(self, max: u8) -> bool {
        self.r <= max && self.g <= max && self.b <= max
    }

    #[inline]
    fn invert(self, max: u8) -> Self {
        Self {
            r: max.saturating_sub(self.r),
            g: max.saturating_sub(self.g),
            b: max.saturating_sub(self.b),
        }
    }

    #[inline]
    fn peak(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }
}
