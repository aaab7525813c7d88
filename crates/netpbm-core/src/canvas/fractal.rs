//! Fractal curve rendering
//!
//! Recursive curve generators parameterized by depth, a start point, a span
//! width and a color. Both curves are simplified generators: each level
//! replaces a horizontal span with smaller horizontal spans, producing a
//! self-similar zig-zag rather than the classic Koch peak or Sierpinski
//! triangle recursion.
//!
//! - Koch: four `width / 3` spans starting at `0`, `w/3`, `2·(w/3)` and `w`
//!   along the baseline.
//! - Sierpinski: three `width / 2` spans at `(0, 0)`, `(w/2, 0)` and
//!   `(w/4, ⌊w·0.866/2⌋)`.
//!
//! The snowflake and triangle wrappers draw three curves starting at the
//! corners of an equilateral triangle of the given width.

use super::graphics::push_line;
use super::{Canvas, Sample};
use crate::error::{Error, Result};
use crate::point::Point;
use log::trace;

/// Approximation of sin 60° used for triangle heights.
pub const SIN_60: f64 = 0.866;

/// Largest span width accepted by the generators.
const MAX_WIDTH: u32 = (i32::MAX / 4) as u32;

/// Curve family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalCurve {
    /// Four thirds-width spans per level
    Koch,
    /// Three half-width spans per level, the last one lowered
    Sierpinski,
}

impl FractalCurve {
    /// Factor the span width is divided by at each level.
    pub fn split(self) -> u32 {
        match self {
            FractalCurve::Koch => 3,
            FractalCurve::Sierpinski => 2,
        }
    }
}

/// Validate that `width` survives `depth` subdivisions.
///
/// Each level divides the span by the curve's split factor with integer
/// division; the span must still be at least one pixel at depth 0.
fn check_depth(curve: FractalCurve, depth: u32, width: u32) -> Result<()> {
    if width == 0 || width > MAX_WIDTH {
        return Err(Error::InvalidGeometry(format!(
            "fractal width must be in 1..={MAX_WIDTH}, got {width}"
        )));
    }
    let mut w = width;
    for level in 0..depth {
        w /= curve.split();
        if w == 0 {
            return Err(Error::InvalidGeometry(format!(
                "{curve:?} depth {depth} too deep for width {width}: span vanishes at level {}",
                level + 1
            )));
        }
    }
    Ok(())
}

/// Offset from a curve's start to the far corner of its bounding box.
///
/// Every sub-curve starts at a non-negative offset, so the near corner is
/// the start itself. Only call after [`check_depth`].
fn curve_extent(curve: FractalCurve, depth: u32, width: u32) -> (i64, i64) {
    let w = width as i64;
    if depth == 0 {
        return (w, 0);
    }
    match curve {
        FractalCurve::Koch => {
            let (dx, dy) = curve_extent(curve, depth - 1, width / 3);
            (w + dx, dy)
        }
        FractalCurve::Sierpinski => {
            let drop = (width as f64 * SIN_60 / 2.0) as i64;
            let (dx, dy) = curve_extent(curve, depth - 1, width / 2);
            (w / 2 + dx, drop + dy)
        }
    }
}

/// Offset from the start of a closed figure to the far corner of its
/// bounding box.
fn figure_extent(curve: FractalCurve, depth: u32, width: u32) -> (i64, i64) {
    let (dx, dy) = curve_extent(curve, depth, width);
    (width as i64 + dx, (width as f64 * SIN_60) as i64 + dy)
}

/// Bounding box of a shape at `start` with the given extent.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if the far corner overflows
/// coordinates.
fn fractal_box(start: Point, extent: (i64, i64), width: u32) -> Result<((i64, i64), (i64, i64))> {
    let min = (start.x as i64, start.y as i64);
    let max = (min.0 + extent.0, min.1 + extent.1);
    if max.0 > i32::MAX as i64 || max.1 > i32::MAX as i64 {
        return Err(Error::InvalidGeometry(format!(
            "fractal of width {width} at ({}, {}) overflows coordinates",
            start.x, start.y
        )));
    }
    Ok((min, max))
}

fn push_curve(pts: &mut Vec<Point>, curve: FractalCurve, depth: u32, start: Point, width: u32) {
    if depth == 0 {
        push_line(pts, start, start.offset(width as i32, 0));
        return;
    }
    let w = width as i32;
    match curve {
        FractalCurve::Koch => {
            let third = w / 3;
            for dx in [0, third, third * 2, w] {
                push_curve(pts, curve, depth - 1, start.offset(dx, 0), third as u32);
            }
        }
        FractalCurve::Sierpinski => {
            let half = w / 2;
            let drop = (width as f64 * SIN_60 / 2.0) as i32;
            for (dx, dy) in [(0, 0), (half, 0), (w / 4, drop)] {
                push_curve(pts, curve, depth - 1, start.offset(dx, dy), half as u32);
            }
        }
    }
}

/// Generate the points of a single fractal curve.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if `width` is 0 or too small for
/// `depth` levels of subdivision.
pub fn generate_curve_pts(
    curve: FractalCurve,
    depth: u32,
    start: Point,
    width: u32,
) -> Result<Vec<Point>> {
    check_depth(curve, depth, width)?;
    fractal_box(start, curve_extent(curve, depth, width), width)?;
    let mut pts = Vec::new();
    push_curve(&mut pts, curve, depth, start, width);
    Ok(pts)
}

/// Generate three curves starting at the corners of an equilateral
/// triangle: `start`, `start + (w/2, ⌊w·0.866⌋)` and `start + (w, 0)`.
///
/// # Errors
///
/// Same conditions as [`generate_curve_pts`].
pub fn generate_closed_figure_pts(
    curve: FractalCurve,
    depth: u32,
    start: Point,
    width: u32,
) -> Result<Vec<Point>> {
    check_depth(curve, depth, width)?;
    fractal_box(start, figure_extent(curve, depth, width), width)?;
    let w = width as i32;
    let height = (width as f64 * SIN_60) as i32;
    let mut pts = Vec::new();
    for corner in [start, start.offset(w / 2, height), start.offset(w, 0)] {
        push_curve(&mut pts, curve, depth, corner, width);
    }
    Ok(pts)
}

impl<P: Sample> Canvas<P> {
    /// Check a fractal's parameters and bounding box before generating it.
    fn check_fractal(
        &self,
        curve: FractalCurve,
        depth: u32,
        start: Point,
        width: u32,
        closed: bool,
        color: P,
    ) -> Result<()> {
        check_depth(curve, depth, width)?;
        let extent = if closed {
            figure_extent(curve, depth, width)
        } else {
            curve_extent(curve, depth, width)
        };
        let (min, max) = fractal_box(start, extent, width)?;
        self.check_shape(color, min, max)
    }

    /// Draw a Koch curve of `depth` levels spanning `width` pixels.
    pub fn draw_koch_curve(&mut self, depth: u32, start: Point, width: u32, color: P) -> Result<()> {
        trace!("draw_koch_curve depth={depth} {start:?} w={width}");
        self.check_fractal(FractalCurve::Koch, depth, start, width, false, color)?;
        let pts = generate_curve_pts(FractalCurve::Koch, depth, start, width)?;
        self.render_pts(&pts, color)
    }

    /// Draw a Koch snowflake: three Koch curves on the corners of an
    /// equilateral triangle.
    pub fn draw_koch_snowflake(
        &mut self,
        depth: u32,
        start: Point,
        width: u32,
        color: P,
    ) -> Result<()> {
        trace!("draw_koch_snowflake depth={depth} {start:?} w={width}");
        self.check_fractal(FractalCurve::Koch, depth, start, width, true, color)?;
        let pts = generate_closed_figure_pts(FractalCurve::Koch, depth, start, width)?;
        self.render_pts(&pts, color)
    }

    /// Draw a Sierpinski curve of `depth` levels spanning `width` pixels.
    pub fn draw_sierpinski_curve(
        &mut self,
        depth: u32,
        start: Point,
        width: u32,
        color: P,
    ) -> Result<()> {
        trace!("draw_sierpinski_curve depth={depth} {start:?} w={width}");
        self.check_fractal(FractalCurve::Sierpinski, depth, start, width, false, color)?;
        let pts = generate_curve_pts(FractalCurve::Sierpinski, depth, start, width)?;
        self.render_pts(&pts, color)
    }

    /// Draw a Sierpinski triangle: three Sierpinski curves on the corners of
    /// an equilateral triangle.
    pub fn draw_sierpinski_triangle(
        &mut self,
        depth: u32,
        start: Point,
        width: u32,
        color: P,
    ) -> Result<()> {
        trace!("draw_sierpinski_triangle depth={depth} {start:?} w={width}");
        self.check_fractal(FractalCurve::Sierpinski, depth, start, width, true, color)?;
        let pts = generate_closed_figure_pts(FractalCurve::Sierpinski, depth, start, width)?;
        self.render_pts(&pts, color)
    }
}
