//! Graphics rendering functions
//!
//! This module provides functions for drawing shapes on canvases:
//! - Lines (one sample per column)
//! - Rectangles (outline and filled)
//! - Circles (midpoint algorithm, outline and filled)
//! - Triangles (outline and scanline fill)
//! - Polygons (outline and fan-triangulated fill)
//!
//! Every shape is first generated as a list of points, then rendered. The
//! `draw_*` methods check the shape's bounding box against the canvas before
//! any point is generated, and the renderer validates all points and the
//! color before writing. A shape that leaves the canvas fails with
//! [`Error::OutOfBounds`] and the canvas is left unmodified.
//!
//! # Known limitations
//!
//! - A line plots exactly one pixel per X step, so lines steeper than 45°
//!   show gaps between plotted pixels.
//! - Filled polygons are triangulated as a fan from the first vertex. This is
//!   exact for convex polygons only; concave polygons may show fill
//!   artifacts at reflex vertices.

use super::{Canvas, Sample};
use crate::error::{Error, Result};
use crate::point::Point;
use log::trace;

// =============================================================================
// Point list generation helpers
// =============================================================================

/// Generate the points of a line from `p1` to `p2`.
///
/// A vertical segment (`p1.x == p2.x`) yields every Y between the endpoints,
/// inclusive. Otherwise the endpoints are ordered by X and for each integer
/// `x` in `p1.x..=p2.x` the point `(x, p1.y + dy * (x - p1.x) / dx)` is
/// produced, with the division truncating toward zero.
pub fn generate_line_pts(p1: Point, p2: Point) -> Vec<Point> {
    let mut pts = Vec::new();
    push_line(&mut pts, p1, p2);
    pts
}

pub(crate) fn push_line(pts: &mut Vec<Point>, p1: Point, p2: Point) {
    if p1.x == p2.x {
        let (y0, y1) = if p1.y <= p2.y {
            (p1.y, p2.y)
        } else {
            (p2.y, p1.y)
        };
        pts.extend((y0..=y1).map(|y| Point::new(p1.x, y)));
        return;
    }

    let (p1, p2) = if p1.x > p2.x { (p2, p1) } else { (p1, p2) };
    let dx = p2.x as i64 - p1.x as i64;
    let dy = p2.y as i64 - p1.y as i64;
    for x in p1.x..=p2.x {
        // Lies between p1.y and p2.y, so it always fits back into i32
        let y = p1.y as i64 + dy * (x as i64 - p1.x as i64) / dx;
        pts.push(Point::new(x, y as i32));
    }
}

/// `origin + len` as a coordinate, or `InvalidGeometry` on overflow.
fn extend(origin: i32, len: u32, what: &str) -> Result<i32> {
    i32::try_from(len)
        .ok()
        .and_then(|len| origin.checked_add(len))
        .ok_or_else(|| Error::InvalidGeometry(format!("{what} {len} overflows coordinates")))
}

/// Validate a rectangle and return its far corner `origin + (width, height)`.
fn box_corner(origin: Point, width: u32, height: u32) -> Result<Point> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidGeometry(format!(
            "rectangle has zero extent: {width}x{height}"
        )));
    }
    Ok(Point::new(
        extend(origin.x, width, "width")?,
        extend(origin.y, height, "height")?,
    ))
}

/// Smallest and largest coordinate of `pts` on each axis.
fn hull(pts: &[Point]) -> ((i64, i64), (i64, i64)) {
    pts.iter().fold(
        ((i64::MAX, i64::MAX), (i64::MIN, i64::MIN)),
        |((x0, y0), (x1, y1)), p| {
            let (x, y) = (p.x as i64, p.y as i64);
            ((x0.min(x), y0.min(y)), (x1.max(x), y1.max(y)))
        },
    )
}

/// Generate the outline of the rectangle with corner `origin`.
///
/// The four edges run from `origin` to `origin + (width, 0)` and
/// `origin + (0, height)`, so the outline spans `width + 1` columns and
/// `height + 1` rows.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if width or height is 0.
pub fn generate_box_pts(origin: Point, width: u32, height: u32) -> Result<Vec<Point>> {
    let Point { x: right, y: bottom } = box_corner(origin, width, height)?;

    let mut pts = Vec::new();
    push_line(&mut pts, origin, Point::new(right, origin.y));
    push_line(&mut pts, origin, Point::new(origin.x, bottom));
    push_line(&mut pts, Point::new(right, origin.y), Point::new(right, bottom));
    push_line(&mut pts, Point::new(origin.x, bottom), Point::new(right, bottom));
    Ok(pts)
}

/// Generate a filled rectangle as `height` horizontal lines.
///
/// Row `i` (for `i` in `0..height`) runs from `(x, y + i)` to
/// `(x + width, y + i)` inclusive.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if width or height is 0.
pub fn generate_filled_box_pts(origin: Point, width: u32, height: u32) -> Result<Vec<Point>> {
    let right = box_corner(origin, width, height)?.x;

    let mut pts = Vec::new();
    for i in 0..height as i32 {
        let y = origin.y + i;
        push_line(&mut pts, Point::new(origin.x, y), Point::new(right, y));
    }
    Ok(pts)
}

/// Midpoint circle walk over the first octant.
///
/// Calls `f(x, y)` for each step with `x <= y`, starting at `(0, radius)`.
fn midpoint_octant(radius: i32, mut f: impl FnMut(i32, i32)) {
    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius as i64;
    while x <= y {
        f(x, y);
        if d < 0 {
            d += 2 * x as i64 + 3;
        } else {
            d += 2 * (x as i64 - y as i64) + 5;
            y -= 1;
        }
        x += 1;
    }
}

fn check_circle(center: Point, radius: u32) -> Result<i32> {
    if radius == 0 {
        return Err(Error::InvalidGeometry("circle radius is 0".to_string()));
    }
    let r = i32::try_from(radius)
        .map_err(|_| Error::InvalidGeometry(format!("radius {radius} too large")))?;
    for c in [center.x, center.y] {
        if c.checked_sub(r).is_none() || c.checked_add(r).is_none() {
            return Err(Error::InvalidGeometry(format!(
                "circle of radius {radius} at ({}, {}) overflows coordinates",
                center.x, center.y
            )));
        }
    }
    Ok(r)
}

/// Generate a circle outline with the midpoint algorithm.
///
/// Each step of the walk plots the eight symmetric octant points, so every
/// point has its seven reflections in the list.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if `radius` is 0.
pub fn generate_circle_pts(center: Point, radius: u32) -> Result<Vec<Point>> {
    let r = check_circle(center, radius)?;
    let (cx, cy) = (center.x, center.y);
    let mut pts = Vec::new();
    midpoint_octant(r, |x, y| {
        pts.extend_from_slice(&[
            Point::new(cx + x, cy + y),
            Point::new(cx + x, cy - y),
            Point::new(cx - x, cy + y),
            Point::new(cx - x, cy - y),
            Point::new(cx + y, cy + x),
            Point::new(cx + y, cy - x),
            Point::new(cx - y, cy + x),
            Point::new(cx - y, cy - x),
        ]);
    });
    Ok(pts)
}

/// Generate a filled circle with the midpoint algorithm.
///
/// Each step draws the four horizontal spans joining symmetric points,
/// followed by a final horizontal diameter.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if `radius` is 0.
pub fn generate_filled_circle_pts(center: Point, radius: u32) -> Result<Vec<Point>> {
    let r = check_circle(center, radius)?;
    let (cx, cy) = (center.x, center.y);
    let mut pts = Vec::new();
    midpoint_octant(r, |x, y| {
        push_line(&mut pts, Point::new(cx - x, cy + y), Point::new(cx + x, cy + y));
        push_line(&mut pts, Point::new(cx - x, cy - y), Point::new(cx + x, cy - y));
        push_line(&mut pts, Point::new(cx - y, cy + x), Point::new(cx + y, cy + x));
        push_line(&mut pts, Point::new(cx - y, cy - x), Point::new(cx + y, cy - x));
    });
    push_line(&mut pts, Point::new(cx - r, cy), Point::new(cx + r, cy));
    Ok(pts)
}

/// Generate the three edges of a triangle.
pub fn generate_triangle_pts(p1: Point, p2: Point, p3: Point) -> Vec<Point> {
    let mut pts = Vec::new();
    push_line(&mut pts, p1, p2);
    push_line(&mut pts, p1, p3);
    push_line(&mut pts, p2, p3);
    pts
}

/// Sort three vertices by ascending Y.
fn sort_by_y(mut p1: Point, mut p2: Point, mut p3: Point) -> (Point, Point, Point) {
    if p1.y > p2.y {
        std::mem::swap(&mut p1, &mut p2);
    }
    if p1.y > p3.y {
        std::mem::swap(&mut p1, &mut p3);
    }
    if p2.y > p3.y {
        std::mem::swap(&mut p2, &mut p3);
    }
    (p1, p2, p3)
}

/// Inverse slope `dx / dy` of the edge from `a` to `b`.
fn slope(a: Point, b: Point) -> f64 {
    (b.x as i64 - a.x as i64) as f64 / (b.y as i64 - a.y as i64) as f64
}

/// Fill a triangle whose two upper vertices `p1`, `p2` share a row.
///
/// Scans from the apex `p3` upward; the shared row itself is not filled.
fn push_flat_top(pts: &mut Vec<Point>, p1: Point, p2: Point, p3: Point) {
    let s1 = slope(p1, p3);
    let s2 = slope(p2, p3);
    let mut x1 = p3.x as f64;
    let mut x2 = p3.x as f64;
    let mut y = p3.y;
    while y > p1.y {
        push_line(pts, Point::new(x1 as i32, y), Point::new(x2 as i32, y));
        x1 -= s1;
        x2 -= s2;
        y -= 1;
    }
}

/// Fill a triangle whose two lower vertices `p2`, `p3` share a row.
///
/// Scans from the apex `p1` down to and including the shared row.
fn push_flat_bottom(pts: &mut Vec<Point>, p1: Point, p2: Point, p3: Point) {
    let s1 = slope(p1, p2);
    let s2 = slope(p1, p3);
    let mut x1 = p1.x as f64;
    let mut x2 = p1.x as f64;
    for y in p1.y..=p2.y {
        push_line(pts, Point::new(x1 as i32, y), Point::new(x2 as i32, y));
        x1 += s1;
        x2 += s2;
    }
}

fn check_triangle(p1: Point, p2: Point, p3: Point) -> Result<()> {
    if p1.y == p2.y && p2.y == p3.y {
        return Err(Error::InvalidGeometry(format!(
            "triangle ({}, {}), ({}, {}), ({}, {}) has zero height",
            p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
        )));
    }
    Ok(())
}

fn push_filled_triangle(pts: &mut Vec<Point>, p1: Point, p2: Point, p3: Point) -> Result<()> {
    check_triangle(p1, p2, p3)?;
    let (p1, p2, p3) = sort_by_y(p1, p2, p3);

    if p1.y == p2.y {
        push_flat_top(pts, p1, p2, p3);
    } else if p2.y == p3.y {
        push_flat_bottom(pts, p1, p2, p3);
    } else {
        // Split the long edge p1 -> p3 at the row of p2
        let ratio = (p2.y as i64 - p1.y as i64) as f64 / (p3.y as i64 - p1.y as i64) as f64;
        // Between p1.x and p3.x, so it fits back into i32
        let x4 = p1.x as i64 + (ratio * (p3.x as i64 - p1.x as i64) as f64) as i64;
        let p4 = Point::new(x4 as i32, p2.y);
        push_flat_bottom(pts, p1, p2, p4);
        push_flat_top(pts, p2, p4, p3);
    }
    Ok(())
}

/// Generate a filled triangle by scanline interpolation.
///
/// The vertices are sorted by Y. A triangle with a horizontal edge is
/// filled directly; otherwise it is split where the long edge crosses the
/// middle vertex's row into a flat-bottom and a flat-top half.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] if all three vertices share one row.
pub fn generate_filled_triangle_pts(p1: Point, p2: Point, p3: Point) -> Result<Vec<Point>> {
    let mut pts = Vec::new();
    push_filled_triangle(&mut pts, p1, p2, p3)?;
    Ok(pts)
}

fn check_polygon(vertices: &[Point]) -> Result<()> {
    if vertices.len() < 3 {
        return Err(Error::InvalidGeometry(format!(
            "polygon needs at least 3 vertices, got {}",
            vertices.len()
        )));
    }
    Ok(())
}

/// Generate a polyline connecting the vertices.
///
/// If `close` is true, the last vertex is connected to the first.
pub fn generate_polyline_pts(vertices: &[Point], close: bool) -> Vec<Point> {
    let mut pts = Vec::new();
    for pair in vertices.windows(2) {
        push_line(&mut pts, pair[0], pair[1]);
    }
    if close {
        if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
            push_line(&mut pts, last, first);
        }
    }
    pts
}

/// Generate the closed outline of a polygon.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] for fewer than 3 vertices.
pub fn generate_polygon_pts(vertices: &[Point]) -> Result<Vec<Point>> {
    check_polygon(vertices)?;
    Ok(generate_polyline_pts(vertices, true))
}

/// Generate a filled polygon as a fan of triangles from the first vertex.
///
/// Triangle `i` is `(v[0], v[i], v[i + 1])` for each interior index. A fan
/// triangle with zero height contributes the horizontal span it covers.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] for fewer than 3 vertices.
pub fn generate_filled_polygon_pts(vertices: &[Point]) -> Result<Vec<Point>> {
    check_polygon(vertices)?;
    let apex = vertices[0];
    let mut pts = Vec::new();
    for pair in vertices[1..].windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if apex.y == a.y && a.y == b.y {
            let xmin = apex.x.min(a.x).min(b.x);
            let xmax = apex.x.max(a.x).max(b.x);
            push_line(&mut pts, Point::new(xmin, a.y), Point::new(xmax, a.y));
        } else {
            push_filled_triangle(&mut pts, apex, a, b)?;
        }
    }
    Ok(pts)
}

// =============================================================================
// Canvas rendering implementations
// =============================================================================

impl<P: Sample> Canvas<P> {
    /// Render a point list onto the canvas with `color`.
    ///
    /// Every point and the color are validated before the first write, so on
    /// error the canvas is left unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `color` exceeds `max_value` and
    /// [`Error::OutOfBounds`] for the first point outside the canvas.
    pub fn render_pts(&mut self, pts: &[Point], color: P) -> Result<()> {
        self.check_value(color)?;
        if let Some(p) = pts.iter().find(|p| !self.contains_point(**p)) {
            self.check_bounds(p.x, p.y)?;
        }
        for p in pts {
            self.set_unchecked(p.x as u32, p.y as u32, color);
        }
        Ok(())
    }

    /// Validate `color` and the box spanning `min..=max` before a shape is
    /// generated.
    pub(crate) fn check_shape(&self, color: P, min: (i64, i64), max: (i64, i64)) -> Result<()> {
        self.check_value(color)?;
        self.check_box(min, max)
    }

    /// Draw a line from `p1` to `p2`.
    ///
    /// See [`generate_line_pts`] for the pixel selection rule.
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: P) -> Result<()> {
        trace!("draw_line {p1:?} -> {p2:?}");
        let (min, max) = hull(&[p1, p2]);
        self.check_shape(color, min, max)?;
        let pts = generate_line_pts(p1, p2);
        self.render_pts(&pts, color)
    }

    /// Draw the outline of a rectangle with corner `origin`.
    pub fn draw_rectangle(
        &mut self,
        origin: Point,
        width: u32,
        height: u32,
        color: P,
    ) -> Result<()> {
        trace!("draw_rectangle {origin:?} {width}x{height}");
        let far = box_corner(origin, width, height)?;
        let (min, max) = hull(&[origin, far]);
        self.check_shape(color, min, max)?;
        let pts = generate_box_pts(origin, width, height)?;
        self.render_pts(&pts, color)
    }

    /// Draw a filled rectangle with corner `origin`.
    ///
    /// Fills rows `origin.y..origin.y + height`, each spanning
    /// `origin.x..=origin.x + width`.
    pub fn draw_filled_rectangle(
        &mut self,
        origin: Point,
        width: u32,
        height: u32,
        color: P,
    ) -> Result<()> {
        trace!("draw_filled_rectangle {origin:?} {width}x{height}");
        let far = box_corner(origin, width, height)?;
        let (min, (right, bottom)) = hull(&[origin, far]);
        self.check_shape(color, min, (right, bottom - 1))?;
        let pts = generate_filled_box_pts(origin, width, height)?;
        self.render_pts(&pts, color)
    }

    fn check_circle_box(&self, center: Point, radius: u32, color: P) -> Result<()> {
        let r = check_circle(center, radius)? as i64;
        let (cx, cy) = (center.x as i64, center.y as i64);
        self.check_shape(color, (cx - r, cy - r), (cx + r, cy + r))
    }

    /// Draw a circle outline centered at `center`.
    pub fn draw_circle(&mut self, center: Point, radius: u32, color: P) -> Result<()> {
        trace!("draw_circle {center:?} r={radius}");
        self.check_circle_box(center, radius, color)?;
        let pts = generate_circle_pts(center, radius)?;
        self.render_pts(&pts, color)
    }

    /// Draw a filled circle centered at `center`.
    pub fn draw_filled_circle(&mut self, center: Point, radius: u32, color: P) -> Result<()> {
        trace!("draw_filled_circle {center:?} r={radius}");
        self.check_circle_box(center, radius, color)?;
        let pts = generate_filled_circle_pts(center, radius)?;
        self.render_pts(&pts, color)
    }

    /// Draw the three edges of a triangle.
    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: P) -> Result<()> {
        trace!("draw_triangle {p1:?} {p2:?} {p3:?}");
        let (min, max) = hull(&[p1, p2, p3]);
        self.check_shape(color, min, max)?;
        let pts = generate_triangle_pts(p1, p2, p3);
        self.render_pts(&pts, color)
    }

    /// Draw a filled triangle.
    ///
    /// See [`generate_filled_triangle_pts`].
    pub fn draw_filled_triangle(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        color: P,
    ) -> Result<()> {
        trace!("draw_filled_triangle {p1:?} {p2:?} {p3:?}");
        check_triangle(p1, p2, p3)?;
        let (min, max) = hull(&[p1, p2, p3]);
        self.check_shape(color, min, max)?;
        let pts = generate_filled_triangle_pts(p1, p2, p3)?;
        self.render_pts(&pts, color)
    }

    /// Draw a closed polygon outline.
    pub fn draw_polygon(&mut self, vertices: &[Point], color: P) -> Result<()> {
        trace!("draw_polygon with {} vertices", vertices.len());
        check_polygon(vertices)?;
        let (min, max) = hull(vertices);
        self.check_shape(color, min, max)?;
        let pts = generate_polygon_pts(vertices)?;
        self.render_pts(&pts, color)
    }

    /// Draw a filled polygon.
    ///
    /// See [`generate_filled_polygon_pts`] for the triangulation and its
    /// limits on concave input.
    pub fn draw_filled_polygon(&mut self, vertices: &[Point], color: P) -> Result<()> {
        trace!("draw_filled_polygon with {} vertices", vertices.len());
        check_polygon(vertices)?;
        let (min, max) = hull(vertices);
        self.check_shape(color, min, max)?;
        let pts = generate_filled_polygon_pts(vertices)?;
        self.render_pts(&pts, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    fn set_pixels<P: Sample>(canvas: &Canvas<P>, color: P) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.get_unchecked(x, y) == color {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }

    #[test]
    fn test_generate_line_horizontal() {
        let pts = generate_line_pts(Point::new(0, 0), Point::new(10, 0));
        assert_eq!(pts.len(), 11);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[10], Point::new(10, 0));
    }

    #[test]
    fn test_generate_line_reversed_endpoints() {
        let forward = generate_line_pts(Point::new(0, 0), Point::new(4, 2));
        let backward = generate_line_pts(Point::new(4, 2), Point::new(0, 0));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_generate_line_single_point() {
        let pts = generate_line_pts(Point::new(5, 5), Point::new(5, 5));
        assert_eq!(pts, vec![Point::new(5, 5)]);
    }

    #[test]
    fn test_generate_line_steep_has_gaps() {
        // One sample per column: a 1-wide, 6-high line only yields 2 points
        let pts = generate_line_pts(Point::new(0, 0), Point::new(1, 6));
        assert_eq!(pts, vec![Point::new(0, 0), Point::new(1, 6)]);
    }

    #[test]
    fn test_generate_line_truncates_toward_zero() {
        // dy negative: -1 * 1 / 4 truncates to 0, not -1
        let pts = generate_line_pts(Point::new(0, 3), Point::new(4, 2));
        assert_eq!(
            pts,
            vec![
                Point::new(0, 3),
                Point::new(1, 3),
                Point::new(2, 3),
                Point::new(3, 3),
                Point::new(4, 2),
            ]
        );
    }

    #[test]
    fn test_draw_vertical_line() {
        let mut canvas: Canvas<Rgb> = Canvas::new(5, 5).unwrap();
        canvas
            .draw_line(Point::new(2, 1), Point::new(2, 4), Rgb::RED)
            .unwrap();
        assert_eq!(
            set_pixels(&canvas, Rgb::RED),
            vec![(2, 1), (2, 2), (2, 3), (2, 4)]
        );
    }

    #[test]
    fn test_draw_vertical_line_upward() {
        let mut canvas: Canvas<u8> = Canvas::new(5, 5).unwrap();
        canvas
            .draw_line(Point::new(2, 4), Point::new(2, 1), 9)
            .unwrap();
        assert_eq!(canvas.count_value(9), 4);
    }

    #[test]
    fn test_draw_shallow_diagonal() {
        let mut canvas: Canvas<Rgb> = Canvas::new(5, 5).unwrap();
        canvas
            .draw_line(Point::new(0, 0), Point::new(4, 2), Rgb::GREEN)
            .unwrap();
        assert_eq!(
            set_pixels(&canvas, Rgb::GREEN),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn test_draw_line_out_of_bounds_leaves_canvas() {
        let mut canvas: Canvas<u8> = Canvas::new(5, 5).unwrap();
        let err = canvas.draw_line(Point::new(0, 0), Point::new(5, 0), 1);
        assert!(matches!(err, Err(Error::OutOfBounds { x: 5, y: 0, .. })));
        assert_eq!(canvas.count_value(1), 0);
    }

    #[test]
    fn test_draw_color_above_max_rejected() {
        let mut canvas: Canvas<u8> = Canvas::with_max_value(5, 5, 10).unwrap();
        let err = canvas.draw_line(Point::new(0, 0), Point::new(4, 0), 11);
        assert!(matches!(err, Err(Error::ValueOutOfRange { .. })));
    }

    #[test]
    fn test_draw_filled_rectangle() {
        let mut canvas: Canvas<Rgb> = Canvas::new(5, 5).unwrap();
        canvas
            .draw_filled_rectangle(Point::new(1, 1), 2, 2, Rgb::BLUE)
            .unwrap();
        assert_eq!(
            set_pixels(&canvas, Rgb::BLUE),
            vec![(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2)]
        );
    }

    #[test]
    fn test_draw_rectangle_outline() {
        let mut canvas: Canvas<bool> = Canvas::new(6, 6).unwrap();
        canvas
            .draw_rectangle(Point::new(1, 1), 3, 2, true)
            .unwrap();
        // 4 columns x 3 rows perimeter, interior (2..=3, 2) untouched
        assert_eq!(canvas.count_value(true), 10);
        assert!(canvas.get(1, 1).unwrap());
        assert!(canvas.get(4, 3).unwrap());
        assert!(!canvas.get(2, 2).unwrap());
    }

    #[test]
    fn test_rectangle_zero_extent() {
        let mut canvas: Canvas<u8> = Canvas::new(5, 5).unwrap();
        assert!(matches!(
            canvas.draw_rectangle(Point::new(0, 0), 0, 3, 1),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            canvas.draw_filled_rectangle(Point::new(0, 0), 3, 0, 1),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_circle_symmetry() {
        let (cx, cy) = (20, 20);
        let pts = generate_circle_pts(Point::new(cx, cy), 9).unwrap();
        for p in &pts {
            let (dx, dy) = (p.x - cx, p.y - cy);
            for (mx, my) in [
                (dx, -dy),
                (-dx, dy),
                (-dx, -dy),
                (dy, dx),
                (dy, -dx),
                (-dy, dx),
                (-dy, -dx),
            ] {
                assert!(
                    pts.contains(&Point::new(cx + mx, cy + my)),
                    "missing reflection of {p:?}"
                );
            }
            let dist = ((dx * dx + dy * dy) as f64).sqrt();
            assert!((dist - 9.0).abs() < 1.0, "{p:?} at distance {dist}");
        }
    }

    #[test]
    fn test_draw_circle() {
        let mut canvas: Canvas<u8> = Canvas::new(21, 21).unwrap();
        canvas.draw_circle(Point::new(10, 10), 8, 255).unwrap();
        assert_eq!(canvas.get(10, 2).unwrap(), 255);
        assert_eq!(canvas.get(10, 18).unwrap(), 255);
        assert_eq!(canvas.get(2, 10).unwrap(), 255);
        assert_eq!(canvas.get(18, 10).unwrap(), 255);
        assert_eq!(canvas.get(10, 10).unwrap(), 0);
    }

    #[test]
    fn test_draw_filled_circle() {
        let mut canvas: Canvas<u8> = Canvas::new(21, 21).unwrap();
        canvas
            .draw_filled_circle(Point::new(10, 10), 8, 255)
            .unwrap();
        assert_eq!(canvas.get(10, 10).unwrap(), 255);
        assert_eq!(canvas.get(2, 10).unwrap(), 255);
        assert_eq!(canvas.get(14, 14).unwrap(), 255);
        assert_eq!(canvas.get(0, 0).unwrap(), 0);
        assert_eq!(canvas.get(17, 17).unwrap(), 0);
    }

    #[test]
    fn test_circle_zero_radius() {
        let mut canvas: Canvas<u8> = Canvas::new(5, 5).unwrap();
        assert!(matches!(
            canvas.draw_circle(Point::new(2, 2), 0, 1),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            canvas.draw_filled_circle(Point::new(2, 2), 0, 1),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_circle_clipping_is_an_error() {
        let mut canvas: Canvas<u8> = Canvas::new(10, 10).unwrap();
        assert!(matches!(
            canvas.draw_circle(Point::new(1, 5), 3, 1),
            Err(Error::OutOfBounds { .. })
        ));
        assert_eq!(canvas.count_value(1), 0);
    }

    #[test]
    fn test_filled_triangle_flat_bottom() {
        let mut canvas: Canvas<u8> = Canvas::new(5, 5).unwrap();
        canvas
            .draw_filled_triangle(Point::new(0, 2), Point::new(2, 0), Point::new(4, 2), 1)
            .unwrap();
        assert_eq!(
            set_pixels(&canvas, 1),
            vec![
                (2, 0),
                (1, 1),
                (2, 1),
                (3, 1),
                (0, 2),
                (1, 2),
                (2, 2),
                (3, 2),
                (4, 2),
            ]
        );
    }

    #[test]
    fn test_filled_triangle_flat_top_skips_shared_row() {
        let mut canvas: Canvas<u8> = Canvas::new(5, 5).unwrap();
        canvas
            .draw_filled_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(2, 2), 1)
            .unwrap();
        assert_eq!(
            set_pixels(&canvas, 1),
            vec![(1, 1), (2, 1), (3, 1), (2, 2)]
        );
    }

    #[test]
    fn test_filled_triangle_split() {
        let mut canvas: Canvas<u8> = Canvas::new(10, 10).unwrap();
        canvas
            .draw_filled_triangle(Point::new(0, 0), Point::new(8, 4), Point::new(0, 8), 1)
            .unwrap();
        // Every row of the long edge is covered
        for y in 0..=8 {
            assert_eq!(canvas.get(0, y).unwrap(), 1, "row {y}");
        }
        assert_eq!(canvas.get(8, 4).unwrap(), 1);
        assert_eq!(canvas.get(8, 0).unwrap(), 0);
        assert_eq!(canvas.get(8, 8).unwrap(), 0);
    }

    #[test]
    fn test_filled_triangle_zero_height() {
        let mut canvas: Canvas<u8> = Canvas::new(5, 5).unwrap();
        assert!(matches!(
            canvas.draw_filled_triangle(Point::new(0, 1), Point::new(2, 1), Point::new(4, 1), 1),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_draw_triangle_outline() {
        let mut canvas: Canvas<u8> = Canvas::new(5, 5).unwrap();
        canvas
            .draw_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), 1)
            .unwrap();
        assert_eq!(canvas.get(4, 0).unwrap(), 1);
        assert_eq!(canvas.get(0, 4).unwrap(), 1);
        assert_eq!(canvas.get(2, 2).unwrap(), 1);
        assert_eq!(canvas.get(1, 1).unwrap(), 0);
    }

    #[test]
    fn test_polygon_outline_closes() {
        let mut canvas: Canvas<u8> = Canvas::new(6, 6).unwrap();
        let square = [
            Point::new(1, 1),
            Point::new(4, 1),
            Point::new(4, 4),
            Point::new(1, 4),
        ];
        canvas.draw_polygon(&square, 1).unwrap();
        // Closing edge (1,4) -> (1,1)
        assert_eq!(canvas.get(1, 2).unwrap(), 1);
        assert_eq!(canvas.get(1, 3).unwrap(), 1);
        assert_eq!(canvas.count_value(1), 12);
    }

    #[test]
    fn test_filled_polygon_square() {
        let mut canvas: Canvas<u8> = Canvas::new(6, 6).unwrap();
        let square = [
            Point::new(1, 1),
            Point::new(4, 1),
            Point::new(4, 4),
            Point::new(1, 4),
        ];
        canvas.draw_filled_polygon(&square, 1).unwrap();
        assert_eq!(canvas.get(2, 3).unwrap(), 1);
        assert_eq!(canvas.get(3, 2).unwrap(), 1);
        assert_eq!(canvas.get(0, 0).unwrap(), 0);
        assert_eq!(canvas.get(5, 5).unwrap(), 0);
    }

    #[test]
    fn test_polygon_too_few_vertices() {
        let mut canvas: Canvas<u8> = Canvas::new(6, 6).unwrap();
        let two = [Point::new(0, 0), Point::new(3, 3)];
        assert!(matches!(
            canvas.draw_polygon(&two, 1),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            canvas.draw_filled_polygon(&two, 1),
            Err(Error::InvalidGeometry(_))
        ));
    }

    fn assert_rejected(canvas: &Canvas<u8>, result: Result<()>) {
        assert!(
            matches!(
                result,
                Err(Error::OutOfBounds { .. } | Error::InvalidGeometry(_))
            ),
            "expected rejection, got {result:?}"
        );
        assert_eq!(canvas.count_value(0), 25, "canvas was modified");
    }

    #[test]
    fn test_huge_shapes_rejected_before_generation() {
        let mut canvas: Canvas<u8> = Canvas::new(5, 5).unwrap();
        let huge = 1u32 << 30;

        let err = canvas.draw_filled_rectangle(Point::new(0, 0), huge, huge, 1);
        assert!(matches!(
            err,
            Err(Error::OutOfBounds { x: 1_073_741_824, y: 1_073_741_823, .. })
        ));
        let err = canvas.draw_line(Point::new(0, 0), Point::new(200_000_000, 0), 1);
        assert!(matches!(
            err,
            Err(Error::OutOfBounds { x: 200_000_000, y: 0, .. })
        ));

        let r = canvas.draw_rectangle(Point::new(0, 0), huge, huge, 1);
        assert_rejected(&canvas, r);
        let r = canvas.draw_circle(Point::new(2, 2), huge, 1);
        assert_rejected(&canvas, r);
        let r = canvas.draw_filled_circle(Point::new(2, 2), huge, 1);
        assert_rejected(&canvas, r);
        let r = canvas.draw_filled_circle(Point::new(0, 0), u32::MAX, 1);
        assert_rejected(&canvas, r);
    }

    #[test]
    fn test_extreme_vertices_rejected() {
        let mut canvas: Canvas<u8> = Canvas::new(5, 5).unwrap();
        let (lo, hi) = (Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));

        let err = canvas.draw_filled_triangle(lo, hi, Point::new(0, 1), 1);
        assert!(matches!(
            err,
            Err(Error::OutOfBounds { x, y: 0, .. }) if x == i32::MIN as i64
        ));
        let r = canvas.draw_triangle(lo, hi, Point::new(0, i32::MAX), 1);
        assert_rejected(&canvas, r);
        let r = canvas.draw_line(lo, hi, 1);
        assert_rejected(&canvas, r);

        let corners = [
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
            Point::new(i32::MIN, i32::MAX),
        ];
        let r = canvas.draw_polygon(&corners, 1);
        assert_rejected(&canvas, r);
        let r = canvas.draw_filled_polygon(&corners, 1);
        assert_rejected(&canvas, r);

        // Far corner overflows i32
        let r = canvas.draw_rectangle(Point::new(i32::MAX, 0), 1, 1, 1);
        assert!(matches!(r, Err(Error::InvalidGeometry(_))));
        let r = canvas.draw_circle(Point::new(i32::MAX, 0), 5, 1);
        assert!(matches!(r, Err(Error::InvalidGeometry(_))));
        assert_eq!(canvas.count_value(0), 25);
    }

    #[test]
    fn test_filled_triangle_far_vertices_generate_without_overflow() {
        // Slopes over the full i32 range stay finite in i64
        let pts = generate_filled_triangle_pts(
            Point::new(i32::MIN, 0),
            Point::new(i32::MAX, 0),
            Point::new(0, 1),
        )
        .unwrap();
        assert_eq!(pts, vec![Point::new(0, 1)]);
    }

    #[test]
    fn test_filled_polygon_collinear_fan_triangle() {
        let mut canvas: Canvas<u8> = Canvas::new(6, 6).unwrap();
        let pts = [
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(4, 0),
            Point::new(4, 4),
        ];
        canvas.draw_filled_polygon(&pts, 1).unwrap();
        assert_eq!(canvas.get(3, 0).unwrap(), 1);
        assert_eq!(canvas.get(4, 4).unwrap(), 1);
    }
}
