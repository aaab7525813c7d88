//! Rotation and flip operations
//!
//! This module provides:
//! - Orthogonal rotations (90/180/270 degrees)
//! - Horizontal and vertical flips
//!
//! The functions returning a canvas leave their input untouched. The
//! `_in_place` variants take `&mut Canvas`, so no other reference can observe
//! the grid while it is being rewritten. Shape-changing rotation builds the
//! complete rotated grid first and replaces the canvas in one assignment.

use crate::TransformResult;
use log::debug;
use netpbm_core::{Canvas, Sample};

// ============================================================================
// Orthogonal rotation
// ============================================================================

/// Rotate an image by a multiple of 90 degrees
///
/// # Arguments
/// * `canvas` - Input image
/// * `quads` - Number of clockwise quarter turns (taken modulo 4)
pub fn rotate_orth<P: Sample>(canvas: &Canvas<P>, quads: u32) -> TransformResult<Canvas<P>> {
    match quads % 4 {
        0 => Ok(canvas.clone()),
        1 => rotate_90(canvas, true),
        2 => rotate_180(canvas),
        _ => rotate_90(canvas, false),
    }
}

/// Rotate an image 90 degrees
///
/// The output has width and height swapped. Clockwise rotation moves the
/// source pixel `(x, y)` to `(height - 1 - y, x)`.
///
/// # Arguments
/// * `canvas` - Input image
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90<P: Sample>(canvas: &Canvas<P>, clockwise: bool) -> TransformResult<Canvas<P>> {
    let (w, h) = canvas.size();
    debug!("rotate_90 {w}x{h} clockwise={clockwise}");

    // Output dimensions are swapped
    let mut out = canvas.create_template(h, w)?;
    for y in 0..h {
        for (x, &val) in canvas.row(y).iter().enumerate() {
            let x = x as u32;
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            out.set_unchecked(nx, ny, val);
        }
    }
    Ok(out)
}

/// Rotate an image 90 degrees clockwise in place.
///
/// Width and height are swapped. On error the canvas is left unchanged.
pub fn rotate_90_cw_in_place<P: Sample>(canvas: &mut Canvas<P>) -> TransformResult<()> {
    let rotated = rotate_90(canvas, true)?;
    *canvas = rotated;
    Ok(())
}

/// Rotate an image 180 degrees
pub fn rotate_180<P: Sample>(canvas: &Canvas<P>) -> TransformResult<Canvas<P>> {
    let mut out = canvas.clone();
    rotate_180_in_place(&mut out)?;
    Ok(out)
}

/// Rotate an image in-place by 180 degrees
pub fn rotate_180_in_place<P: Sample>(canvas: &mut Canvas<P>) -> TransformResult<()> {
    let (w, h) = canvas.size();
    debug!("rotate_180 {w}x{h}");

    // Swap pixels from opposite corners
    let total_pixels = (w as u64) * (h as u64);
    let half = total_pixels / 2;

    for i in 0..half {
        let x1 = (i % (w as u64)) as u32;
        let y1 = (i / (w as u64)) as u32;
        let x2 = w - 1 - x1;
        let y2 = h - 1 - y1;

        let val1 = canvas.get_unchecked(x1, y1);
        let val2 = canvas.get_unchecked(x2, y2);

        canvas.set_unchecked(x1, y1, val2);
        canvas.set_unchecked(x2, y2, val1);
    }

    Ok(())
}

// ============================================================================
// Flips
// ============================================================================

/// Flip an image left-right (horizontal mirror)
pub fn flip_lr<P: Sample>(canvas: &Canvas<P>) -> TransformResult<Canvas<P>> {
    let mut out = canvas.clone();
    flip_lr_in_place(&mut out)?;
    Ok(out)
}

/// Flip an image left-right in place.
///
/// Column `j` is swapped with column `width - 1 - j` for `j < width / 2`;
/// a middle column of an odd width stays where it is.
pub fn flip_lr_in_place<P: Sample>(canvas: &mut Canvas<P>) -> TransformResult<()> {
    debug!("flip_lr {}x{}", canvas.width(), canvas.height());
    for y in 0..canvas.height() {
        canvas.row_mut(y).reverse();
    }
    Ok(())
}

/// Flip an image top-bottom (vertical mirror)
pub fn flip_tb<P: Sample>(canvas: &Canvas<P>) -> TransformResult<Canvas<P>> {
    let mut out = canvas.clone();
    flip_tb_in_place(&mut out)?;
    Ok(out)
}

/// Flip an image top-bottom in place.
///
/// Row `i` is swapped with row `height - 1 - i` for `i < height / 2`.
pub fn flip_tb_in_place<P: Sample>(canvas: &mut Canvas<P>) -> TransformResult<()> {
    let (w, h) = canvas.size();
    debug!("flip_tb {w}x{h}");
    for y1 in 0..h / 2 {
        let y2 = h - 1 - y1;
        for x in 0..w {
            let top = canvas.get_unchecked(x, y1);
            let bottom = canvas.get_unchecked(x, y2);
            canvas.set_unchecked(x, y1, bottom);
            canvas.set_unchecked(x, y2, top);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpbm_core::{PnmFormat, Rgb};

    /// 3x2 gray canvas:
    ///
    /// ```text
    /// 1 2 3
    /// 4 5 6
    /// ```
    fn sample_gray() -> Canvas<u8> {
        Canvas::from_raw(3, 2, 255, PnmFormat::P5, vec![1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn test_rotate_90_cw() {
        let r = rotate_90(&sample_gray(), true).unwrap();
        assert_eq!(r.size(), (2, 3));
        assert_eq!(r.data(), &[4, 1, 5, 2, 6, 3]);
        assert_eq!(r.format(), PnmFormat::P5);
    }

    #[test]
    fn test_rotate_90_ccw() {
        let r = rotate_90(&sample_gray(), false).unwrap();
        assert_eq!(r.size(), (2, 3));
        assert_eq!(r.data(), &[3, 6, 2, 5, 1, 4]);
    }

    #[test]
    fn test_rotate_180() {
        let r = rotate_180(&sample_gray()).unwrap();
        assert_eq!(r.data(), &[6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_rotate_cw_in_place_four_times_restores() {
        let mut canvas: Canvas<Rgb> = Canvas::new(5, 3).unwrap();
        canvas.set(0, 0, Rgb::RED).unwrap();
        canvas.set(4, 1, Rgb::BLUE).unwrap();
        let original = canvas.clone();

        rotate_90_cw_in_place(&mut canvas).unwrap();
        assert_eq!(canvas.size(), (3, 5));
        // Top-left moves to top-right
        assert_eq!(canvas.get(2, 0).unwrap(), Rgb::RED);
        for _ in 0..3 {
            rotate_90_cw_in_place(&mut canvas).unwrap();
        }
        assert_eq!(canvas, original);
    }

    #[test]
    fn test_flip_lr() {
        let f = flip_lr(&sample_gray()).unwrap();
        assert_eq!(f.data(), &[3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn test_flip_tb() {
        let f = flip_tb(&sample_gray()).unwrap();
        assert_eq!(f.data(), &[4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_flips_are_involutions() {
        let mut canvas: Canvas<bool> = Canvas::new(5, 3).unwrap();
        canvas.set(0, 0, true).unwrap();
        canvas.set(1, 2, true).unwrap();
        let original = canvas.clone();

        flip_lr_in_place(&mut canvas).unwrap();
        assert!(canvas.get(4, 0).unwrap());
        assert!(canvas.get(3, 2).unwrap());
        flip_lr_in_place(&mut canvas).unwrap();
        assert_eq!(canvas, original);

        flip_tb_in_place(&mut canvas).unwrap();
        assert!(canvas.get(0, 2).unwrap());
        flip_tb_in_place(&mut canvas).unwrap();
        assert_eq!(canvas, original);
    }

    #[test]
    fn test_rotate_orth_matches_rotations() {
        let src = sample_gray();
        assert_eq!(rotate_orth(&src, 0).unwrap(), src);
        assert_eq!(rotate_orth(&src, 1).unwrap(), rotate_90(&src, true).unwrap());
        assert_eq!(rotate_orth(&src, 2).unwrap(), rotate_180(&src).unwrap());
        assert_eq!(rotate_orth(&src, 3).unwrap(), rotate_90(&src, false).unwrap());
        assert_eq!(rotate_orth(&src, 5).unwrap(), rotate_90(&src, true).unwrap());
    }
}
