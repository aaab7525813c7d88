//! Image scaling operations
//!
//! Nearest-neighbor sampling only: output pixel `(x, y)` takes the source
//! pixel `(x · oldWidth / newWidth, y · oldHeight / newHeight)` with integer
//! division toward zero. There is no interpolation, so upscaling is blocky
//! and downscaling aliases.
//!
//! | Function | Target |
//! |---|---|
//! | `scale_to_size` | explicit width and height, new canvas |
//! | `resize_in_place` | explicit width and height, replaces the canvas |
//! | `scale_by_sampling` | scale factors, new canvas |

use crate::{TransformError, TransformResult};
use log::debug;
use netpbm_core::{Canvas, Sample};

/// Scale an image to a specific size
///
/// # Arguments
/// * `canvas` - Input image
/// * `width` - Target width
/// * `height` - Target height
///
/// # Errors
///
/// Returns [`TransformError::InvalidGeometry`] if either target dimension
/// is 0.
pub fn scale_to_size<P: Sample>(
    canvas: &Canvas<P>,
    width: u32,
    height: u32,
) -> TransformResult<Canvas<P>> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidGeometry(format!(
            "target size {width}x{height} has a zero dimension"
        )));
    }
    let (ws, hs) = canvas.size();
    debug!("scale {ws}x{hs} -> {width}x{height}");

    // Source column for every output column
    let src_x: Vec<u32> = (0..width as u64)
        .map(|j| (j * ws as u64 / width as u64) as u32)
        .collect();

    let mut out = canvas.create_template(width, height)?;
    for i in 0..height {
        let sy = (i as u64 * hs as u64 / height as u64) as u32;
        let src_row = canvas.row(sy);
        for (dst, &sx) in out.row_mut(i).iter_mut().zip(&src_x) {
            *dst = src_row[sx as usize];
        }
    }
    Ok(out)
}

/// Resize an image in place using nearest-neighbor sampling
///
/// The resampled grid is built completely before it replaces the canvas; if
/// validation fails the canvas keeps its previous grid and dimensions.
pub fn resize_in_place<P: Sample>(
    canvas: &mut Canvas<P>,
    width: u32,
    height: u32,
) -> TransformResult<()> {
    let resized = scale_to_size(canvas, width, height)?;
    *canvas = resized;
    Ok(())
}

/// Scale an image using nearest-neighbor sampling
///
/// The target size is `round(width · scale_x)` by `round(height · scale_y)`,
/// at least one pixel in each direction.
///
/// # Arguments
/// * `canvas` - Input image
/// * `scale_x` - Horizontal scale factor
/// * `scale_y` - Vertical scale factor
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if a factor is not a
/// positive finite number or the target size does not fit in `u32`.
pub fn scale_by_sampling<P: Sample>(
    canvas: &Canvas<P>,
    scale_x: f32,
    scale_y: f32,
) -> TransformResult<Canvas<P>> {
    let width = scaled_dimension(canvas.width(), scale_x)?;
    let height = scaled_dimension(canvas.height(), scale_y)?;
    scale_to_size(canvas, width, height)
}

fn scaled_dimension(size: u32, factor: f32) -> TransformResult<u32> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TransformError::InvalidScaleFactor(format!(
            "factor must be positive and finite, got {factor}"
        )));
    }
    let scaled = (size as f64 * factor as f64).round().max(1.0);
    if scaled > u32::MAX as f64 {
        return Err(TransformError::InvalidScaleFactor(format!(
            "factor {factor} scales {size} beyond the maximum dimension"
        )));
    }
    Ok(scaled as u32)
}
