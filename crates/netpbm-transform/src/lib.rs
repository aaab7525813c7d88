//! netpbm-transform - Geometric transformations for the netpbm raster engine
//!
//! This crate provides whole-canvas geometric operations:
//!
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Horizontal and vertical flips
//! - Nearest-neighbor resampling to a target size or by scale factors
//!
//! Every function is generic over the pixel variant, so the same code
//! serves monochrome, grayscale and color canvases.

mod error;
pub mod rotate;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use rotate::{
    flip_lr, flip_lr_in_place, flip_tb, flip_tb_in_place, rotate_180, rotate_180_in_place,
    rotate_90, rotate_90_cw_in_place, rotate_orth,
};
pub use scale::{resize_in_place, scale_by_sampling, scale_to_size};
