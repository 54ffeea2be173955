use image::{GrayImage, RgbaImage};

use crate::error::{Error, Result};

pub const ALPHA_OPAQUE: u8 = 255;
pub const ALPHA_CLEAR: u8 = 0;

/// Overwrite the alpha plane of `image` with `mask * 255`. RGB samples are left untouched.
pub fn apply_mask(image: &mut RgbaImage, mask: &GrayImage) -> Result<()> {
    if image.dimensions() != mask.dimensions() {
        return Err(Error::DimensionMismatch {
            width: image.width(),
            height: image.height(),
            mask_width: mask.width(),
            mask_height: mask.height(),
        });
    }

    for (pixel, coverage) in image.pixels_mut().zip(mask.pixels()) {
        pixel.0[3] = coverage.0[0].saturating_mul(ALPHA_OPAQUE);
    }
    Ok(())
}

/// Snap every alpha sample to fully clear or fully opaque around the midpoint.
pub fn binarize_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        pixel.0[3] = if pixel.0[3] >= 128 {
            ALPHA_OPAQUE
        } else {
            ALPHA_CLEAR
        };
    }
}
