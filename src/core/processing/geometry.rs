use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{BLEED_IN, CARD_HEIGHT_IN, EIGHTHS_PER_INCH};

/// Integer crop rectangle in source pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Pixels per 1/8 inch, assuming the full bled height spans `CARD_HEIGHT_IN + BLEED_IN` inches.
pub fn bleed_margin(height: u32) -> f64 {
    (height as f64 / (CARD_HEIGHT_IN + BLEED_IN)) / EIGHTHS_PER_INCH
}

/// Snap a fractional crop edge to the pixel grid. Half-way values round to even,
/// identically for all four edges.
fn snap(edge: f64) -> i64 {
    edge.round_ties_even() as i64
}

/// Crop rectangle `(margin, margin, width - margin, height - margin)` snapped to pixels.
pub fn crop_bounds(width: u32, height: u32, margin: f64) -> Result<CropRect> {
    let left = snap(margin);
    let top = snap(margin);
    let right = snap(width as f64 - margin);
    let bottom = snap(height as f64 - margin);

    if left < 0 || top < 0 || right <= left || bottom <= top {
        return Err(Error::DegenerateCrop {
            width,
            height,
            margin,
        });
    }

    let rect = CropRect {
        x: left as u32,
        y: top as u32,
        width: (right - left) as u32,
        height: (bottom - top) as u32,
    };
    debug!(
        "Crop bounds for {}x{} (margin {:.3}px): {:?}",
        width, height, margin, rect
    );
    Ok(rect)
}

/// Output size for a cropped image: height is `floor(height * scale)`, width follows the
/// aspect ratio. Both are at least one pixel.
pub fn target_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    // Absorb representation error such as 0.29 * 100 = 28.999999999999996
    let new_height = ((height as f64 * scale) + 1e-9).floor().max(1.0);
    let new_width = (width as f64 * new_height / height as f64).round().max(1.0);
    (new_width as u32, new_height as u32)
}
