//! Rounded-rectangle corner mask.
//!
//! The silhouette spans `[0, width] x [0, height]` in continuous coordinates with four
//! quarter-circle corners of radius `r`. Each pixel is tested at its outward-facing corner
//! point (the left/top edge for pixels in the left/top half, the right/bottom edge
//! otherwise), so the result is binary, mirror-symmetric on both axes, and the outermost
//! corner pixels are always cut when `r > 0`.
use image::{GrayImage, Luma};

pub const MASK_OPAQUE: u8 = 1;
pub const MASK_CLEAR: u8 = 0;

/// Distance from the pixel's outward corner to the straight-edged core of the rectangle
/// along one axis. Indices are folded onto the near half so both sides are computed
/// with identical arithmetic.
fn outside_core(index: u32, extent: u32, radius: f64) -> f64 {
    let folded = index.min(extent - 1 - index);
    (radius - folded as f64).max(0.0)
}

/// Build a `width x height` mask holding 1 inside the rounded rectangle and 0 outside.
/// `radius` is clamped to `[0, min(width, height) / 2]`.
pub fn corner_mask(width: u32, height: u32, radius: f64) -> GrayImage {
    let max_radius = width.min(height) as f64 / 2.0;
    let radius = if radius.is_finite() {
        radius.clamp(0.0, max_radius)
    } else {
        0.0
    };
    let r2 = radius * radius;

    GrayImage::from_fn(width, height, |x, y| {
        let dx = outside_core(x, width, radius);
        let dy = outside_core(y, height, radius);
        if dx * dx + dy * dy <= r2 {
            Luma([MASK_OPAQUE])
        } else {
            Luma([MASK_CLEAR])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(mask: &GrayImage, x: u32, y: u32) -> u8 {
        mask.get_pixel(x, y).0[0]
    }

    #[test]
    fn corners_clear_and_centre_opaque() {
        for (w, h) in [(3u32, 3u32), (4, 4), (3, 10), (10, 3), (17, 23), (64, 90), (677, 977)] {
            let max_r = w.min(h) as f64 / 2.0;
            for step in 1..=8 {
                let r = max_r * step as f64 / 8.0;
                let mask = corner_mask(w, h, r);
                assert_eq!(mask.dimensions(), (w, h));
                assert_eq!(value(&mask, 0, 0), MASK_CLEAR, "{w}x{h} r={r}");
                assert_eq!(value(&mask, w - 1, 0), MASK_CLEAR, "{w}x{h} r={r}");
                assert_eq!(value(&mask, 0, h - 1), MASK_CLEAR, "{w}x{h} r={r}");
                assert_eq!(value(&mask, w - 1, h - 1), MASK_CLEAR, "{w}x{h} r={r}");
                assert_eq!(value(&mask, w / 2, h / 2), MASK_OPAQUE, "{w}x{h} r={r}");
            }
        }
    }

    #[test]
    fn zero_radius_is_fully_opaque() {
        let mask = corner_mask(5, 7, 0.0);
        assert!(mask.pixels().all(|p| p.0[0] == MASK_OPAQUE));
    }

    #[test]
    fn values_are_binary() {
        let mask = corner_mask(40, 56, 9.3);
        assert!(mask.pixels().all(|p| p.0[0] <= MASK_OPAQUE));
    }

    #[test]
    fn mirror_symmetric() {
        let (w, h) = (31, 44);
        let mask = corner_mask(w, h, 6.7);
        for y in 0..h {
            for x in 0..w {
                let v = value(&mask, x, y);
                assert_eq!(v, value(&mask, w - 1 - x, y));
                assert_eq!(v, value(&mask, x, h - 1 - y));
            }
        }
    }

    #[test]
    fn edges_between_corners_are_opaque() {
        let mask = corner_mask(100, 140, 10.0);
        assert_eq!(value(&mask, 50, 0), MASK_OPAQUE);
        assert_eq!(value(&mask, 0, 70), MASK_OPAQUE);
        assert_eq!(value(&mask, 99, 70), MASK_OPAQUE);
        assert_eq!(value(&mask, 50, 139), MASK_OPAQUE);
        // Just inside the corner's bounding square but outside the arc
        assert_eq!(value(&mask, 1, 1), MASK_CLEAR);
        assert_eq!(value(&mask, 10, 10), MASK_OPAQUE);
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let clamped = corner_mask(8, 12, 100.0);
        let max = corner_mask(8, 12, 4.0);
        assert_eq!(clamped.as_raw(), max.as_raw());
    }
}
