use image::RgbaImage;
use image::imageops;

use crate::core::processing::geometry::crop_bounds;
use crate::error::Result;

/// Remove a `margin`-pixel border from every edge of `image`.
pub fn crop_bleed(image: &RgbaImage, margin: f64) -> Result<RgbaImage> {
    let rect = crop_bounds(image.width(), image.height(), margin)?;
    Ok(imageops::crop_imm(image, rect.x, rect.y, rect.width, rect.height).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn keeps_interior_pixels() {
        let image = RgbaImage::from_fn(10, 12, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        let cropped = crop_bleed(&image, 2.0).unwrap();
        assert_eq!(cropped.dimensions(), (6, 8));
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([2, 2, 7, 255]));
        assert_eq!(cropped.get_pixel(5, 7), &Rgba([7, 9, 7, 255]));
    }
}
