use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::Nearest => ResizeAlg::Nearest,
    }
}

/// Resample an RGBA image to `target_cols x target_rows`. The resizer filters color with
/// premultiplied alpha, so transparent corners do not bleed into the card edge.
pub fn resize_rgba(
    image: &RgbaImage,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    let (cols, rows) = image.dimensions();
    if (cols, rows) == (target_cols, target_rows) {
        debug!("Image already {}x{}, skipping resample", cols, rows);
        return Ok(image.clone());
    }

    info!(
        "Resizing {}x{} -> {}x{} ({})",
        cols, rows, target_cols, target_rows, filter
    );

    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(cols, rows, image.as_raw().clone(), PixelType::U8x4)
        .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized buffer has unexpected length".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn identity_size_returns_same_pixels() {
        let image = RgbaImage::from_fn(9, 13, |x, y| Rgba([x as u8, y as u8, 3, 255]));
        let out = resize_rgba(&image, 9, 13, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out.as_raw(), image.as_raw());
    }

    #[test]
    fn downscale_hits_requested_size() {
        let image = RgbaImage::from_pixel(64, 90, Rgba([200, 100, 50, 255]));
        let out = resize_rgba(&image, 32, 45, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out.dimensions(), (32, 45));
        // A flat field stays flat under convolution
        let center = out.get_pixel(16, 22);
        assert!((center.0[0] as i32 - 200).abs() <= 1);
        assert!((center.0[1] as i32 - 100).abs() <= 1);
        assert_eq!(center.0[3], 255);
    }

    #[test]
    fn upscale_is_supported() {
        let image = RgbaImage::from_pixel(4, 6, Rgba([1, 2, 3, 255]));
        let out = resize_rgba(&image, 8, 12, ResampleFilter::Nearest).unwrap();
        assert_eq!(out.dimensions(), (8, 12));
        assert!(out.pixels().all(|p| p == &Rgba([1, 2, 3, 255])));
    }
}
