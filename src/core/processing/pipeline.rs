use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::core::params::TransformParams;
use crate::core::processing::compose::{apply_mask, binarize_alpha};
use crate::core::processing::crop::crop_bleed;
use crate::core::processing::geometry::{bleed_margin, target_dimensions};
use crate::core::processing::mask::corner_mask;
use crate::core::processing::resize::resize_rgba;
use crate::error::{Error, Result};

/// Result of transforming one card image, with the geometry that produced it
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub image: RgbaImage,
    /// Bleed margin and corner radius in source pixels
    pub margin: f64,
    pub cropped_width: u32,
    pub cropped_height: u32,
}

impl TransformOutput {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Crop the bleed, cut rounded corners into the alpha channel and rescale.
///
/// The source is normalized to 8-bit RGBA first; any existing alpha is replaced by the
/// corner mask. Deterministic for a given input and params.
pub fn transform(source: &DynamicImage, params: &TransformParams) -> Result<TransformOutput> {
    params.validate()?;
    if source.width() == 0 || source.height() == 0 {
        return Err(Error::InvalidArgument {
            arg: "source",
            value: format!("{}x{}", source.width(), source.height()),
        });
    }

    let rgba = source.to_rgba8();
    let margin = bleed_margin(rgba.height());

    let mut cropped = crop_bleed(&rgba, margin)?;
    drop(rgba);
    let (cropped_width, cropped_height) = cropped.dimensions();

    let mask = corner_mask(cropped_width, cropped_height, margin);
    apply_mask(&mut cropped, &mask)?;

    let (target_width, target_height) =
        target_dimensions(cropped_width, cropped_height, params.scale);
    debug!(
        "margin={:.3}px cropped={}x{} target={}x{}",
        margin, cropped_width, cropped_height, target_width, target_height
    );

    let image = if (target_width, target_height) == (cropped_width, cropped_height) {
        cropped
    } else {
        let mut resized = resize_rgba(&cropped, target_width, target_height, params.filter)?;
        binarize_alpha(&mut resized);
        resized
    };

    Ok(TransformOutput {
        image,
        margin,
        cropped_width,
        cropped_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn unit_scale_passes_rgb_through() {
        let source = gradient(300, 420);
        let params = TransformParams::new(1.0).unwrap();
        let out = transform(&source, &params).unwrap();

        let margin = out.margin.round_ties_even() as u32;
        assert_eq!(out.height(), out.cropped_height);
        assert_eq!(out.width(), out.cropped_width);

        let (cx, cy) = (out.width() / 2, out.height() / 2);
        let expected = source.to_rgb8().get_pixel(cx + margin, cy + margin).0;
        let actual = out.image.get_pixel(cx, cy).0;
        assert_eq!(&actual[..3], &expected[..]);
        assert_eq!(actual[3], 255);
    }

    #[test]
    fn corners_transparent_after_downscale() {
        let source = gradient(750, 1050);
        let out = transform(&source, &TransformParams::default()).unwrap();
        let (w, h) = (out.width(), out.height());
        assert_eq!(h, out.cropped_height / 2);
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(out.image.get_pixel(x, y).0[3], 0, "({x},{y})");
        }
        assert_eq!(out.image.get_pixel(w / 2, h / 2).0[3], 255);
        assert!(out.image.pixels().all(|p| p.0[3] == 0 || p.0[3] == 255));
    }

    #[test]
    fn source_alpha_is_replaced() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(200, 280, Rgba([9, 8, 7, 10])));
        let out = transform(&source, &TransformParams::new(1.0).unwrap()).unwrap();
        let (w, h) = (out.width(), out.height());
        assert_eq!(out.image.get_pixel(w / 2, h / 2), &Rgba([9, 8, 7, 255]));
        assert_eq!(out.image.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn grayscale_source_is_normalized() {
        let source = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(100, 140, image::Luma([90])));
        let out = transform(&source, &TransformParams::new(1.0).unwrap()).unwrap();
        let (w, h) = (out.width(), out.height());
        assert_eq!(out.image.get_pixel(w / 2, h / 2), &Rgba([90, 90, 90, 255]));
    }

    #[test]
    fn deterministic() {
        let source = gradient(333, 466);
        let params = TransformParams::new(0.37).unwrap();
        let a = transform(&source, &params).unwrap();
        let b = transform(&source, &params).unwrap();
        assert_eq!(a.image.as_raw(), b.image.as_raw());
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let params = TransformParams {
            scale: 0.0,
            ..TransformParams::default()
        };
        assert!(matches!(
            transform(&gradient(10, 10), &params),
            Err(Error::InvalidArgument { arg: "scale", .. })
        ));
    }
}
