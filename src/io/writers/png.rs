use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbaImage};

use crate::error::{Error, Result};

pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<()> {
    let encode_err = |source: ImageError| Error::Encode {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(|e| encode_err(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(encode_err)?;
    std::io::Write::flush(&mut writer).map_err(|e| encode_err(ImageError::IoError(e)))?;
    Ok(())
}
