use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode an image file, sniffing the format from its contents when the extension lies.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            source: ImageError::IoError(e),
        })?
        .with_guessed_format()
        .map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            source: ImageError::IoError(e),
        })?;

    let image = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(reason) => Error::UnsupportedFormat {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        },
        other => Error::Decode {
            path: path.to_path_buf(),
            source: other,
        },
    })?;

    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}
