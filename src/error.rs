//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Wraps decode/encode failures from the `image` crate with the offending path, and
//! provides semantic variants for argument validation and geometry failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot create output directory {path:?}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported image format in {path:?}: {reason}")]
    UnsupportedFormat { path: PathBuf, reason: String },

    #[error("Cannot write {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Image {width}x{height} is too small to remove a {margin:.3}px bleed")]
    DegenerateCrop { width: u32, height: u32, margin: f64 },

    #[error("Mask is {mask_width}x{mask_height} but image is {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
