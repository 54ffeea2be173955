#![doc = r#"
CARDCROP — trims print-ready trading-card scans down to the physical card.

Print files carry a 1/8 inch bleed around the card. This crate removes that border,
cuts the rounded card corners into the alpha channel (corner radius = 1/8 inch),
rescales the result and writes a transparent PNG. The pixel density is inferred
from the image height, so scans at any DPI work.

It powers the `cardcrop` CLI and can be embedded in your own Rust applications.

Quick start: one file
---------------------
```rust,no_run
use std::path::Path;
use cardcrop::{process_file_to_path, TransformParams};

fn main() -> cardcrop::Result<()> {
    let params = TransformParams::new(0.5)?;
    let out = process_file_to_path(
        Path::new("/scans/Lightning Bolt.jpg"),
        Path::new("/out/Lightning Bolt.png"),
        &params,
    )?;
    println!("{}x{}", out.width(), out.height());
    Ok(())
}
```

In-memory transform
-------------------
```rust
use cardcrop::{transform_image, TransformParams};
use image::{DynamicImage, RgbImage, Rgb};

fn main() -> cardcrop::Result<()> {
    let scan = DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 420, Rgb([20, 40, 60])));
    let out = transform_image(&scan, &TransformParams::new(1.0)?)?;

    assert_eq!(out.height(), out.cropped_height);
    assert_eq!(out.image.get_pixel(0, 0).0[3], 0);
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use cardcrop::{process_directory_to_path, BatchParams, ErrorPolicy, TransformParams};

fn main() -> cardcrop::Result<()> {
    let params = BatchParams {
        transform: TransformParams::new(0.5)?,
        recursive: true,
        clean_names: true,
        error_policy: ErrorPolicy::Continue,
    };

    let report = process_directory_to_path(Path::new("/scans"), Path::new("/out"), &params)?;
    println!("processed={} failed={}", report.processed, report.failed);
    Ok(())
}
```

Error handling
--------------
All public functions return `cardcrop::Result<T>`; match on `cardcrop::Error` to handle
specific cases.

```rust,no_run
use std::path::Path;
use cardcrop::{process_file_to_path, Error, TransformParams};

fn main() {
    let params = TransformParams::default();
    match process_file_to_path(Path::new("/bad.png"), Path::new("/out.png"), &params) {
        Ok(_) => {}
        Err(Error::Decode { path, .. }) => eprintln!("not an image: {path:?}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — bleed geometry, corner mask, composition and resampling primitives.
- [`io`] — decoding, file discovery, output naming and writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{BatchParams, DEFAULT_SCALE, TransformParams};
pub use crate::core::processing::pipeline::TransformOutput;
pub use error::{Error, Result};
pub use types::{ErrorPolicy, ResampleFilter};

// Geometry primitives
pub use crate::core::processing::geometry::{CropRect, bleed_margin, crop_bounds, target_dimensions};
pub use crate::core::processing::mask::corner_mask;

// High-level API re-exports
pub use api::{
    BatchReport, FileRecord, iterate_card_images, process_directory_to_path,
    process_file_to_path, transform_image,
};
