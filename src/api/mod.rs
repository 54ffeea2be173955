//! High-level, ergonomic library API: transform one card image in memory, process a
//! file to a PNG on disk, or run the whole directory batch. Prefer these entrypoints
//! over the low-level processing modules when integrating CARDCROP.
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::params::{BatchParams, TransformParams};
use crate::core::processing::pipeline::{TransformOutput, transform};
use crate::error::Result;
use crate::io::discovery::{collect_card_images, ensure_output_dir};
use crate::io::naming::output_path_for;
use crate::io::reader::open_image;
use crate::io::writers::png::write_rgba_png;
use crate::types::ErrorPolicy;

/// Transform an already decoded image (no disk I/O)
pub fn transform_image(source: &DynamicImage, params: &TransformParams) -> Result<TransformOutput> {
    transform(source, params)
}

/// Decode `input`, transform it and write the PNG to `output`
pub fn process_file_to_path(
    input: &Path,
    output: &Path,
    params: &TransformParams,
) -> Result<TransformOutput> {
    let source = open_image(input)?;
    let out = transform(&source, params)?;
    drop(source);
    write_rgba_png(output, &out.image)?;
    Ok(out)
}

/// Outcome of one file in a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub input: PathBuf,
    pub output: PathBuf,
    pub seconds: f64,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub error: Option<String>,
}

/// Counts and timings for a directory run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
    pub total_seconds: f64,
    pub files: Vec<FileRecord>,
}

impl BatchReport {
    /// Mean per-file processing time over successful files
    pub fn average_seconds(&self) -> Option<f64> {
        if self.processed == 0 {
            None
        } else {
            Some(self.total_seconds / self.processed as f64)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.processed == 0 && self.failed == 0
    }
}

/// Sorted list of card images in `input_dir`, excluding anything under `output_dir`
pub fn iterate_card_images(
    input_dir: &Path,
    output_dir: &Path,
    recursive: bool,
) -> Result<std::vec::IntoIter<PathBuf>> {
    Ok(collect_card_images(input_dir, output_dir, recursive)?.into_iter())
}

/// Process every card image from `input_dir` into `output_dir` using `params`.
/// With `ErrorPolicy::Continue`, failures are recorded in the report and processing
/// continues; otherwise the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &BatchParams,
) -> Result<BatchReport> {
    ensure_output_dir(output_dir)?;

    let mut report = BatchReport::default();

    for path in iterate_card_images(input_dir, output_dir, params.recursive)? {
        let tic = Instant::now();
        let output_path = output_path_for(&path, output_dir, params.clean_names);
        let display_name = output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Editing \"{}\"", display_name);

        match process_file_to_path(&path, &output_path, &params.transform) {
            Ok(out) => {
                let seconds = tic.elapsed().as_secs_f64();
                info!("Time elapsed: {:.4}s", seconds);
                report.processed += 1;
                report.total_seconds += seconds;
                report.files.push(FileRecord {
                    input: path,
                    output: output_path,
                    seconds,
                    width: Some(out.width()),
                    height: Some(out.height()),
                    error: None,
                });
            }
            Err(e) => {
                report.failed += 1;
                if params.error_policy == ErrorPolicy::Abort {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", path, e);
                report.files.push(FileRecord {
                    input: path,
                    output: output_path,
                    seconds: tic.elapsed().as_secs_f64(),
                    width: None,
                    height: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_has_no_average() {
        let report = BatchReport::default();
        assert!(report.is_empty());
        assert_eq!(report.average_seconds(), None);
    }

    #[test]
    fn average_uses_processed_count() {
        let report = BatchReport {
            processed: 4,
            failed: 1,
            total_seconds: 2.0,
            files: Vec::new(),
        };
        assert_eq!(report.average_seconds(), Some(0.5));
        assert!(!report.is_empty());
    }
}
