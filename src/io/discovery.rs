use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Extensions accepted as card images (ASCII case-insensitive).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "png"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Remove stray quote characters left behind by drag-and-drop onto a terminal.
pub fn strip_path_quotes(raw: &str) -> PathBuf {
    PathBuf::from(raw.replace(['\'', '"'], ""))
}

/// Sibling `output` directory of `input_dir`, or `<input_dir>/output` when it has no parent.
pub fn default_output_dir(input_dir: &Path) -> PathBuf {
    let resolved = fs::canonicalize(input_dir).unwrap_or_else(|_| input_dir.to_path_buf());
    match resolved.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join("output"),
        _ => resolved.join("output"),
    }
}

/// Create the output directory if needed. An existing directory is not an error.
pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|source| Error::Directory {
        path: output_dir.to_path_buf(),
        source,
    })
}

/// List card images under `input_dir`, skipping anything inside `output_dir`.
/// The list is sorted and deduplicated so processing order is stable across runs.
pub fn collect_card_images(
    input_dir: &Path,
    output_dir: &Path,
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    let excluded = fs::canonicalize(output_dir).ok();
    let mut files = Vec::new();
    collect_from_dir(input_dir, excluded.as_deref(), recursive, &mut files)?;
    files.sort();
    files.dedup();
    debug!("Found {} candidate images in {:?}", files.len(), input_dir);
    Ok(files)
}

fn collect_from_dir(
    dir: &Path,
    excluded: Option<&Path>,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let resolved = match fs::canonicalize(&path) {
            Ok(p) => p,
            Err(e) => {
                warn!("Skipping unreadable entry {:?}: {}", path, e);
                continue;
            }
        };

        if excluded.is_some_and(|out| resolved.starts_with(out)) {
            continue;
        }

        // Symlinked directories are not descended into; a link back to an ancestor
        // would otherwise revisit the same tree.
        if entry.file_type()?.is_dir() {
            if recursive {
                collect_from_dir(&path, excluded, recursive, files)?;
            }
        } else if resolved.is_file() && is_supported_image(&path) {
            files.push(resolved);
        }
    }
    Ok(())
}
