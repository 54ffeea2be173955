use std::ffi::OsString;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Greedy span from the first opening bracket to the last closing one.
static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[(\[].*[)\]]").expect("annotation pattern is valid"));

/// Strip "(...)" and "[...]" annotations from a file stem and trim whitespace.
pub fn clean_file_stem(stem: &str) -> String {
    ANNOTATION.replace_all(stem, "").trim().to_string()
}

/// `<output_dir>/<stem>.png` for an input file.
/// Without cleaning the stem is kept byte-for-byte, so non UTF-8 names are not mangled.
pub fn output_path_for(input: &Path, output_dir: &Path, clean_names: bool) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let mut name = if clean_names {
        OsString::from(clean_file_stem(&stem.to_string_lossy()))
    } else {
        stem.to_os_string()
    };
    name.push(".png");
    output_dir.join(name)
}
