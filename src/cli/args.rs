use clap::Parser;
use std::path::PathBuf;

use cardcrop::{DEFAULT_SCALE, ResampleFilter};

#[derive(Parser, Debug)]
#[command(
    name = "cardcrop",
    version,
    about = "Crops the 1/8 inch bleed edge (including the rounded corners) around card scans and converts them to PNG"
)]
pub struct CliArgs {
    /// Directory containing the card images (.jpg / .png)
    pub input_path: String,

    /// Output directory. Defaults to an `output` directory next to the input directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include images in subdirectories of the input directory
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Scale of the final image relative to the cropped height (1 = same resolution)
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Remove "(...)" and "[...]" annotations from output file names
    #[arg(short, long = "clean-names", alias = "clean_names", default_value_t = false)]
    pub clean_names: bool,

    /// Keep going when an image fails and report the failures at the end
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Resampling filter for the final rescale
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
