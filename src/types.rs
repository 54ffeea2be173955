use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Trimmed card height in inches (63 x 88 mm poker size).
pub const CARD_HEIGHT_IN: f64 = 3.46457;

/// Bleed added to the print file, in inches.
pub const BLEED_IN: f64 = 0.125;

/// Number of bleed units per inch (1/8 inch).
pub const EIGHTHS_PER_INCH: f64 = 8.0;

/// Resampling filter for the final rescale.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Mitchell,
    Bilinear,
    Nearest,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
            ResampleFilter::CatmullRom => write!(f, "CatmullRom"),
            ResampleFilter::Mitchell => write!(f, "Mitchell"),
            ResampleFilter::Bilinear => write!(f, "Bilinear"),
            ResampleFilter::Nearest => write!(f, "Nearest"),
        }
    }
}

/// What the batch driver does when a single file fails.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Stop the run at the first failing file.
    #[default]
    Abort,
    /// Record the failure and move on to the next file.
    Continue,
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPolicy::Abort => write!(f, "Abort"),
            ErrorPolicy::Continue => write!(f, "Continue"),
        }
    }
}
