use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input path is not a directory: {path:?}")]
    InputNotDirectory { path: PathBuf },

    #[error(transparent)]
    Library(#[from] cardcrop::Error),
}
