use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{ErrorPolicy, ResampleFilter};

/// Default output scale relative to the cropped height.
pub const DEFAULT_SCALE: f64 = 0.5;

/// Per-image transform parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformParams {
    /// Multiplier applied to the cropped height; 1.0 keeps the cropped resolution
    pub scale: f64,
    pub filter: ResampleFilter,
}

impl TransformParams {
    pub fn new(scale: f64) -> Result<Self> {
        let params = Self {
            scale,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidArgument {
                arg: "scale",
                value: self.scale.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

/// Batch driver parameters, built once from the command line and passed by reference
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchParams {
    pub transform: TransformParams,
    /// Descend into subdirectories of the input directory
    pub recursive: bool,
    /// Strip "(...)" / "[...]" annotations from output file names
    pub clean_names: bool,
    pub error_policy: ErrorPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_scale() {
        assert!(TransformParams::new(0.0).is_err());
        assert!(TransformParams::new(-0.5).is_err());
        assert!(TransformParams::new(f64::NAN).is_err());
        assert!(TransformParams::new(f64::INFINITY).is_err());
    }

    #[test]
    fn accepts_upscale() {
        let params = TransformParams::new(2.0).unwrap();
        assert_eq!(params.scale, 2.0);
        assert_eq!(params.filter, ResampleFilter::Lanczos3);
    }

    #[test]
    fn batch_defaults_abort_on_error() {
        let params = BatchParams::default();
        assert_eq!(params.error_policy, ErrorPolicy::Abort);
        assert!(!params.recursive);
        assert!(!params.clean_names);
        assert_eq!(params.transform.scale, DEFAULT_SCALE);
    }
}
