use tracing::warn;

/// Features that are switched off on particular targets, evaluated once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformConstraints {
    /// Recursive discovery has historically mis-handled output-directory exclusion with
    /// Windows path forms, so it stays off there.
    pub recursive_discovery: bool,
}

impl PlatformConstraints {
    pub fn current() -> Self {
        Self {
            recursive_discovery: !cfg!(windows),
        }
    }

    /// Effective `--recursive` value, warning when the request cannot be honoured.
    pub fn resolve_recursive(&self, requested: bool) -> bool {
        if requested && !self.recursive_discovery {
            warn!("--recursive is not supported on this platform; only the top-level directory will be scanned");
            return false;
        }
        requested
    }
}
