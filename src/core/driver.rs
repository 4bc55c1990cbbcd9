//! Build mode configuration for production/development builds.

/// Build mode configuration.
///
/// Passed explicitly into the registry; nothing reads the process
/// environment to decide how output is post-processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMode {
    /// Whether aggregated CSS and inline scripts are minified.
    /// Development builds pretty-print CSS instead.
    pub minify: bool,
}

impl BuildMode {
    /// Production mode: compressed output.
    pub const PRODUCTION: Self = Self { minify: true };

    /// Development mode: readable output.
    pub const DEVELOPMENT: Self = Self { minify: false };

    /// Check if this is development mode.
    #[inline]
    pub const fn is_dev(&self) -> bool {
        !self.minify
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::DEVELOPMENT
    }
}
