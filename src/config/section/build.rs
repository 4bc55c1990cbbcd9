//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! minify = true   # Production output: minified CSS and inline scripts
//! ```

use crate::core::BuildMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Minify aggregated output (production mode).
    pub minify: bool,
}

impl BuildConfig {
    pub const fn mode(&self) -> BuildMode {
        if self.minify {
            BuildMode::PRODUCTION
        } else {
            BuildMode::DEVELOPMENT
        }
    }
}
