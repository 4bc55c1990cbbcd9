//! Registry configuration management for `styles.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── dirs       # [dirs]
//! │   └── styles     # [styles]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # StylesConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `[dirs]`   | Stylesheet input directory, href prefix, components  |
//! | `[styles]` | Extensions, category order, async marker             |
//! | `[build]`  | Build mode (minification)                            |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildConfig, DirsConfig, StylesSectionConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::core::BuildMode;
use crate::log;
use crate::registry::RegistryOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "styles.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing styles.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StylesConfig {
    /// Path to the config file, `None` when running on defaults (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Directory settings
    #[serde(default)]
    pub dirs: DirsConfig,

    /// Stylesheet ingestion and ordering
    #[serde(default)]
    pub styles: StylesSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl StylesConfig {
    /// Load configuration, searching upward from cwd.
    ///
    /// The root is the config file's parent directory. Without a config
    /// file, defaults apply and the root is cwd.
    pub fn load(config: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(config, &cwd)
    }

    /// Like [`StylesConfig::load`], searching upward from `start`.
    pub fn load_from(config: &Path, start: &Path) -> Result<Self> {
        let (mut loaded, root) = match find_config_file(config, start) {
            Some(path) => {
                let mut loaded = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                loaded.config_path = Some(crate::utils::path::normalize_path(&path));
                (loaded, root)
            }
            None => {
                crate::debug!("config"; "no {} found, using defaults", config.display());
                (Self::default(), start.to_path_buf())
            }
        };

        loaded.finalize(&root);
        Ok(loaded)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warn"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve paths against the root.
    fn finalize(&mut self, root: &Path) {
        let root = crate::utils::path::normalize_path(root);
        self.dirs.normalize(&root);
        self.root = root;
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Stylesheet directory, absolute once loaded.
    pub fn input_dir(&self) -> &Path {
        &self.dirs.input
    }

    pub fn mode(&self) -> BuildMode {
        self.build.mode()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once. With `scan`,
    /// the input directory must also exist.
    pub fn validate(&self, scan: bool) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.dirs.validate(&mut diag);
        self.styles.validate(&mut diag);
        if scan {
            self.dirs.validate_input(&mut diag);
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

impl From<&StylesConfig> for RegistryOptions {
    fn from(config: &StylesConfig) -> Self {
        Self {
            filter: config.styles.filter(),
            order: config.styles.category_order(),
            async_marker: config.styles.async_marker.clone(),
            absolute_paths: config.styles.absolute_paths,
            mode: config.mode(),
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> StylesConfig {
    let (parsed, ignored) = StylesConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
