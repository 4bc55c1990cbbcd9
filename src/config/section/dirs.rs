//! `[dirs]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [dirs]
//! input = "_includes/css"     # Stylesheet directory (relative to config root)
//! output = "/css"             # Public prefix for stylesheet hrefs
//! components = "components"   # Component directory, used by host templates
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirsConfig {
    /// Stylesheet directory scanned into the registry.
    pub input: PathBuf,
    /// Href prefix used by the link manifest.
    pub output: String,
    /// Component directory (not read here, passed through to templates).
    pub components: PathBuf,
}

impl Default for DirsConfig {
    fn default() -> Self {
        Self {
            input: "css".into(),
            output: "/css".into(),
            components: "components".into(),
        }
    }
}

impl DirsConfig {
    pub const INPUT: FieldPath = FieldPath::new("dirs.input");
    pub const OUTPUT: FieldPath = FieldPath::new("dirs.output");

    /// Expand `~` and resolve directories against the config root.
    pub fn normalize(&mut self, root: &Path) {
        self.input = Self::resolve(&self.input, root);
        self.components = Self::resolve(&self.components, root);
    }

    fn resolve(path: &Path, root: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);
        let full_path = if path.is_relative() {
            root.join(&path)
        } else {
            path
        };
        crate::utils::path::normalize_path(&full_path)
    }

    /// Check the input directory exists (only required before scanning).
    pub fn validate_input(&self, diag: &mut ConfigDiagnostics) {
        if !self.input.is_dir() {
            diag.error_with_hint(
                Self::INPUT,
                format!("stylesheet directory `{}` not found", self.input.display()),
                "create it, or point `dirs.input` at an existing directory",
            );
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.is_empty() {
            diag.error(Self::OUTPUT, "must not be empty, use \"/\" for the site root");
        } else if !self.output.starts_with('/') {
            diag.warn(Self::OUTPUT, "does not start with `/`, hrefs will be relative");
        }
    }
}
