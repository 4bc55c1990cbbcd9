//! `[styles]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [styles]
//! extensions = [".css", ".pcss"]           # Accepted stylesheet extensions
//! order = ["global", "composition", "blocks"]  # Emitted first, in this order
//! async_marker = "-async"                  # File name marker for async stylesheets
//! absolute_paths = false                   # Record scanned paths as absolute
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::asset::{DEFAULT_ASYNC_MARKER, DEFAULT_EXTENSION, ExtensionFilter};
use crate::registry::CategoryOrder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesSectionConfig {
    pub extensions: Vec<String>,
    pub order: Vec<String>,
    pub async_marker: String,
    pub absolute_paths: bool,
}

impl Default for StylesSectionConfig {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.into()],
            order: Vec::new(),
            async_marker: DEFAULT_ASYNC_MARKER.into(),
            absolute_paths: false,
        }
    }
}

impl StylesSectionConfig {
    pub const EXTENSIONS: FieldPath = FieldPath::new("styles.extensions");
    pub const ORDER: FieldPath = FieldPath::new("styles.order");
    pub const ASYNC_MARKER: FieldPath = FieldPath::new("styles.async_marker");

    pub fn filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(self.extensions.iter().map(String::as_str))
    }

    pub fn category_order(&self) -> CategoryOrder {
        CategoryOrder::new(self.order.iter().cloned())
    }

    /// Validate styles configuration.
    ///
    /// # Checks
    /// - `async_marker` must not be empty (it would match every file)
    /// - no entry of `extensions` may be empty
    /// - `order` must not name a category twice
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.async_marker.is_empty() {
            diag.error_with_hint(
                Self::ASYNC_MARKER,
                "must not be empty",
                format!("the default is \"{DEFAULT_ASYNC_MARKER}\""),
            );
        }

        if self
            .extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').is_empty())
        {
            diag.error(Self::EXTENSIONS, "contains an empty extension");
        }

        let mut seen = IndexSet::new();
        for name in &self.order {
            if !seen.insert(name.as_str()) {
                diag.error_with_hint(
                    Self::ORDER,
                    format!("category `{name}` is listed more than once"),
                    "only the first position is used, remove the duplicate",
                );
            }
        }
    }
}
