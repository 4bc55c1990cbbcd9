//! Extension-based ingestion filter.

use std::path::Path;

/// Default accepted stylesheet extension.
pub const DEFAULT_EXTENSION: &str = ".css";

/// Set of file extensions eligible for directory ingestion.
///
/// Extensions are stored with their leading dot (`.css`) and matched
/// case-sensitively against the last extension of a file name, so
/// `theme.min.css` matches `.css`, and `Makefile` never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

impl ExtensionFilter {
    /// Accept exactly the given extensions (`"txt"` and `".txt"` are equivalent).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self {
            extensions: Vec::new(),
        };
        filter.extend(extensions);
        filter
    }

    /// Accept additional extensions on top of the current set.
    pub fn extend<I, S>(&mut self, extensions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref());
            if !self.extensions.contains(&ext) {
                self.extensions.push(ext);
            }
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Check whether a file is eligible for ingestion.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|accepted| accepted.strip_prefix('.') == Some(ext))
    }
}

fn normalize_extension(ext: &str) -> String {
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
