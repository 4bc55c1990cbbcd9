//! Stylesheet directory scanning (pure, no side effects).
//!
//! ```text
//! css/
//! ├── global/              -> category "global"
//! │   ├── index.css        -> critical
//! │   └── fonts-async.css  -> async
//! ├── Blocks/              -> category "blocks" (directory names are lowercased)
//! │   ├── card.css         -> critical
//! │   └── extra/
//! │       └── hero.css     -> critical, still "blocks"
//! └── composition.css      -> category "composition" (file stem, case kept)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Scope, StyleError};
use crate::registry::ScopeTree;
use crate::utils::path::normalize_path;

use super::ExtensionFilter;

/// Default marker that moves a stylesheet into the async scope.
pub const DEFAULT_ASYNC_MARKER: &str = "-async";

/// Stylesheet paths grouped by scope and category.
pub type StylesheetTree = ScopeTree<Vec<PathBuf>>;

/// How a directory scan classifies and records files.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    /// Extensions eligible for ingestion.
    pub filter: &'a ExtensionFilter,
    /// File name substring marking async stylesheets.
    pub async_marker: &'a str,
    /// Record absolute, normalized paths instead of `dir.join(name)`.
    pub absolute_paths: bool,
}

/// Scan a stylesheet directory.
///
/// Every category discovered gets a list in both scopes, even when all of
/// its files land in one of them. Order within a category follows
/// filesystem enumeration order.
///
/// # Errors
///
/// Fails when `dir` (or any subdirectory) cannot be listed.
pub fn scan_stylesheets(dir: &Path, options: &ScanOptions<'_>) -> Result<StylesheetTree, StyleError> {
    let tree = scan_recursive(dir, options, None)?;

    crate::debug_do! {
        for scope in Scope::ALL {
            crate::debug!("scan"; "{}: {} {} stylesheet(s) in {} categories",
                dir.display(), tree.count(scope), scope, tree.categories(scope).len());
        }
    }

    Ok(tree)
}

fn scan_recursive(
    dir: &Path,
    options: &ScanOptions<'_>,
    inherited: Option<&str>,
) -> Result<StylesheetTree, StyleError> {
    let entries = fs::read_dir(dir).map_err(|err| StyleError::from_dir(dir, err))?;
    let mut tree = StylesheetTree::new();

    for entry in entries {
        let entry = entry.map_err(|err| StyleError::Io(dir.to_path_buf(), err))?;
        let path = entry.path();
        // Symlinks are not followed into, so link cycles cannot recurse
        let is_dir = entry
            .file_type()
            .map_err(|err| StyleError::Io(path.clone(), err))?
            .is_dir();

        // Ineligible files contribute to neither scope
        if !is_dir && !options.filter.accepts(&path) {
            continue;
        }

        let category = match inherited {
            Some(category) => category.to_string(),
            None => infer_category(&path, is_dir),
        };
        tree.touch(&category);

        if is_dir {
            let nested = scan_recursive(&path, options, Some(&category))?;
            tree.merge(nested);
        } else {
            let scope = classify(&entry.file_name().to_string_lossy(), options.async_marker);
            let recorded = if options.absolute_paths {
                normalize_path(&path)
            } else {
                path
            };
            tree.push(scope, &category, recorded);
        }
    }

    Ok(tree)
}

/// Category of a top-level entry: lowercased directory name, or file stem as-is.
fn infer_category(path: &Path, is_dir: bool) -> String {
    if is_dir {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    } else {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Scope of a stylesheet, judged by its file name.
pub fn classify(file_name: &str, async_marker: &str) -> Scope {
    if file_name.contains(async_marker) {
        Scope::Async
    } else {
        Scope::Critical
    }
}
