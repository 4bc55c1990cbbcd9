//! Path helpers.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Build a URL-style href for `path` under the `output` prefix.
///
/// `path` is made relative to `base` when it lives inside it. Separators are
/// always forward slashes, and `.` components are dropped.
///
/// # Example
/// ```ignore
/// href_for(Path::new("_includes/css/blocks/card.css"), Path::new("_includes/css"), "/css")
///     // -> "/css/blocks/card.css"
/// ```
pub fn href_for(path: &Path, base: &Path, output: &str) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let segments: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    let prefix = output.trim_end_matches('/');
    format!("{}/{}", prefix, segments.join("/"))
}
