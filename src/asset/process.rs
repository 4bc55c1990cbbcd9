//! Post-processing of aggregated CSS.

use std::fmt;

use crate::core::BuildMode;

use super::minify::{beautify_css, minify_css};

/// Final transformation applied to aggregated CSS before it is returned.
///
/// The default depends on the [`BuildMode`]: pretty-printed in development,
/// minified in production. Any `Fn(&str) -> String` can replace it.
pub struct PostProcessor {
    func: Box<dyn Fn(&str) -> String>,
}

impl PostProcessor {
    /// Wrap a custom function.
    pub fn new(func: impl Fn(&str) -> String + 'static) -> Self {
        Self {
            func: Box::new(func),
        }
    }

    /// Pass CSS through untouched.
    pub fn identity() -> Self {
        Self::new(str::to_string)
    }

    /// Default processor for a build mode.
    ///
    /// CSS that fails to parse is returned unchanged.
    pub fn for_mode(mode: BuildMode) -> Self {
        if mode.minify {
            Self::new(|css| format_or_keep(css, minify_css, "minify"))
        } else {
            Self::new(|css| format_or_keep(css, beautify_css, "beautify"))
        }
    }

    #[inline]
    pub fn apply(&self, css: &str) -> String {
        (self.func)(css)
    }
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self::for_mode(BuildMode::default())
    }
}

impl fmt::Debug for PostProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostProcessor").finish_non_exhaustive()
    }
}

fn format_or_keep(css: &str, format: fn(&str) -> Option<String>, action: &str) -> String {
    if css.is_empty() {
        return String::new();
    }
    format(css).unwrap_or_else(|| {
        crate::debug!("styles"; "failed to {} css, keeping source", action);
        css.to_string()
    })
}
