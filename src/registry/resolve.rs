//! Aggregation: resolve, read and concatenate registered content.
//!
//! Emission order for a styles query:
//!
//! 1. stylesheet files of the selected categories (sort order first,
//!    then natural order), each file in registration order
//! 2. inline entries of the same categories: shared entries, then the
//!    entries of the requested identifier
//!
//! Parts are joined with a single newline. Files are read on every call.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::asset::StylesheetTree;
use crate::core::{Scope, StyleError};

use super::order::CategoryOrder;
use super::tree::{Keyed, ScopeTree};

/// Caller-side filter for a query.
///
/// Without a category every category contributes; without an identifier
/// only shared inline entries contribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Query<'a> {
    pub identifier: Option<&'a str>,
    pub category: Option<&'a str>,
}

impl<'a> Query<'a> {
    /// Everything registered for a scope.
    pub const fn all() -> Self {
        Self {
            identifier: None,
            category: None,
        }
    }

    /// Everything, plus inline content registered for `identifier`.
    pub const fn for_identifier(identifier: &'a str) -> Self {
        Self {
            identifier: Some(identifier),
            category: None,
        }
    }

    /// Restrict the query to one category.
    pub const fn in_category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }
}

/// Stylesheet paths selected by a query, in emission order.
pub(super) fn select_stylesheets<'t>(
    tree: &'t StylesheetTree,
    scope: Scope,
    category: Option<&str>,
    order: &CategoryOrder,
) -> Vec<&'t PathBuf> {
    tree.select(scope, category, order)
        .into_iter()
        .flat_map(|(_, paths)| paths)
        .collect()
}

/// Inline entries selected by a query, in emission order.
pub(super) fn select_inline<'t, T>(
    tree: &'t ScopeTree<Keyed<T>>,
    scope: Scope,
    query: &Query<'_>,
    order: &CategoryOrder,
) -> Vec<&'t T> {
    tree.select(scope, query.category, order)
        .into_iter()
        .flat_map(|(_, keyed)| keyed.select(query.identifier))
        .collect()
}

/// Read a stylesheet in full.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub(super) fn read_stylesheet(path: &Path) -> Result<String, StyleError> {
    let bytes = fs::read(path).map_err(|err| StyleError::from_file(path, err))?;
    Ok(match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => text,
    })
}

/// Read every stylesheet selected for the query and append inline content.
///
/// Fails on the first stylesheet that cannot be read.
pub(super) fn gather_styles(
    stylesheets: &StylesheetTree,
    styles: &ScopeTree<Keyed<String>>,
    scope: Scope,
    query: &Query<'_>,
    order: &CategoryOrder,
) -> Result<Vec<String>, StyleError> {
    let mut parts = Vec::new();

    for path in select_stylesheets(stylesheets, scope, query.category, order) {
        parts.push(read_stylesheet(path)?);
    }
    parts.extend(
        select_inline(styles, scope, query, order)
            .into_iter()
            .cloned(),
    );

    Ok(parts)
}
