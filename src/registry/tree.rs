//! Layered scope → category → leaf containers.
//!
//! ```text
//! ScopeTree<L>
//! ├── critical
//! │   ├── "global"      → L
//! │   └── "blocks"      → L
//! └── async
//!     └── "blocks"      → L
//! ```
//!
//! Both scopes always exist. Categories keep insertion order, which is the
//! natural emission order when no sort order applies. Writes create missing
//! levels lazily; reads of missing levels yield empty views.

use indexmap::IndexMap;

use crate::core::Scope;

use super::order::CategoryOrder;

/// Scope → category → `L` container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeTree<L> {
    scopes: [IndexMap<String, L>; 2],
}

impl<L> Default for ScopeTree<L> {
    fn default() -> Self {
        Self {
            scopes: [IndexMap::new(), IndexMap::new()],
        }
    }
}

impl<L> ScopeTree<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories of a scope, in insertion order.
    #[inline]
    pub fn categories(&self, scope: Scope) -> &IndexMap<String, L> {
        &self.scopes[scope.index()]
    }

    /// Look up a category without creating it.
    #[inline]
    pub fn get(&self, scope: Scope, category: &str) -> Option<&L> {
        self.scopes[scope.index()].get(category)
    }

    /// Check whether a category key exists (it may still be empty).
    pub fn contains(&self, scope: Scope, category: &str) -> bool {
        self.scopes[scope.index()].contains_key(category)
    }

    /// Categories of a scope arranged by `order`.
    pub fn ordered<'a>(&'a self, scope: Scope, order: &CategoryOrder) -> Vec<(&'a str, &'a L)> {
        order.arrange(self.categories(scope))
    }

    /// Either a single category (when named) or every category in `order`.
    ///
    /// An unknown category selects nothing.
    pub fn select<'a>(
        &'a self,
        scope: Scope,
        category: Option<&str>,
        order: &CategoryOrder,
    ) -> Vec<(&'a str, &'a L)> {
        match category {
            Some(name) => self
                .categories(scope)
                .get_key_value(name)
                .map(|(k, v)| (k.as_str(), v))
                .into_iter()
                .collect(),
            None => self.ordered(scope, order),
        }
    }
}

impl<L: Default> ScopeTree<L> {
    /// Get a category container, creating it if missing.
    pub fn entry(&mut self, scope: Scope, category: &str) -> &mut L {
        self.scopes[scope.index()]
            .entry(category.to_string())
            .or_default()
    }
}

// ============================================================================
// List leaves
// ============================================================================

impl<T> ScopeTree<Vec<T>> {
    /// Append an item to a category list.
    pub fn push(&mut self, scope: Scope, category: &str, item: T) {
        self.entry(scope, category).push(item);
    }

    /// A category list, or an empty slice when the category is unknown.
    pub fn list(&self, scope: Scope, category: &str) -> &[T] {
        self.get(scope, category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Make sure a category exists in both scopes.
    pub fn touch(&mut self, category: &str) {
        for scope in Scope::ALL {
            self.entry(scope, category);
        }
    }

    /// Concatenate another tree into this one.
    ///
    /// Lists at matching scope/category keys are appended to, never replaced;
    /// categories unknown to `self` are added after the existing ones.
    pub fn merge(&mut self, other: Self) {
        for (scope, categories) in Scope::ALL.into_iter().zip(other.scopes) {
            for (category, items) in categories {
                self.entry(scope, &category).extend(items);
            }
        }
    }

    /// Whether any list in the scope has at least one item.
    pub fn has_items(&self, scope: Scope) -> bool {
        self.categories(scope).values().any(|items| !items.is_empty())
    }

    /// Total number of items in the scope.
    pub fn count(&self, scope: Scope) -> usize {
        self.categories(scope).values().map(Vec::len).sum()
    }
}

// ============================================================================
// Identifier-keyed leaves
// ============================================================================

/// Leaf for inline content: entries shared by every page plus entries keyed
/// by page identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyed<T> {
    shared: Vec<T>,
    by_identifier: IndexMap<String, Vec<T>>,
}

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self {
            shared: Vec::new(),
            by_identifier: IndexMap::new(),
        }
    }
}

impl<T> Keyed<T> {
    /// Append to the identifier's list, or to the shared list when `None`.
    pub fn push(&mut self, identifier: Option<&str>, item: T) {
        match identifier {
            Some(id) => {
                if let Some(items) = self.by_identifier.get_mut(id) {
                    items.push(item);
                } else {
                    self.by_identifier.insert(id.to_string(), vec![item]);
                }
            }
            None => self.shared.push(item),
        }
    }

    /// Entries registered for `identifier` (empty when unknown).
    pub fn for_identifier(&self, identifier: &str) -> &[T] {
        self.by_identifier
            .get(identifier)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Shared entries followed by the identifier's own entries.
    pub fn select(&self, identifier: Option<&str>) -> impl Iterator<Item = &T> {
        let own = identifier
            .and_then(|id| self.by_identifier.get(id))
            .into_iter()
            .flatten();
        self.shared.iter().chain(own)
    }
}

impl<T> ScopeTree<Keyed<T>> {
    /// Whether any category holds entries registered for `identifier` itself.
    ///
    /// Shared entries do not count.
    pub fn has_entries_for(&self, scope: Scope, identifier: &str) -> bool {
        self.categories(scope)
            .values()
            .any(|keyed| !keyed.for_identifier(identifier).is_empty())
    }
}
