//! User-defined category sort order.

use indexmap::{IndexMap, IndexSet};

/// Ordered list of category names emitted before all others.
///
/// Categories named here come first, in this order. The remaining ones
/// follow in their natural (insertion) order. Names that were never
/// populated contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryOrder {
    names: IndexSet<String>,
}

impl CategoryOrder {
    /// Build from configured names. Repeated names keep their first position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Arrange map entries: configured names first, then the rest.
    pub fn arrange<'a, L>(&self, map: &'a IndexMap<String, L>) -> Vec<(&'a str, &'a L)> {
        let mut arranged = Vec::with_capacity(map.len());

        arranged.extend(
            self.names
                .iter()
                .filter_map(|name| map.get_key_value(name.as_str()))
                .map(|(k, v)| (k.as_str(), v)),
        );
        arranged.extend(
            map.iter()
                .filter(|(k, _)| !self.names.contains(k.as_str()))
                .map(|(k, v)| (k.as_str(), v)),
        );

        arranged
    }
}
