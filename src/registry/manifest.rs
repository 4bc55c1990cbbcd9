//! Link manifest: registered stylesheets as hrefs, for templates that emit
//! `<link>` tags instead of inlining.
//!
//! ```json
//! {
//!   "output": "/css",
//!   "categories": ["global", "blocks"],
//!   "stylesheets": {
//!     "global": { "async": ["/css/global/fonts-async.css"], "critical": ["/css/global/index.css"] },
//!     "blocks": { "async": [], "critical": ["/css/blocks/card.css"] }
//!   }
//! }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::asset::StylesheetTree;
use crate::core::Scope;
use crate::utils::path::href_for;

use super::order::CategoryOrder;

/// Hrefs of one category, per scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScopeLinks {
    #[serde(rename = "async")]
    pub async_: Vec<String>,
    pub critical: Vec<String>,
}

impl ScopeLinks {
    fn scope_mut(&mut self, scope: Scope) -> &mut Vec<String> {
        match scope {
            Scope::Critical => &mut self.critical,
            Scope::Async => &mut self.async_,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Public prefix every href starts with.
    pub output: String,
    /// Category names in emission order.
    pub categories: Vec<String>,
    pub stylesheets: IndexMap<String, ScopeLinks>,
}

impl Manifest {
    /// Collect every category of both scopes, arranged by `order`.
    ///
    /// Categories only present in the async scope are placed after the
    /// critical ones, unless `order` names them.
    pub(super) fn build(
        tree: &StylesheetTree,
        order: &CategoryOrder,
        base: &Path,
        output: &str,
    ) -> Self {
        let mut merged: IndexMap<String, ScopeLinks> = IndexMap::new();
        for scope in [Scope::Critical, Scope::Async] {
            for (category, paths) in tree.categories(scope) {
                let links = merged.entry(category.clone()).or_default();
                links
                    .scope_mut(scope)
                    .extend(paths.iter().map(|path| href_for(path, base, output)));
            }
        }

        let stylesheets: IndexMap<String, ScopeLinks> = order
            .arrange(&merged)
            .into_iter()
            .map(|(category, links)| (category.to_string(), links.clone()))
            .collect();

        Self {
            output: output.to_string(),
            categories: stylesheets.keys().cloned().collect(),
            stylesheets,
        }
    }

    /// Serialize as JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tree() -> StylesheetTree {
        let mut tree = StylesheetTree::new();
        tree.touch("blocks");
        tree.push(Scope::Critical, "blocks", PathBuf::from("_includes/css/blocks/card.css"));
        tree.push(Scope::Critical, "global", PathBuf::from("_includes/css/global/index.css"));
        tree.push(Scope::Async, "global", PathBuf::from("_includes/css/global/fonts-async.css"));
        tree.push(Scope::Async, "print", PathBuf::from("_includes/css/print-async.css"));
        tree
    }

    #[test]
    fn test_manifest_hrefs() {
        let manifest = Manifest::build(
            &tree(),
            &CategoryOrder::default(),
            Path::new("_includes"),
            "/",
        );

        assert_eq!(manifest.categories, ["blocks", "global", "print"]);
        assert_eq!(
            manifest.stylesheets["global"],
            ScopeLinks {
                async_: vec!["/css/global/fonts-async.css".into()],
                critical: vec!["/css/global/index.css".into()],
            }
        );
        assert!(manifest.stylesheets["blocks"].async_.is_empty());
    }

    #[test]
    fn test_manifest_sort_order() {
        let order = CategoryOrder::new(["print", "global"]);
        let manifest = Manifest::build(&tree(), &order, Path::new("_includes/css"), "/css");

        assert_eq!(manifest.categories, ["print", "global", "blocks"]);
        assert_eq!(manifest.stylesheets["print"].async_, ["/css/print-async.css"]);
    }

    #[test]
    fn test_manifest_json_shape() {
        let mut tree = StylesheetTree::new();
        tree.push(Scope::Critical, "global", PathBuf::from("css/global/index.css"));
        let manifest = Manifest::build(&tree, &CategoryOrder::default(), Path::new("css"), "/css");

        assert_eq!(
            manifest.to_json(false).unwrap(),
            r#"{"output":"/css","categories":["global"],"stylesheets":{"global":{"async":[],"critical":["/css/global/index.css"]}}}"#
        );
    }
}
