//! In-memory style and script registry for one build run.
//!
//! # Module Structure
//!
//! ```text
//! registry/
//! ├── tree      # ScopeTree / Keyed layered containers
//! ├── order     # CategoryOrder (configured sort order)
//! ├── resolve   # Query + aggregation helpers
//! ├── script    # ScriptEntry rendering
//! ├── manifest  # Link manifest for the host templates
//! └── mod.rs    # Registry (this file)
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut registry = Registry::new(RegistryOptions::default());
//! registry.add_stylesheets_directory("_includes/css")?;
//! registry.add_style("critical", None, Some("/contents/index"), ":root { --gap: 1rem; }")?;
//!
//! let head = registry.critical_styles(&Query::for_identifier("/contents/index"))?;
//! ```

mod manifest;
mod order;
mod resolve;
mod script;
mod tree;

pub use manifest::{Manifest, ScopeLinks};
pub use order::CategoryOrder;
pub use resolve::Query;
pub use script::{AttrValue, ScriptEntry, ScriptTag};
pub use tree::{Keyed, ScopeTree};

use std::path::{Path, PathBuf};

use crate::asset::{
    DEFAULT_ASYNC_MARKER, ExtensionFilter, PostProcessor, ScanOptions, StylesheetTree,
    scan_stylesheets,
};
use crate::config::StylesConfig;
use crate::core::{BuildMode, IntoScope, Scope, StyleError, UNCATEGORIZED};

/// Construction options for a [`Registry`].
#[derive(Debug, Clone)]
pub struct RegistryOptions {
    /// Extensions picked up by directory ingestion.
    pub filter: ExtensionFilter,
    /// Categories emitted first when a query spans all categories.
    pub order: CategoryOrder,
    /// File name substring marking async stylesheets.
    pub async_marker: String,
    /// Record scanned stylesheets as absolute paths.
    pub absolute_paths: bool,
    /// Selects the default post-processor and script minification.
    pub mode: BuildMode,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            filter: ExtensionFilter::default(),
            order: CategoryOrder::default(),
            async_marker: DEFAULT_ASYNC_MARKER.to_string(),
            absolute_paths: false,
            mode: BuildMode::default(),
        }
    }
}

/// Registry of inline styles, stylesheet references and scripts.
///
/// Writes are visible to the next read; stylesheet files are read lazily on
/// every styles query, so edits between queries show up immediately.
#[derive(Debug)]
pub struct Registry {
    styles: ScopeTree<Keyed<String>>,
    stylesheets: StylesheetTree,
    scripts: ScopeTree<Keyed<ScriptEntry>>,
    options: RegistryOptions,
    post_processor: PostProcessor,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryOptions::default())
    }
}

impl Registry {
    pub fn new(options: RegistryOptions) -> Self {
        Self {
            styles: ScopeTree::new(),
            stylesheets: StylesheetTree::new(),
            scripts: ScopeTree::new(),
            post_processor: PostProcessor::for_mode(options.mode),
            options,
        }
    }

    /// Registry configured from `styles.toml`. Nothing is scanned yet.
    pub fn from_config(config: &StylesConfig) -> Self {
        Self::new(config.into())
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Registered stylesheet paths.
    pub fn stylesheets(&self) -> &StylesheetTree {
        &self.stylesheets
    }

    /// Registered inline styles.
    pub fn inline_styles(&self) -> &ScopeTree<Keyed<String>> {
        &self.styles
    }

    /// Registered scripts.
    pub fn registered_scripts(&self) -> &ScopeTree<Keyed<ScriptEntry>> {
        &self.scripts
    }

    /// Replace the CSS post-processor.
    pub fn set_post_processor(&mut self, processor: PostProcessor) {
        self.post_processor = processor;
    }

    // ========================================================================
    // ingestion
    // ========================================================================

    /// Register inline CSS.
    ///
    /// Without an identifier the content is shared by every page.
    pub fn add_style(
        &mut self,
        scope: impl IntoScope,
        category: Option<&str>,
        identifier: Option<&str>,
        content: impl Into<String>,
    ) -> Result<(), StyleError> {
        let scope = scope.into_scope()?;
        self.styles
            .entry(scope, category.unwrap_or(UNCATEGORIZED))
            .push(identifier, content.into());
        Ok(())
    }

    /// Register a stylesheet path.
    ///
    /// The file is not checked here; a missing file fails the query that
    /// needs it.
    pub fn add_stylesheet(
        &mut self,
        scope: impl IntoScope,
        category: Option<&str>,
        path: impl Into<PathBuf>,
    ) -> Result<(), StyleError> {
        let scope = scope.into_scope()?;
        self.stylesheets
            .push(scope, category.unwrap_or(UNCATEGORIZED), path.into());
        Ok(())
    }

    /// Scan a directory and append its stylesheets to those already registered.
    ///
    /// Scanning the same directory twice registers every file twice.
    pub fn add_stylesheets_directory(&mut self, dir: impl AsRef<Path>) -> Result<(), StyleError> {
        let options = ScanOptions {
            filter: &self.options.filter,
            async_marker: &self.options.async_marker,
            absolute_paths: self.options.absolute_paths,
        };
        let scanned = scan_stylesheets(dir.as_ref(), &options)?;
        self.stylesheets.merge(scanned);
        Ok(())
    }

    /// Register a script (raw body or tag).
    pub fn add_script(
        &mut self,
        scope: impl IntoScope,
        category: Option<&str>,
        identifier: Option<&str>,
        entry: impl Into<ScriptEntry>,
    ) -> Result<(), StyleError> {
        let scope = scope.into_scope()?;
        self.scripts
            .entry(scope, category.unwrap_or(UNCATEGORIZED))
            .push(identifier, entry.into());
        Ok(())
    }

    // ========================================================================
    // styles
    // ========================================================================

    /// Aggregate and post-process the styles of a scope.
    pub fn styles(&self, scope: impl IntoScope, query: &Query<'_>) -> Result<String, StyleError> {
        let scope = scope.into_scope()?;
        let parts = resolve::gather_styles(
            &self.stylesheets,
            &self.styles,
            scope,
            query,
            &self.options.order,
        )?;
        Ok(self.post_processor.apply(&parts.join("\n")))
    }

    pub fn critical_styles(&self, query: &Query<'_>) -> Result<String, StyleError> {
        self.styles(Scope::Critical, query)
    }

    pub fn async_styles(&self, query: &Query<'_>) -> Result<String, StyleError> {
        self.styles(Scope::Async, query)
    }

    /// Whether the scope has stylesheets, or inline styles registered for
    /// `identifier` itself.
    ///
    /// Shared inline styles do not count. Stylesheet files are not checked
    /// for existence.
    pub fn has_styles(
        &self,
        scope: impl IntoScope,
        identifier: Option<&str>,
    ) -> Result<bool, StyleError> {
        let scope = scope.into_scope()?;
        Ok(self.stylesheets.has_items(scope)
            || identifier.is_some_and(|id| self.styles.has_entries_for(scope, id)))
    }

    pub fn has_critical_styles(&self, identifier: Option<&str>) -> bool {
        self.has_styles(Scope::Critical, identifier)
            .unwrap_or_default()
    }

    pub fn has_async_styles(&self, identifier: Option<&str>) -> bool {
        self.has_styles(Scope::Async, identifier).unwrap_or_default()
    }

    // ========================================================================
    // scripts
    // ========================================================================

    /// Render the scripts of a scope, one entry per line.
    pub fn scripts(&self, scope: impl IntoScope, query: &Query<'_>) -> Result<String, StyleError> {
        let scope = scope.into_scope()?;
        let rendered: Vec<_> =
            resolve::select_inline(&self.scripts, scope, query, &self.options.order)
                .into_iter()
                .map(|entry| entry.render(self.options.mode))
                .collect();
        Ok(rendered.join("\n"))
    }

    pub fn critical_scripts(&self, query: &Query<'_>) -> Result<String, StyleError> {
        self.scripts(Scope::Critical, query)
    }

    pub fn async_scripts(&self, query: &Query<'_>) -> Result<String, StyleError> {
        self.scripts(Scope::Async, query)
    }

    /// Whether the scope has scripts registered for `identifier` itself.
    pub fn has_scripts(
        &self,
        scope: impl IntoScope,
        identifier: Option<&str>,
    ) -> Result<bool, StyleError> {
        let scope = scope.into_scope()?;
        Ok(identifier.is_some_and(|id| self.scripts.has_entries_for(scope, id)))
    }

    pub fn has_critical_scripts(&self, identifier: Option<&str>) -> bool {
        self.has_scripts(Scope::Critical, identifier)
            .unwrap_or_default()
    }

    pub fn has_async_scripts(&self, identifier: Option<&str>) -> bool {
        self.has_scripts(Scope::Async, identifier)
            .unwrap_or_default()
    }

    // ========================================================================
    // manifest
    // ========================================================================

    /// Describe registered stylesheets as hrefs under `output`.
    ///
    /// Paths are made relative to `base` (usually the includes directory).
    pub fn manifest(&self, base: &Path, output: &str) -> Manifest {
        Manifest::build(&self.stylesheets, &self.options.order, base, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CARD: &str = ".card {\n\tborder-radius: 0.5em;\n}\n";
    const COMPOSITION: &str = ".stack > * + * {\n\tmargin-top: var( --stack-size );\n}\n";
    const GLOBAL: &str = "body {\n\tmargin: 0;\n}\n";

    /// Stylesheet fixture directory:
    ///
    /// ```text
    /// blocks/card.css  blocks/card.txt  blocks/button.css  blocks/button-async.css
    /// composition.css
    /// global/index.css  global/fonts-async.css
    /// ```
    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let write = |rel: &str, content: &str| {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        };
        write("blocks/card.css", CARD);
        write("blocks/card.txt", "plain text");
        write("blocks/button.css", ".button {}\n");
        write("blocks/button-async.css", ".button:hover {}\n");
        write("composition.css", COMPOSITION);
        write("global/index.css", GLOBAL);
        write("global/fonts-async.css", "@font-face {}\n");
        dir
    }

    /// Registry with post-processing disabled, so output is comparable.
    fn raw_registry(options: RegistryOptions) -> Registry {
        let mut registry = Registry::new(options);
        registry.set_post_processor(PostProcessor::identity());
        registry
    }

    fn fresh() -> Registry {
        raw_registry(RegistryOptions::default())
    }

    // ------------------------------------------------------------------------
    // scope validation
    // ------------------------------------------------------------------------

    #[test]
    fn test_add_style_unsupported_scope() {
        let mut registry = fresh();
        let err = registry
            .add_style("myCustomScope", None, Some("/index"), "body {}")
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported scope: 'myCustomScope'");
        for scope in Scope::ALL {
            assert!(registry.inline_styles().categories(scope).is_empty());
        }
    }

    #[test]
    fn test_add_stylesheet_unsupported_scope() {
        let mut registry = fresh();
        let err = registry
            .add_stylesheet("myCustomScope", None, "card.css")
            .unwrap_err();
        assert!(matches!(err, StyleError::UnsupportedScope(_)));
        for scope in Scope::ALL {
            assert!(registry.stylesheets().categories(scope).is_empty());
        }
    }

    #[test]
    fn test_queries_unsupported_scope() {
        let mut registry = fresh();
        registry
            .add_script("deferred", None, None, ScriptEntry::inline("x()"))
            .unwrap_err();
        assert!(matches!(
            registry.styles("deferred", &Query::all()),
            Err(StyleError::UnsupportedScope(_))
        ));
        assert!(registry.scripts("deferred", &Query::all()).is_err());
        assert!(registry.has_styles("deferred", None).is_err());
        assert!(registry.has_scripts("deferred", None).is_err());
        for scope in Scope::ALL {
            assert!(registry.registered_scripts().categories(scope).is_empty());
        }
    }

    #[test]
    fn test_string_scopes_accepted() {
        let mut registry = fresh();
        let scope = String::from("async");
        registry.add_style(&scope, None, Some("/index"), "a {}").unwrap();
        registry.add_style("critical", None, Some("/index"), "b {}").unwrap();

        assert_eq!(registry.async_styles(&Query::for_identifier("/index")).unwrap(), "a {}");
        assert_eq!(registry.critical_styles(&Query::for_identifier("/index")).unwrap(), "b {}");
    }

    // ------------------------------------------------------------------------
    // directory ingestion
    // ------------------------------------------------------------------------

    #[test]
    fn test_add_directory_missing() {
        let dir = TempDir::new().unwrap();
        let mut registry = fresh();
        let err = registry
            .add_stylesheets_directory(dir.path().join("non-existent"))
            .unwrap_err();
        assert!(matches!(err, StyleError::DirectoryNotFound(..)));
    }

    #[test]
    fn test_add_directory_creates_categories() {
        let dir = fixture();
        let mut registry = fresh();

        for scope in Scope::ALL {
            assert!(!registry.stylesheets().contains(scope, "blocks"));
        }

        registry.add_stylesheets_directory(dir.path()).unwrap();

        for scope in Scope::ALL {
            for category in ["blocks", "composition", "global"] {
                assert!(registry.stylesheets().contains(scope, category));
            }
        }
    }

    #[test]
    fn test_add_directory_keeps_existing_entries() {
        let dir = fixture();
        let mut registry = fresh();
        let existing = dir.path().join("global/non-existent.css");
        registry
            .add_stylesheet(Scope::Async, Some("global"), existing.clone())
            .unwrap();
        assert_eq!(registry.stylesheets().list(Scope::Async, "global").len(), 1);

        registry.add_stylesheets_directory(dir.path()).unwrap();

        let global = registry.stylesheets().list(Scope::Async, "global");
        assert_eq!(global.len(), 2);
        assert_eq!(global[0], existing);
    }

    #[test]
    fn test_add_directory_twice_doubles_entries() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("global")).unwrap();
        fs::write(dir.path().join("global/index.css"), GLOBAL).unwrap();

        let mut registry = fresh();
        registry.add_stylesheets_directory(dir.path()).unwrap();
        registry.add_stylesheets_directory(dir.path()).unwrap();

        assert_eq!(registry.stylesheets().list(Scope::Critical, "global").len(), 2);
        assert_eq!(registry.critical_styles(&Query::all()).unwrap(), format!("{GLOBAL}\n{GLOBAL}"));
    }

    #[test]
    fn test_add_directory_default_extensions() {
        let dir = fixture();
        let mut registry = fresh();
        registry.add_stylesheets_directory(dir.path()).unwrap();

        assert_eq!(registry.stylesheets().list(Scope::Async, "blocks").len(), 1);
        assert_eq!(registry.stylesheets().list(Scope::Critical, "blocks").len(), 2);
    }

    #[test]
    fn test_add_directory_additional_extensions() {
        let dir = fixture();
        let mut filter = ExtensionFilter::default();
        filter.extend([".txt"]);
        let mut registry = raw_registry(RegistryOptions {
            filter,
            ..RegistryOptions::default()
        });
        registry.add_stylesheets_directory(dir.path()).unwrap();

        assert_eq!(registry.stylesheets().list(Scope::Async, "blocks").len(), 1);
        assert_eq!(registry.stylesheets().list(Scope::Critical, "blocks").len(), 3);
    }

    #[test]
    fn test_add_directory_custom_marker() {
        let dir = fixture();
        let mut registry = raw_registry(RegistryOptions {
            async_marker: "-hover".into(),
            ..RegistryOptions::default()
        });
        registry.add_stylesheets_directory(dir.path()).unwrap();

        // "-async" is an ordinary file name fragment now
        assert!(registry.stylesheets().list(Scope::Async, "blocks").is_empty());
        assert_eq!(registry.stylesheets().list(Scope::Critical, "blocks").len(), 3);
    }

    // ------------------------------------------------------------------------
    // styles
    // ------------------------------------------------------------------------

    #[test]
    fn test_styles_empty_for_unknown_identifier() {
        let registry = fresh();
        for scope in Scope::ALL {
            assert_eq!(registry.styles(scope, &Query::for_identifier("/contents/index")).unwrap(), "");
        }
    }

    #[test]
    fn test_styles_inline_joined() {
        let styles = ["body {\n\tcolor: #333;\n}", ".Example {\n\tbackground-color: #eee;\n}"];
        for scope in Scope::ALL {
            let mut registry = fresh();
            for style in styles {
                registry.add_style(scope, None, Some("/contents/index"), style).unwrap();
            }
            assert_eq!(
                registry.styles(scope, &Query::for_identifier("/contents/index")).unwrap(),
                styles.join("\n")
            );
        }
    }

    #[test]
    fn test_styles_single_category() {
        let dir = fixture();
        for scope in Scope::ALL {
            let mut registry = fresh();
            registry
                .add_stylesheet(scope, Some("composition"), dir.path().join("composition.css"))
                .unwrap();
            registry
                .add_stylesheet(scope, Some("blocks"), dir.path().join("blocks/card.css"))
                .unwrap();

            assert_eq!(
                registry.styles(scope, &Query::all().in_category("composition")).unwrap(),
                COMPOSITION
            );
            assert_eq!(
                registry.styles(scope, &Query::all().in_category("unknown")).unwrap(),
                ""
            );
        }
    }

    #[test]
    fn test_styles_all_categories_in_registration_order() {
        let dir = fixture();
        for scope in Scope::ALL {
            let mut registry = fresh();
            registry
                .add_stylesheet(scope, Some("composition"), dir.path().join("composition.css"))
                .unwrap();
            registry
                .add_stylesheet(scope, Some("blocks"), dir.path().join("blocks/card.css"))
                .unwrap();

            assert_eq!(
                registry.styles(scope, &Query::all()).unwrap(),
                [COMPOSITION, CARD].join("\n")
            );
        }
    }

    #[test]
    fn test_styles_category_sort_order() {
        let dir = fixture();
        let mut registry = raw_registry(RegistryOptions {
            order: CategoryOrder::new(["global", "composition", "blocks"]),
            ..RegistryOptions::default()
        });
        registry
            .add_stylesheet(Scope::Critical, Some("blocks"), dir.path().join("blocks/card.css"))
            .unwrap();
        registry
            .add_stylesheet(Scope::Critical, Some("composition"), dir.path().join("composition.css"))
            .unwrap();
        registry
            .add_stylesheet(Scope::Critical, Some("global"), dir.path().join("global/index.css"))
            .unwrap();

        assert_eq!(
            registry.critical_styles(&Query::all()).unwrap(),
            [GLOBAL, COMPOSITION, CARD].join("\n")
        );
    }

    #[test]
    fn test_styles_sort_order_unnamed_categories_last() {
        let dir = fixture();
        let mut registry = raw_registry(RegistryOptions {
            order: CategoryOrder::new(["global", "utilities"]),
            ..RegistryOptions::default()
        });
        registry
            .add_stylesheet(Scope::Critical, Some("blocks"), dir.path().join("blocks/card.css"))
            .unwrap();
        registry
            .add_stylesheet(Scope::Critical, Some("global"), dir.path().join("global/index.css"))
            .unwrap();

        assert_eq!(
            registry.critical_styles(&Query::all()).unwrap(),
            [GLOBAL, CARD].join("\n")
        );
    }

    #[test]
    fn test_styles_missing_stylesheet_fails_on_query() {
        for scope in Scope::ALL {
            let mut registry = fresh();
            registry
                .add_stylesheet(scope, None, "./definitely/non-existent.css")
                .unwrap();

            let err = registry
                .styles(scope, &Query::for_identifier("/contents/about"))
                .unwrap_err();
            assert!(matches!(err, StyleError::FileNotFound(..)));
        }
    }

    #[test]
    fn test_styles_late_file_creation() {
        let dir = TempDir::new().unwrap();
        let late = dir.path().join("late.css");
        let mut registry = fresh();
        registry.add_stylesheet(Scope::Critical, None, late.clone()).unwrap();

        assert!(registry.critical_styles(&Query::all()).is_err());

        fs::write(&late, "main {}").unwrap();
        assert_eq!(registry.critical_styles(&Query::all()).unwrap(), "main {}");

        // No caching: edits show up on the next query
        fs::write(&late, "main { display: grid; }").unwrap();
        assert_eq!(
            registry.critical_styles(&Query::all()).unwrap(),
            "main { display: grid; }"
        );
    }

    #[test]
    fn test_styles_identifier_scoping() {
        let dir = fixture();
        let index_style = ":root {\n\t--color-black: #333;\n}";
        let about_style = ".stack > * + * {\n\tmargin-top: var( --stack-size );\n}";

        for scope in Scope::ALL {
            let mut registry = fresh();
            registry
                .add_stylesheet(scope, Some("blocks"), dir.path().join("blocks/card.css"))
                .unwrap();
            registry
                .add_style(scope, None, Some("/contents/index"), index_style)
                .unwrap();
            registry
                .add_style(scope, None, Some("/contents/about"), about_style)
                .unwrap();

            assert_eq!(
                registry.styles(scope, &Query::for_identifier("/contents/index")).unwrap(),
                [CARD, index_style].join("\n")
            );
            assert_eq!(
                registry.styles(scope, &Query::for_identifier("/contents/missing")).unwrap(),
                CARD
            );
        }
    }

    #[test]
    fn test_styles_shared_inline_on_every_query() {
        let mut registry = fresh();
        registry.add_style(Scope::Critical, None, None, "html {}").unwrap();
        registry
            .add_style(Scope::Critical, None, Some("/index"), "main {}")
            .unwrap();

        assert_eq!(registry.critical_styles(&Query::all()).unwrap(), "html {}");
        assert_eq!(
            registry.critical_styles(&Query::for_identifier("/index")).unwrap(),
            "html {}\nmain {}"
        );
    }

    #[test]
    fn test_styles_inline_category_filter() {
        let mut registry = fresh();
        registry
            .add_style(Scope::Async, Some("blocks"), Some("/index"), ".card {}")
            .unwrap();
        registry
            .add_style(Scope::Async, Some("global"), Some("/index"), "body {}")
            .unwrap();

        let query = Query::for_identifier("/index").in_category("global");
        assert_eq!(registry.async_styles(&query).unwrap(), "body {}");
    }

    #[test]
    fn test_interleaved_writes_visible() {
        let mut registry = fresh();
        assert_eq!(registry.critical_styles(&Query::for_identifier("/a")).unwrap(), "");
        registry.add_style(Scope::Critical, None, Some("/a"), "a {}").unwrap();
        assert_eq!(registry.critical_styles(&Query::for_identifier("/a")).unwrap(), "a {}");
    }

    // ------------------------------------------------------------------------
    // post-processing
    // ------------------------------------------------------------------------

    const MESSY: &str = "   body{\n\n\n color:red     }\n";

    #[test]
    fn test_post_processor_beautifies_by_default() {
        let mut registry = Registry::default();
        registry
            .add_style(Scope::Critical, None, Some("/content/index"), MESSY)
            .unwrap();

        let out = registry
            .critical_styles(&Query::for_identifier("/content/index"))
            .unwrap();
        assert_eq!(out, crate::asset::minify::beautify_css(MESSY).unwrap());
        assert!(out.contains("color: red"));
    }

    #[test]
    fn test_post_processor_minifies_in_production() {
        let mut registry = Registry::new(RegistryOptions {
            mode: BuildMode::PRODUCTION,
            ..RegistryOptions::default()
        });
        registry
            .add_style(Scope::Critical, None, Some("/content/index"), MESSY)
            .unwrap();

        assert_eq!(
            registry
                .critical_styles(&Query::for_identifier("/content/index"))
                .unwrap(),
            "body{color:red}"
        );
    }

    #[test]
    fn test_post_processor_override() {
        let mut registry = Registry::new(RegistryOptions {
            mode: BuildMode::PRODUCTION,
            ..RegistryOptions::default()
        });
        registry
            .add_style(Scope::Critical, None, Some("/content/index"), MESSY)
            .unwrap();
        registry.set_post_processor(PostProcessor::new(|css| css.to_uppercase()));

        assert_eq!(
            registry
                .critical_styles(&Query::for_identifier("/content/index"))
                .unwrap(),
            MESSY.to_uppercase()
        );
    }

    // ------------------------------------------------------------------------
    // has_*
    // ------------------------------------------------------------------------

    #[test]
    fn test_has_styles_false_by_default() {
        let registry = fresh();
        assert!(!registry.has_async_styles(None));
        assert!(!registry.has_critical_styles(None));
        assert!(!registry.has_critical_styles(Some("/content/index")));
    }

    #[test]
    fn test_has_styles_with_stylesheet() {
        for scope in Scope::ALL {
            let mut registry = fresh();
            registry
                .add_stylesheet(scope, Some("blocks"), "./not/checked.css")
                .unwrap();
            assert!(registry.has_styles(scope, None).unwrap());
        }
        let mut registry = fresh();
        registry
            .add_stylesheet(Scope::Async, Some("blocks"), "card.css")
            .unwrap();
        assert!(registry.has_async_styles(None));
        assert!(!registry.has_critical_styles(None));
    }

    #[test]
    fn test_has_styles_with_inline_style() {
        let mut registry = fresh();
        registry
            .add_style(Scope::Async, None, Some("/content/index"), "body {}")
            .unwrap();

        assert!(registry.has_async_styles(Some("/content/index")));
        assert!(!registry.has_async_styles(Some("/content/about")));
        assert!(!registry.has_async_styles(None));
        assert!(!registry.has_critical_styles(Some("/content/index")));
    }

    #[test]
    fn test_has_styles_ignores_shared_inline_style() {
        let mut registry = fresh();
        registry.add_style(Scope::Critical, None, None, "html {}").unwrap();

        assert!(!registry.has_critical_styles(None));
        assert!(!registry.has_critical_styles(Some("/other")));

        // Still emitted on queries
        assert_eq!(registry.critical_styles(&Query::all()).unwrap(), "html {}");

        registry
            .add_style(Scope::Critical, None, Some("/other"), "main {}")
            .unwrap();
        assert!(registry.has_critical_styles(Some("/other")));
        assert!(!registry.has_critical_styles(None));
    }

    #[test]
    fn test_has_styles_ignores_empty_scanned_categories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("print.css"), "").unwrap();
        let mut registry = fresh();
        registry.add_stylesheets_directory(dir.path()).unwrap();

        assert!(registry.stylesheets().contains(Scope::Async, "print"));
        assert!(!registry.has_async_styles(None));
        assert!(registry.has_critical_styles(None));
    }

    // ------------------------------------------------------------------------
    // scripts
    // ------------------------------------------------------------------------

    #[test]
    fn test_scripts_render_in_order() {
        let mut registry = raw_registry(RegistryOptions {
            order: CategoryOrder::new(["vendor"]),
            ..RegistryOptions::default()
        });
        registry
            .add_script(Scope::Async, Some("app"), None, ScriptTag::new("/js/app.js").flag("defer"))
            .unwrap();
        registry
            .add_script(
                Scope::Async,
                Some("vendor"),
                None,
                ScriptTag::new("/js/vendor.js").attr("type", "module"),
            )
            .unwrap();
        registry
            .add_script(Scope::Async, Some("app"), Some("/index"), ScriptEntry::inline("init()"))
            .unwrap();

        assert_eq!(
            registry.async_scripts(&Query::for_identifier("/index")).unwrap(),
            [
                r#"<script src="/js/vendor.js" type="module"></script>"#,
                r#"<script src="/js/app.js" defer></script>"#,
                "<script>init()</script>",
            ]
            .join("\n")
        );
        assert_eq!(registry.critical_scripts(&Query::all()).unwrap(), "");
    }

    #[test]
    fn test_has_scripts() {
        let mut registry = fresh();
        assert!(!registry.has_critical_scripts(None));

        registry
            .add_script(Scope::Critical, None, Some("/index"), ScriptEntry::inline("x()"))
            .unwrap();
        assert!(registry.has_critical_scripts(Some("/index")));
        assert!(!registry.has_critical_scripts(None));
        assert!(!registry.has_async_scripts(Some("/index")));

        registry
            .add_script(Scope::Async, None, None, ScriptTag::new("/js/app.js"))
            .unwrap();
        assert!(!registry.has_async_scripts(None));
        assert!(!registry.has_async_scripts(Some("/index")));
    }
}
