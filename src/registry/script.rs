//! Script entries and their rendering.
//!
//! Scripts follow the same scope/category/identifier model as inline
//! styles. An entry is either a raw body or a tag description:
//!
//! ```text
//! ScriptEntry::Inline("init()")          -> <script>init()</script>
//! ScriptEntry::Tag { src, [defer, type] } -> <script src="/js/app.js" defer type="module"></script>
//! ```

use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::asset::minify::minify_js;
use crate::core::BuildMode;
use crate::utils::html::escape_attr;

/// Value of a script tag attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Boolean attribute, rendered bare (`defer`).
    Flag,
    /// Valued attribute, rendered `name="value"`.
    Value(String),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

/// External script reference with attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
    pub src: String,
    pub attrs: IndexMap<String, AttrValue>,
}

impl ScriptTag {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            attrs: IndexMap::new(),
        }
    }

    /// Add an attribute. Re-adding a name updates it in place.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Add a boolean attribute.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, AttrValue::Flag)
    }

    pub fn render(&self) -> String {
        let mut tag = format!(r#"<script src="{}""#, escape_attr(&self.src));
        for (name, value) in &self.attrs {
            match value {
                AttrValue::Flag => {
                    let _ = write!(tag, " {name}");
                }
                AttrValue::Value(value) => {
                    let _ = write!(tag, r#" {name}="{}""#, escape_attr(value));
                }
            }
        }
        tag.push_str("></script>");
        tag
    }
}

/// A registered script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEntry {
    /// Raw script body.
    Inline(String),
    /// Reference to an external script.
    Tag(ScriptTag),
}

impl ScriptEntry {
    pub fn inline(body: impl Into<String>) -> Self {
        Self::Inline(body.into())
    }

    /// Render as markup. Inline bodies are minified in production builds,
    /// falling back to the raw body when they do not parse.
    pub fn render(&self, mode: BuildMode) -> String {
        match self {
            Self::Inline(body) => {
                let body = if mode.minify {
                    minify_js(body).unwrap_or_else(|| {
                        crate::debug!("scripts"; "failed to minify inline script, keeping source");
                        body.clone()
                    })
                } else {
                    body.clone()
                };
                format!("<script>{}</script>", body.trim_end())
            }
            Self::Tag(tag) => tag.render(),
        }
    }
}

impl From<ScriptTag> for ScriptEntry {
    fn from(tag: ScriptTag) -> Self {
        Self::Tag(tag)
    }
}
