//! Style scope definitions.

use std::fmt;
use std::str::FromStr;

use crate::core::StyleError;

/// Delivery scope of a style or script fragment.
///
/// `Critical` content is inlined into the page head, `Async` content is
/// loaded after first paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Critical,
    Async,
}

impl Scope {
    /// All scopes, in emission order.
    pub const ALL: [Self; 2] = [Self::Critical, Self::Async];

    /// Parse a scope name coming from the host (templates, CLI).
    pub fn parse(name: &str) -> Result<Self, StyleError> {
        match name {
            "critical" => Ok(Self::Critical),
            "async" => Ok(Self::Async),
            other => Err(StyleError::UnsupportedScope(other.to_string())),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Async => "async",
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Critical => 0,
            Self::Async => 1,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scope {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Values accepted wherever a scope is expected.
///
/// Every registry entry point goes through this conversion before touching
/// state, so an unknown scope name never causes a partial write.
pub trait IntoScope {
    fn into_scope(self) -> Result<Scope, StyleError>;
}

impl IntoScope for Scope {
    #[inline]
    fn into_scope(self) -> Result<Scope, StyleError> {
        Ok(self)
    }
}

impl IntoScope for &str {
    fn into_scope(self) -> Result<Scope, StyleError> {
        Scope::parse(self)
    }
}

impl IntoScope for &String {
    fn into_scope(self) -> Result<Scope, StyleError> {
        Scope::parse(self)
    }
}
