//! Core types - pure abstractions shared across the codebase.

mod driver;
mod error;
mod scope;

pub use driver::BuildMode;
pub use error::StyleError;
pub use scope::{IntoScope, Scope};

/// Category used when the caller does not name one.
pub const UNCATEGORIZED: &str = "uncategorized";
