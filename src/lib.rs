//! Scoped style registry for static site builds.
//!
//! Collects CSS from stylesheet files and inline fragments, split into a
//! `critical` scope (inlined into the page head) and an `async` scope
//! (loaded after first paint), grouped by category and by page identifier.
//!
//! ```ignore
//! let config = StylesConfig::load(Path::new("styles.toml"))?;
//! let mut registry = Registry::from_config(&config);
//! registry.add_stylesheets_directory(config.input_dir())?;
//! registry.add_style("critical", None, Some("/contents/index"), ".hero { height: 60vh; }")?;
//!
//! let head = registry.critical_styles(&Query::for_identifier("/contents/index"))?;
//! ```

pub mod asset;
pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod registry;
pub mod utils;

pub use config::StylesConfig;
pub use core::{BuildMode, IntoScope, Scope, StyleError};
pub use registry::{Query, Registry, RegistryOptions};
