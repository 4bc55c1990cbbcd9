//! Query command implementation.
//!
//! Scans the configured stylesheet directory and prints the aggregated,
//! post-processed styles of one scope.

use anyhow::Result;

use super::{QueryArgs, load_registry, write_output};
use crate::config::StylesConfig;
use crate::core::{BuildMode, Scope};
use crate::registry::{Query, RegistryOptions};

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &StylesConfig) -> Result<()> {
    let css = query_styles(args, config)?;
    write_output("query", &css, args.output.as_deref())
}

/// Aggregate the styles selected by `args`.
pub fn query_styles(args: &QueryArgs, config: &StylesConfig) -> Result<String> {
    // Validate before touching the filesystem
    let scope = Scope::parse(&args.scope)?;

    let mut options = RegistryOptions::from(config);
    if let Some(minify) = args.minify {
        options.mode = BuildMode { minify };
    }

    let registry = load_registry(config, options)?;
    let query = Query {
        identifier: args.identifier.as_deref(),
        category: args.category.as_deref(),
    };

    crate::debug!("query"; "{} styles, category {:?}", scope, query.category);
    Ok(registry.styles(scope, &query)?)
}
