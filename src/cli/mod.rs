//! Command-line interface module.

mod args;
pub mod check;
pub mod manifest;
pub mod query;

pub use args::{Cli, Commands, ManifestArgs, QueryArgs};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::StylesConfig;
use crate::log;
use crate::registry::{Registry, RegistryOptions};

/// Build a registry from config and ingest the input directory.
pub(crate) fn load_registry(config: &StylesConfig, options: RegistryOptions) -> Result<Registry> {
    config.validate(true)?;

    let mut registry = Registry::new(options);
    registry
        .add_stylesheets_directory(config.input_dir())
        .with_context(|| format!("failed to scan {}", config.input_dir().display()))?;
    Ok(registry)
}

/// Print to stdout, or write to `output` when given.
pub(crate) fn write_output(module: &str, content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{content}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            log!(module; "wrote output to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
