//! Manifest command implementation.

use anyhow::Result;

use super::{ManifestArgs, load_registry, write_output};
use crate::config::StylesConfig;
use crate::registry::Manifest;

/// Execute manifest command
pub fn run_manifest(args: &ManifestArgs, config: &StylesConfig) -> Result<()> {
    let json = build_manifest(config)?.to_json(args.pretty)?;
    write_output("manifest", &json, args.output.as_deref())
}

/// Scan the input directory and describe it as hrefs under `dirs.output`.
pub fn build_manifest(config: &StylesConfig) -> Result<Manifest> {
    let registry = load_registry(config, config.into())?;
    Ok(registry.manifest(config.input_dir(), &config.dirs.output))
}
