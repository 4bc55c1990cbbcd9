//! Check command implementation.

use anyhow::Result;

use super::load_registry;
use crate::config::StylesConfig;
use crate::core::Scope;
use crate::log;

/// Validate config, scan the input directory and report what was found.
pub fn run_check(config: &StylesConfig) -> Result<()> {
    match &config.config_path {
        Some(path) => log!("check"; "config: {}", path.display()),
        None => log!("check"; "no config file, using defaults"),
    }

    let registry = load_registry(config, config.into())?;
    let stylesheets = registry.stylesheets();
    for scope in Scope::ALL {
        log!(
            "check";
            "{}: {} stylesheet(s) in {} categories",
            scope,
            stylesheets.count(scope),
            stylesheets.categories(scope).len()
        );
    }

    log!("check"; "ok");
    Ok(())
}
