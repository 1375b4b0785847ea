//! Configuration check.

use crate::config::ProjectConfig;
use crate::log;
use anyhow::Result;

/// Validate configuration and report what a build would use.
pub fn check(config: &ProjectConfig) -> Result<()> {
    match &config.config_path {
        Some(path) => log!("check"; "config: {}", path.display()),
        None => log!("check"; "no config file, using defaults"),
    }

    config.validate()?;

    let contributors = config.commands().contributor_stylesheets();
    log!("check"; "ok ({} contributor stylesheet{})",
        contributors.len(), if contributors.len() == 1 { "" } else { "s" });
    Ok(())
}
