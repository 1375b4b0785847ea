//! Common utilities shared across CLI commands.

use crate::config::ProjectConfig;
use crate::core::{is_shutdown, set_child_running, set_cleanup_pending};
use crate::tailwind::Commands;
use crate::{debug, log};
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Run `f` with a command builder for `config`, then dispose the merged
/// entry whether or not `f` succeeded.
///
/// The first error wins: a failure inside `f` is reported over a cleanup
/// failure. Ctrl+C is deferred until the entry is gone.
pub fn with_commands<T>(
    config: &ProjectConfig,
    f: impl FnOnce(&mut Commands) -> Result<T>,
) -> Result<T> {
    set_cleanup_pending(true);
    let mut commands = config.commands();
    let result = f(&mut commands);

    if let Some(path) = commands.tempfile_path() {
        debug!("entry"; "removing {}", path.display());
    }
    let cleanup = commands
        .remove_tempfile()
        .context("Failed to remove merged entry file");
    set_cleanup_pending(false);

    match (result, cleanup) {
        (Ok(value), Ok(())) => Ok(value),
        (Err(err), cleanup) => {
            if let Err(cleanup) = cleanup {
                log!("error"; "{:#}", cleanup);
            }
            Err(err)
        }
        (Ok(_), Err(err)) => Err(err),
    }
}

/// Run `f` while the executable owns the terminal.
///
/// Ctrl+C is then delivered to the executable too, and the process stays
/// alive long enough to clean up. Nothing is started once Ctrl+C was seen.
pub fn in_foreground<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    set_child_running(true);
    if is_shutdown() {
        set_child_running(false);
        bail!("interrupted");
    }
    let result = f();
    set_child_running(false);
    result
}

/// Ensure the compiled output directory exists.
pub fn ensure_output_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create `{}`", parent.display()))?;
    }
    Ok(())
}

/// Join arguments for display, quoting those a shell would split.
pub fn display_command(args: &[String]) -> String {
    args.iter()
        .map(|arg| {
            if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
                format!("'{}'", arg.replace('\'', r"'\''"))
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
