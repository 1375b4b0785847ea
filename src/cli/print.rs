//! Inspection commands: `print` and `contributors`.

use super::common::{display_command, with_commands};
use super::{BuildArgs, WatchArgs};
use crate::config::ProjectConfig;
use crate::tailwind::command_env;
use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};

/// Print the command line `build` or `watch` would run.
///
/// The merged entry is removed before twbuild exits, so its content is
/// printed along with the command.
pub fn print_command(
    config: &ProjectConfig,
    build_args: &BuildArgs,
    watch_args: &WatchArgs,
    watch: bool,
    as_json: bool,
) -> Result<()> {
    let env = command_env(build_args.verbose);

    let (argv, merged) = with_commands(config, |commands| {
        let argv = if watch {
            commands.watch_command(&watch_args.watch_options(build_args))?
        } else {
            commands.compile_command(&build_args.compile_options())?
        };
        let merged = commands
            .tempfile_path()
            .map(|path| -> Result<(PathBuf, String)> {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read `{}`", path.display()))?;
                Ok((path.to_path_buf(), content))
            })
            .transpose()?;
        Ok((argv, merged))
    })?;

    let mut out = stdout().lock();
    if as_json {
        let entry = merged
            .as_ref()
            .map(|(path, content)| json!({ "path": path, "content": content }));
        let value = json!({
            "command": argv,
            "env": env,
            "cwd": config.get_root(),
            "merged_entry": entry,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        if let Some((path, content)) = &merged {
            writeln!(out, "{}", merged_entry_comment(path, content))?;
        }
        let mut vars: Vec<_> = env.iter().map(|(k, v)| format!("{k}={v} ")).collect();
        vars.sort();
        writeln!(out, "{}{}", vars.concat(), display_command(&argv))?;
    }
    Ok(())
}

/// Shell comment block describing a merged entry that no longer exists.
fn merged_entry_comment(path: &Path, content: &str) -> String {
    let mut out = format!("# {} (removed on exit):", path.display());
    for line in content.lines() {
        out.push_str("\n#");
        if !line.is_empty() {
            out.push(' ');
            out.push_str(line);
        }
    }
    out
}

/// Print resolved contributor stylesheets, one per line.
pub fn print_contributors(config: &ProjectConfig) -> Result<()> {
    let mut out = stdout().lock();
    for path in config.commands().contributor_stylesheets() {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}
