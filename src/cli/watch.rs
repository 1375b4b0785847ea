//! Continuous compile.

use super::common::{display_command, ensure_output_dir, in_foreground, with_commands};
use super::{BuildArgs, WatchArgs};
use crate::config::ProjectConfig;
use crate::core::is_shutdown;
use crate::tailwind::command_env;
use crate::utils::exec::Cmd;
use crate::{debug, log};
use anyhow::{Context, Result, bail};

/// Run tailwindcss in watch mode until it exits or Ctrl+C.
pub fn watch(config: &ProjectConfig, build_args: &BuildArgs, watch_args: &WatchArgs) -> Result<()> {
    with_commands(config, |commands| {
        let argv = commands
            .watch_command(&watch_args.watch_options(build_args))
            .context("Failed to prepare tailwind input")?;
        ensure_output_dir(&commands.paths().output())?;

        debug!("watch"; "{}", display_command(&argv));
        log!("watch"; "watching for changes (Ctrl+C to stop)");

        let env = command_env(build_args.verbose);
        let status = in_foreground(|| {
            Cmd::from_slice(&argv)
                .cwd(commands.root())
                .envs(&env)
                .status()
        })?;

        if status.success() || is_shutdown() {
            log!("watch"; "stopped");
            Ok(())
        } else {
            bail!("`{}` exited with {status}", argv[0])
        }
    })
}
