//! One-shot compile.

use super::BuildArgs;
use super::common::{display_command, ensure_output_dir, in_foreground, with_commands};
use crate::config::ProjectConfig;
use crate::tailwind::command_env;
use crate::utils::exec::{Cmd, TAILWIND_FILTER};
use crate::{debug, log};
use anyhow::{Context, Result};

/// Compile the stylesheet once.
pub fn build(config: &ProjectConfig, args: &BuildArgs) -> Result<()> {
    with_commands(config, |commands| {
        let argv = commands
            .compile_command(&args.compile_options())
            .context("Failed to prepare tailwind input")?;
        let output = commands.paths().output();
        ensure_output_dir(&output)?;

        debug!("build"; "{}", display_command(&argv));

        let env = command_env(args.verbose);
        in_foreground(|| {
            Cmd::from_slice(&argv)
                .cwd(commands.root())
                .envs(&env)
                .pty(true)
                .filter(&TAILWIND_FILTER)
                .run()
        })?;

        log!("build"; "wrote {}", output.display());
        Ok(())
    })
}
