//! External command execution utilities.
//!
//! Provides a Builder-based API for running the Tailwind executable with
//! proper output handling and PTY support.
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! // One-shot build with colored output captured through a PTY
//! Cmd::from_slice(&args)
//!     .cwd(root)
//!     .envs(&env)
//!     .pty(true)
//!     .run()?;
//!
//! // Long-running watch process sharing our terminal
//! let status = Cmd::from_slice(&args).cwd(root).status()?;
//! ```

use crate::log;
use anyhow::{Context, Result};
use portable_pty::{CommandBuilder, NativePtySystem, PtySize, PtySystem};
use regex::Regex;
use std::{
    ffi::{OsStr, OsString},
    io::Read,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Output},
    sync::OnceLock,
};

// ============================================================================
// Builder API
// ============================================================================

/// Command builder for external process execution.
#[derive(Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    envs: Vec<(String, String)>,
    use_pty: bool,
    filter: Option<&'static FilterRule>,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    /// Create from a command array (e.g., `["tailwindcss", "-i", "in.css"]`).
    pub fn from_slice<S: AsRef<OsStr>>(cmd: &[S]) -> Self {
        let mut iter = cmd.iter();
        let program = iter
            .next()
            .map(|s| s.as_ref().to_owned())
            .unwrap_or_default();
        let args: Vec<_> = iter.map(|s| s.as_ref().to_owned()).collect();
        Self {
            program,
            args,
            ..Default::default()
        }
    }

    /// Add a single argument.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        let arg = arg.as_ref();
        if !arg.is_empty() {
            self.args.push(arg.to_owned());
        }
        self
    }

    /// Set working directory.
    pub fn cwd<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_owned());
        self
    }

    /// Set environment variables for the subprocess.
    pub fn envs<K, V, I>(mut self, vars: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in vars {
            self.envs.push((k.as_ref().to_owned(), v.as_ref().to_owned()));
        }
        self
    }

    /// Enable PTY (pseudo-terminal) mode.
    ///
    /// PTY allows commands to behave as if running in a real terminal,
    /// enabling colored output.
    pub fn pty(mut self, enable: bool) -> Self {
        self.use_pty = enable;
        self
    }

    /// Set output filter for logging.
    pub fn filter(mut self, filter: &'static FilterRule) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Execute the command to completion and return its captured output.
    pub fn run(self) -> Result<Output> {
        let filter = self.filter.unwrap_or(&EMPTY_FILTER);

        if self.use_pty {
            self.run_with_pty(filter)
        } else {
            self.run_simple(filter)
        }
    }

    /// Execute the command with inherited stdio and wait for it to exit.
    ///
    /// Used for long-running processes (watch mode) whose output should
    /// stream straight to the terminal.
    pub fn status(self) -> Result<ExitStatus> {
        let name = self.program_name();
        self.command()
            .status()
            .with_context(|| format!("Failed to execute `{name}`"))
    }

    /// Get the program name for error messages.
    fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    /// Build a `std::process::Command` from this builder.
    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).envs(self.envs.iter().cloned());

        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Simple execution without PTY.
    fn run_simple(self, filter: &'static FilterRule) -> Result<Output> {
        let name = self.program_name();
        let output = self
            .command()
            .output()
            .with_context(|| format!("Failed to execute `{name}`"))?;

        log_output(&name, &output, filter)?;
        Ok(output)
    }

    /// Execution with PTY support.
    fn run_with_pty(self, filter: &'static FilterRule) -> Result<Output> {
        let name = self.program_name();

        let mut cmd_builder = CommandBuilder::new(&self.program);
        cmd_builder.args(&self.args);

        for (k, v) in &self.envs {
            cmd_builder.env(k, v);
        }

        if let Some(dir) = &self.cwd {
            cmd_builder.cwd(dir);
        }

        let pty_system = NativePtySystem::default();
        let pair = pty_system.openpty(PtySize {
            rows: 24,
            cols: 80,
            pixel_width: 0,
            pixel_height: 0,
        })?;

        let mut child = pair
            .slave
            .spawn_command(cmd_builder)
            .with_context(|| format!("Failed to spawn `{name}`"))?;
        drop(pair.slave);

        // Read output in separate thread (PTY blocks until EOF)
        let mut reader = pair.master.try_clone_reader()?;
        let output_handle = std::thread::spawn(move || {
            let mut output = String::new();
            let _ = reader.read_to_string(&mut output);
            output
        });

        let status = child.wait()?;
        drop(pair.master);

        let output_str = output_handle
            .join()
            .map_err(|_| anyhow::anyhow!("Failed to join output reader thread"))?;

        if !status.success() {
            anyhow::bail!("Command `{name}` failed: {status:?}\n{output_str}");
        }

        filter.log(&name, &output_str);

        // Convert to std::process::Output
        #[cfg(unix)]
        #[allow(clippy::cast_possible_wrap)]
        let std_status = {
            use std::os::unix::process::ExitStatusExt;
            std::process::ExitStatus::from_raw((status.exit_code() as i32) << 8)
        };
        #[cfg(windows)]
        let std_status = {
            use std::os::windows::process::ExitStatusExt;
            std::process::ExitStatus::from_raw(status.exit_code())
        };

        Ok(Output {
            status: std_status,
            stdout: output_str.into_bytes(),
            stderr: Vec::new(),
        })
    }
}

// ============================================================================
// Output Filtering
// ============================================================================

/// Filter rule for command output logging.
///
/// Used to reduce noise by skipping known banner lines.
pub struct FilterRule {
    /// Prefixes to skip when logging output.
    pub skip_prefixes: &'static [&'static str],
}

impl FilterRule {
    /// Create a new filter rule.
    pub const fn new(skip_prefixes: &'static [&'static str]) -> Self {
        Self { skip_prefixes }
    }

    /// Check if a line should be skipped.
    fn should_skip(&self, line: &str) -> bool {
        line.is_empty() || self.skip_prefixes.iter().any(|p| line.starts_with(p))
    }

    /// Log output lines that pass the filter.
    pub fn log(&self, name: &str, output: &str) {
        let lines: Vec<_> = output
            .lines()
            .filter(|line| {
                let plain = strip_ansi(line);
                let trimmed = plain.trim();
                !trimmed.is_empty() && !self.should_skip(trimmed)
            })
            .collect();

        if !lines.is_empty() {
            log!(name; "{}", lines.join("\n"));
        }
    }
}

/// Empty filter (no skipping).
pub const EMPTY_FILTER: FilterRule = FilterRule::new(&[]);

/// Tailwind prints a version banner and timing line on every run.
pub const TAILWIND_FILTER: FilterRule = FilterRule::new(&["≈ tailwindcss", "Done in"]);

// ============================================================================
// Helpers
// ============================================================================

/// Strip ANSI escape codes from string.
fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());
    re.replace_all(s, "")
}

/// Log command output, returning error on failure.
fn log_output(name: &str, output: &Output, filter: &'static FilterRule) -> Result<()> {
    if !output.status.success() {
        anyhow::bail!(format_error(name, output, filter));
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    filter.log(name, stderr.trim());
    Ok(())
}

/// Format error message for failed command.
fn format_error(name: &str, output: &Output, filter: &'static FilterRule) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let error_msg = filter
        .skip_prefixes
        .iter()
        .fold(stderr.trim(), |s, p| s.trim_start_matches(p).trim_start());

    let mut msg = format!("Command `{name}` failed with {}\n", output.status);
    if !error_msg.is_empty() {
        msg.push_str(error_msg);
    }

    let stdout_trimmed = stdout.trim();
    if !stdout_trimmed.is_empty() {
        msg.push_str("\nStdout:\n");
        msg.push_str(stdout_trimmed);
    }
    msg
}

// ============================================================================
// Tests
// ============================================================================
