//! Tailwind CLI argument assembly.
//!
//! Tailwind CLI arguments: `executable -i input -o output [--minify] [--postcss path] [-w [always] [-p]]`

use super::entry::MergedEntry;
use super::{ContributorSource, ProjectPaths, contributor};
use crate::debug;
use rustc_hash::FxHashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable enabling verbose output in the executable.
pub const DEBUG_ENV: &str = "DEBUG";

/// Settings that shape the generated command.
#[derive(Debug, Clone)]
pub struct TailwindSettings {
    /// Executable name or path.
    pub executable: String,
    /// Directory to look for the executable in before `PATH`.
    pub exe_path: Option<PathBuf>,
    /// Host pipeline already compresses CSS, so never pass `--minify`.
    pub css_compressor: bool,
    /// Debug override. Presence forces debug output whatever its value.
    pub debug_override: Option<String>,
    /// Names of contributors allowed to add stylesheets.
    pub engines: Vec<String>,
}

impl Default for TailwindSettings {
    fn default() -> Self {
        Self {
            executable: "tailwindcss".into(),
            exe_path: None,
            css_compressor: false,
            debug_override: None,
            engines: Vec::new(),
        }
    }
}

/// Options for a one-shot compile.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Entry stylesheet. Defaults to [`Commands::entry_path`].
    pub input: Option<PathBuf>,
    /// Skip minification.
    pub debug: bool,
    /// Directory containing the executable, overriding the settings.
    pub exe_path: Option<PathBuf>,
}

/// Options for watch mode.
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    pub compile: CompileOptions,
    /// Keep watching after stdin closes.
    pub always: bool,
    /// Use polling instead of filesystem events.
    pub poll: bool,
}

/// Command builder for one project.
///
/// Owns the merged entry file, so keep it alive for as long as the spawned
/// executable may read its input.
pub struct Commands {
    root: PathBuf,
    settings: TailwindSettings,
    source: Box<dyn ContributorSource>,
    merged: MergedEntry,
}

impl Commands {
    pub fn new(
        root: impl Into<PathBuf>,
        settings: TailwindSettings,
        source: impl ContributorSource + 'static,
    ) -> Self {
        Self {
            root: root.into(),
            settings,
            source: Box::new(source),
            merged: MergedEntry::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &TailwindSettings {
        &self.settings
    }

    pub fn paths(&self) -> ProjectPaths<'_> {
        ProjectPaths::new(&self.root)
    }

    /// Path of the merged entry file, if one has been written.
    pub fn tempfile_path(&self) -> Option<&Path> {
        self.merged.path()
    }

    /// Stylesheets of allow-listed contributors, in registration order.
    pub fn contributor_stylesheets(&self) -> Vec<PathBuf> {
        contributor::stylesheets(&self.paths(), self.source.as_ref(), &self.settings.engines)
    }

    /// Resolve the stylesheet Tailwind should compile.
    ///
    /// Without contributors this is the primary stylesheet. Otherwise the
    /// merged entry is (re)written and its path returned.
    pub fn entry_path(&mut self) -> io::Result<PathBuf> {
        let primary = self.paths().primary_stylesheet();
        let contributors = self.contributor_stylesheets();

        if contributors.is_empty() {
            return Ok(primary);
        }

        let path = self.merged.write(&contributors, &primary)?;
        debug!("entry"; "merged {} contributor stylesheet(s) into {}", contributors.len(), path.display());
        Ok(path)
    }

    /// Whether output is left unminified.
    ///
    /// A present debug override beats the explicit flag.
    pub fn is_debug(&self, explicit: bool) -> bool {
        self.settings.debug_override.is_some() || explicit
    }

    /// Arguments for a one-shot compile.
    pub fn compile_command(&mut self, options: &CompileOptions) -> io::Result<Vec<String>> {
        let debug = self.is_debug(options.debug);
        let input = match &options.input {
            Some(input) => input.clone(),
            None => self.entry_path()?,
        };
        let paths = self.paths();

        let mut command = vec![
            self.executable(options.exe_path.as_deref()),
            "-i".into(),
            input.display().to_string(),
            "-o".into(),
            paths.output().display().to_string(),
        ];

        if !(debug || self.settings.css_compressor) {
            command.push("--minify".into());
        }

        let postcss = paths.postcss_config();
        if postcss.exists() {
            command.extend(["--postcss".into(), postcss.display().to_string()]);
        }

        Ok(command)
    }

    /// Arguments for watch mode: the compile arguments plus watch flags.
    pub fn watch_command(&mut self, options: &WatchOptions) -> io::Result<Vec<String>> {
        let mut command = self.compile_command(&options.compile)?;
        command.push("-w".into());
        if options.always {
            command.push("always".into());
        }
        if options.poll {
            command.push("-p".into());
        }
        Ok(command)
    }

    /// Delete the merged entry file. Safe to call repeatedly.
    pub fn remove_tempfile(&mut self) -> io::Result<()> {
        self.merged.dispose()
    }

    /// Locate the executable.
    ///
    /// Lookup order: `exe_path` argument, configured `exe_path`, `PATH`.
    /// Falls back to the bare name so a missing executable is reported when
    /// it is spawned.
    pub fn executable(&self, exe_path: Option<&Path>) -> String {
        let name = &self.settings.executable;

        if let Some(dir) = exe_path.or(self.settings.exe_path.as_deref()) {
            return dir.join(name).display().to_string();
        }

        which::which(name)
            .map(|path| path.display().to_string())
            .unwrap_or_else(|_| name.clone())
    }
}

/// Extra environment for the executable.
pub fn command_env(verbose: bool) -> FxHashMap<String, String> {
    let mut env = FxHashMap::default();
    if verbose {
        env.insert(DEBUG_ENV.into(), "1".into());
    }
    env
}
