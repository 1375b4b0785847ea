//! Command-line interface definitions.

use crate::config::DEFAULT_CONFIG;
use crate::tailwind::{CompileOptions, WatchOptions};
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Compile Tailwind CSS for an application
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compile the stylesheet once
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Recompile the stylesheet whenever sources change
    #[command(visible_alias = "w")]
    Watch {
        #[command(flatten)]
        build_args: BuildArgs,

        #[command(flatten)]
        watch_args: WatchArgs,
    },

    /// Print the command `build` or `watch` would run.
    ///
    /// A merged entry file, if needed, is removed again when twbuild exits.
    #[command(visible_alias = "p")]
    Print {
        #[command(flatten)]
        build_args: BuildArgs,

        #[command(flatten)]
        watch_args: WatchArgs,

        /// Print the watch command instead of the build command
        #[arg(short, long)]
        watch: bool,

        /// Print as JSON (command, environment and working directory)
        #[arg(long)]
        json: bool,
    },

    /// List contributor stylesheets merged into the build
    #[command(visible_alias = "c")]
    Contributors,

    /// Validate configuration and project layout
    Check,
}

/// Shared arguments for Build, Watch and Print commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Entry stylesheet (default: primary stylesheet, merged with contributors)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Skip minification
    #[arg(short, long)]
    pub debug: bool,

    /// Directory containing the tailwindcss executable
    #[arg(long = "exe-path", value_hint = clap::ValueHint::DirPath)]
    pub exe_path: Option<PathBuf>,

    /// Enable verbose output (also sets DEBUG=1 for tailwindcss)
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Watch-only arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct WatchArgs {
    /// Keep watching when stdin is closed
    #[arg(long)]
    pub always: bool,

    /// Poll for changes instead of using filesystem events
    #[arg(short, long)]
    pub poll: bool,
}

impl BuildArgs {
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            input: self.input.clone(),
            debug: self.debug,
            exe_path: self.exe_path.clone(),
        }
    }
}

impl WatchArgs {
    pub fn watch_options(&self, build_args: &BuildArgs) -> WatchOptions {
        WatchOptions {
            compile: build_args.compile_options(),
            always: self.always,
            poll: self.poll,
        }
    }
}

impl Cli {
    /// Whether `--verbose` was passed to the current command.
    pub const fn verbose(&self) -> bool {
        match &self.command {
            Commands::Build { build_args }
            | Commands::Watch { build_args, .. }
            | Commands::Print { build_args, .. } => build_args.verbose,
            Commands::Contributors | Commands::Check => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("twbuild").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_build() {
        let cli = parse(&["build", "--debug", "--exe-path", "/opt/bin"]);
        let Commands::Build { build_args } = &cli.command else {
            panic!("expected build");
        };
        let options = build_args.compile_options();
        assert!(options.debug);
        assert_eq!(options.exe_path, Some(PathBuf::from("/opt/bin")));
        assert!(options.input.is_none());
        assert_eq!(cli.config, PathBuf::from("twbuild.toml"));
    }

    #[test]
    fn test_parse_watch() {
        let cli = parse(&["watch", "--always", "-p", "-V"]);
        let Commands::Watch {
            build_args,
            watch_args,
        } = &cli.command
        else {
            panic!("expected watch");
        };
        let options = watch_args.watch_options(build_args);
        assert!(options.always);
        assert!(options.poll);
        assert!(!options.compile.debug);
        assert!(cli.verbose());
    }

    #[test]
    fn test_parse_print() {
        let cli = parse(&["-C", "config/tw.toml", "print", "-w", "--json", "-i", "in.css"]);
        let Commands::Print {
            build_args,
            watch,
            json,
            ..
        } = &cli.command
        else {
            panic!("expected print");
        };
        assert!(*watch);
        assert!(*json);
        assert_eq!(build_args.input, Some(PathBuf::from("in.css")));
        assert_eq!(cli.config, PathBuf::from("config/tw.toml"));
    }

    #[test]
    fn test_verbose_default() {
        assert!(!parse(&["check"]).verbose());
        assert!(!parse(&["build"]).verbose());
    }
}
