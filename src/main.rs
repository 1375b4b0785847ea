//! twbuild - compile Tailwind CSS for an application with the native executable.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod logger;
mod tailwind;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose());

    let config = ProjectConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { build_args } => cli::build::build(&config, build_args),
        Commands::Watch {
            build_args,
            watch_args,
        } => cli::watch::watch(&config, build_args, watch_args),
        Commands::Print {
            build_args,
            watch_args,
            watch,
            json,
        } => cli::print::print_command(&config, build_args, watch_args, *watch, *json),
        Commands::Contributors => cli::print::print_contributors(&config),
        Commands::Check => cli::check::check(&config),
    }
}
