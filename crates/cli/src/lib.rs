//! Gancho CLI library
//!
//! This library contains all the CLI logic for gancho, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod git;
pub mod presenter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gancho - run project hooks when git fires them
#[derive(Parser)]
#[command(name = "gancho")]
#[command(about = "Manage your git hooks with gancho")]
#[command(version)]
#[command(long_about = "Manage your git hooks with gancho

Declare your hooks once in .gancho.yml, install thin shims into
.git/hooks/, and let gancho run the configured commands with
per-command verbosity and failure semantics.

Example .gancho.yml:
  pre-commit:
    - cargo fmt --check
    - run:
        command: cargo test
        verbose: true
  pre-push:
    - run:
        command: cargo audit
        critical: false

Set GANCHO_SKIP (any value) to bypass every hook once.")]
pub struct Cli {
    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "GANCHO_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the gancho CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Install hook shims into .git/hooks for the hooks in .gancho.yml
    Install(cmd::install::InstallCommand),

    /// Remove gancho shims from .git/hooks
    Uninstall,

    /// Run the commands configured for one hook type
    ///
    /// This is what the installed shims invoke; the process exits with the
    /// status of the first critical-failing command, or 0.
    Run(cmd::run::RunCommand),
}

/// Main entry point for the CLI logic
///
/// Returns the process exit code: `0` for management commands, the hook
/// handler's result for `run`.
pub fn run(cli: Cli) -> Result<i32> {
    gancho_config::logging::init(cli.verbose, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Install(install_cmd) => {
            install_cmd.execute()?;
            Ok(0)
        }
        Commands::Uninstall => {
            cmd::uninstall::execute()?;
            Ok(0)
        }
        Commands::Run(run_cmd) => run_cmd.execute(),
    }
}
