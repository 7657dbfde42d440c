//! Run the commands configured for one hook type
//!
//! Invoked by the installed shims when git fires a hook. Loads
//! `.gancho.yml` from the work tree, parses the named hook, and drives the
//! engine; the returned status becomes the process exit code so git sees
//! exactly what the first critical-failing command reported.

use crate::git::GitDirs;
use crate::presenter::ConsolePresenter;
use anyhow::{Context, Result};
use clap::Args;
use gancho_core::HookType;
use gancho_engine::{HookHandler, SystemEnv, SystemShell};
use std::fs;

/// Arguments for `gancho run`
#[derive(Debug, Args)]
pub struct RunCommand {
    /// The hook to run (e.g. pre-commit, pre-push)
    #[arg(value_name = "HOOK")]
    pub hook_type: HookType,
}

impl RunCommand {
    /// Parse the hook and execute it, returning the exit code for git
    pub fn execute(&self) -> Result<i32> {
        let repo = GitDirs::discover()?;
        let config_path = repo.config_path();
        let text = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let hook = gancho_config::parse_hook(self.hook_type, &text)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let shell = SystemShell;
        let env = SystemEnv;
        let mut presenter = ConsolePresenter;
        let code = HookHandler::new(&hook, &shell, &env).run(&mut presenter);

        tracing::debug!(hook = %self.hook_type, code, "Hook run finished");
        Ok(code)
    }
}
