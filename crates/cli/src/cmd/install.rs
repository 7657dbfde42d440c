//! Install hook shims into `.git/hooks`
//!
//! For every hook section found in `.gancho.yml` (or every known hook with
//! `--all`), writes a thin shim that calls back into `gancho run`. Existing
//! hook files are preserved: the shim line is appended once, never
//! duplicated, so hand-written hooks keep working.

use crate::git::GitDirs;
use anyhow::{Context, Result};
use clap::Args;
use gancho_core::HookType;
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

/// Arguments for `gancho install`
#[derive(Debug, Args)]
pub struct InstallCommand {
    /// Install shims for every known hook type, ignoring .gancho.yml
    #[arg(long)]
    pub all: bool,
}

impl InstallCommand {
    /// Discover hooks and write their shims
    pub fn execute(&self) -> Result<()> {
        let repo = GitDirs::discover()?;

        let hooks: Vec<HookType> = if self.all {
            HookType::all().to_vec()
        } else {
            let config_path = repo.config_path();
            let text = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            // Shallow discovery on purpose: a malformed sibling section must
            // not block installing the hooks that are fine
            gancho_config::available_hooks(&text)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        };

        fs::create_dir_all(&repo.hooks_dir)
            .with_context(|| format!("Failed to create {}", repo.hooks_dir.display()))?;

        for hook in &hooks {
            install_shim(&repo.hooks_dir, *hook)?;
            println!("{} installed {}", "✔".green(), hook);
        }

        Ok(())
    }
}

/// The line an installed shim uses to call back into gancho
pub(crate) fn shim_line(hook: HookType) -> String {
    format!("gancho run {hook}")
}

/// Write or extend the hook file for one hook type
pub(crate) fn install_shim(hooks_dir: &Path, hook: HookType) -> Result<()> {
    let path = hooks_dir.join(hook.as_str());
    let line = shim_line(hook);

    if path.exists() {
        let mut content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if content.lines().any(|existing| existing.trim() == line) {
            tracing::debug!(hook = %hook, "Shim already installed");
            return Ok(());
        }

        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&line);
        content.push('\n');
        fs::write(&path, content)
            .with_context(|| format!("Failed to update {}", path.display()))?;
    } else {
        fs::write(&path, format!("#!/bin/sh\n{line}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    // Git only runs executable hooks
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }

    tracing::debug!(hook = %hook, path = %path.display(), "Installed hook shim");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_fresh_shim_has_shebang_and_run_line() {
        let dir = tempfile::tempdir().unwrap();
        install_shim(dir.path(), HookType::PreCommit).unwrap();

        let path = dir.path().join("pre-commit");
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "#!/bin/sh\ngancho run pre-commit\n");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111);
        }
    }

    #[test]
    fn test_existing_hook_is_appended_not_clobbered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pre-push");
        fs::write(&path, "#!/bin/sh\necho custom hook\n").unwrap();

        install_shim(dir.path(), HookType::PrePush).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "#!/bin/sh\necho custom hook\ngancho run pre-push\n");
    }

    #[test]
    fn test_install_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        install_shim(dir.path(), HookType::CommitMsg).unwrap();
        install_shim(dir.path(), HookType::CommitMsg).unwrap();

        let content = fs::read_to_string(dir.path().join("commit-msg")).unwrap();
        assert_eq!(content.matches("gancho run commit-msg").count(), 1);
    }
}
