//! Remove gancho shims from `.git/hooks`
//!
//! Strips the gancho run line from every hook file. A file that held
//! nothing but the shim is deleted; a hand-written hook that gancho was
//! appended to keeps its other lines.

use crate::cmd::install::shim_line;
use crate::git::GitDirs;
use anyhow::{Context, Result};
use gancho_core::HookType;
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

/// Remove shims for every known hook type
pub fn execute() -> Result<()> {
    let repo = GitDirs::discover()?;

    for hook in HookType::all() {
        if remove_shim(&repo.hooks_dir, hook)? {
            println!("{} removed {}", "✔".green(), hook);
        }
    }

    Ok(())
}

/// Strip the shim line from one hook file; returns whether anything changed
pub(crate) fn remove_shim(hooks_dir: &Path, hook: HookType) -> Result<bool> {
    let path = hooks_dir.join(hook.as_str());
    if !path.exists() {
        return Ok(false);
    }

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let line = shim_line(hook);
    if !content.lines().any(|existing| existing.trim() == line) {
        return Ok(false);
    }

    let remaining: Vec<&str> = content
        .lines()
        .filter(|existing| existing.trim() != line)
        .collect();

    let only_boilerplate = remaining
        .iter()
        .all(|l| l.trim().is_empty() || l.starts_with("#!"));

    if only_boilerplate {
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
        tracing::debug!(hook = %hook, "Removed shim file");
    } else {
        let mut kept = remaining.join("\n");
        kept.push('\n');
        fs::write(&path, kept)
            .with_context(|| format!("Failed to update {}", path.display()))?;
        tracing::debug!(hook = %hook, "Stripped shim line from existing hook");
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::cmd::install::install_shim;

    #[test]
    fn test_pure_shim_file_is_deleted() {
        let dir = tempfile::tempdir().unwrap();
        install_shim(dir.path(), HookType::PreCommit).unwrap();

        let changed = remove_shim(dir.path(), HookType::PreCommit).unwrap();

        assert!(changed);
        assert!(!dir.path().join("pre-commit").exists());
    }

    #[test]
    fn test_hand_written_hook_keeps_its_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pre-push");
        fs::write(&path, "#!/bin/sh\necho custom hook\n").unwrap();
        install_shim(dir.path(), HookType::PrePush).unwrap();

        let changed = remove_shim(dir.path(), HookType::PrePush).unwrap();

        assert!(changed);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "#!/bin/sh\necho custom hook\n");
    }

    #[test]
    fn test_untouched_hooks_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post-merge");
        fs::write(&path, "#!/bin/sh\necho not ours\n").unwrap();

        let changed = remove_shim(dir.path(), HookType::PostMerge).unwrap();

        assert!(!changed);
        assert!(path.exists());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!remove_shim(dir.path(), HookType::PreRebase).unwrap());
    }
}
