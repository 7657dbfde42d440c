//! Git repository discovery
//!
//! Every gancho command runs from inside a work tree; this resolves the
//! directories the commands need.

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

/// The repository directories gancho operates on
pub struct GitDirs {
    /// Root of the work tree, where `.gancho.yml` lives
    pub work_dir: PathBuf,
    /// The `.git/hooks` directory shims are installed into
    pub hooks_dir: PathBuf,
}

impl GitDirs {
    /// Discover the repository containing the current directory
    pub fn discover() -> Result<Self> {
        Self::discover_from(Path::new("."))
    }

    /// Discover the repository containing `start`
    pub fn discover_from(start: &Path) -> Result<Self> {
        let repo = git2::Repository::discover(start)
            .context("Not a git repository (gancho must run inside a work tree)")?;

        let work_dir = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| anyhow!("Bare repositories have no work tree to hook into"))?;
        let hooks_dir = repo.path().join("hooks");

        tracing::debug!(
            work_dir = %work_dir.display(),
            hooks_dir = %hooks_dir.display(),
            "Discovered git repository"
        );

        Ok(Self {
            work_dir,
            hooks_dir,
        })
    }

    /// Path of the configuration file in this repository
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join(gancho_config::CONFIG_FILE_NAME)
    }
}
