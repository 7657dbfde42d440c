//! In-memory hook model
//!
//! A [`Hook`] owns the ordered commands configured for one git hook type.
//! The model is built once at parse time by `gancho-config` and is read-only
//! afterwards; it does not outlive a single hook invocation.

use crate::error::UnknownHookType;
use std::fmt;
use std::str::FromStr;

/// The closed set of git hook categories gancho can manage
///
/// The variants mirror the standard client-side hooks git invokes. The raw
/// names double as configuration keys in `.gancho.yml` and as file names
/// under `.git/hooks/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookType {
    /// `applypatch-msg`
    ApplypatchMsg,
    /// `pre-applypatch`
    PreApplypatch,
    /// `post-applypatch`
    PostApplypatch,
    /// `pre-commit`
    PreCommit,
    /// `prepare-commit-msg`
    PrepareCommitMsg,
    /// `commit-msg`
    CommitMsg,
    /// `post-commit`
    PostCommit,
    /// `pre-rebase`
    PreRebase,
    /// `post-checkout`
    PostCheckout,
    /// `post-merge`
    PostMerge,
    /// `pre-push`
    PrePush,
}

impl HookType {
    /// All known hook types, in git's documentation order
    pub fn all() -> [HookType; 11] {
        [
            HookType::ApplypatchMsg,
            HookType::PreApplypatch,
            HookType::PostApplypatch,
            HookType::PreCommit,
            HookType::PrepareCommitMsg,
            HookType::CommitMsg,
            HookType::PostCommit,
            HookType::PreRebase,
            HookType::PostCheckout,
            HookType::PostMerge,
            HookType::PrePush,
        ]
    }

    /// The raw hook name as git knows it
    pub fn as_str(self) -> &'static str {
        match self {
            HookType::ApplypatchMsg => "applypatch-msg",
            HookType::PreApplypatch => "pre-applypatch",
            HookType::PostApplypatch => "post-applypatch",
            HookType::PreCommit => "pre-commit",
            HookType::PrepareCommitMsg => "prepare-commit-msg",
            HookType::CommitMsg => "commit-msg",
            HookType::PostCommit => "post-commit",
            HookType::PreRebase => "pre-rebase",
            HookType::PostCheckout => "post-checkout",
            HookType::PostMerge => "post-merge",
            HookType::PrePush => "pre-push",
        }
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookType {
    type Err = UnknownHookType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookType::all()
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| UnknownHookType(s.to_string()))
    }
}

/// One unit of work inside a hook
///
/// Holds the shell command line plus the optional per-command overrides.
/// `verbose` falls back to the hook-level default when unset; `critical`
/// defaults to `true` (a failing command halts the hook).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The shell command line; non-empty by construction at parse time
    pub run: String,
    /// Stream output live instead of capturing it
    pub verbose: Option<bool>,
    /// Whether a non-zero exit halts the whole hook
    pub critical: Option<bool>,
}

impl Command {
    /// Create a command with no per-command overrides
    pub fn new(run: impl Into<String>) -> Self {
        Self {
            run: run.into(),
            verbose: None,
            critical: None,
        }
    }

    /// Create a command with explicit overrides
    pub fn with_options(
        run: impl Into<String>,
        verbose: Option<bool>,
        critical: Option<bool>,
    ) -> Self {
        Self {
            run: run.into(),
            verbose,
            critical,
        }
    }

    /// Effective verbosity given the hook-level default
    pub fn is_verbose(&self, hook_default: bool) -> bool {
        self.verbose.unwrap_or(hook_default)
    }

    /// Effective criticality; unset means critical
    pub fn is_critical(&self) -> bool {
        self.critical.unwrap_or(true)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.run)
    }
}

/// The ordered, non-empty command list for one hook type
///
/// The parser rejects hooks with zero commands, so a constructed `Hook` is
/// always runnable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    /// Which git hook these commands belong to
    pub hook_type: HookType,
    /// Hook-level verbosity default, `false` unless set in configuration
    pub verbose: bool,
    /// Commands in declared order
    pub commands: Vec<Command>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_type_round_trip() {
        for hook in HookType::all() {
            let parsed: HookType = hook.as_str().parse().unwrap();
            assert_eq!(parsed, hook);
            assert_eq!(parsed.to_string(), hook.as_str());
        }
    }

    #[test]
    fn test_hook_type_unknown() {
        let err = "post-push".parse::<HookType>().unwrap_err();
        assert_eq!(err, UnknownHookType("post-push".to_string()));
    }

    #[test]
    fn test_command_critical_defaults_to_true() {
        let command = Command::new("cargo test");
        assert!(command.is_critical());

        let relaxed = Command::with_options("cargo fmt --check", None, Some(false));
        assert!(!relaxed.is_critical());
    }

    #[test]
    fn test_command_verbose_inherits_hook_default() {
        let command = Command::new("cargo test");
        assert!(command.is_verbose(true));
        assert!(!command.is_verbose(false));

        let overridden = Command::with_options("cargo test", Some(false), None);
        assert!(!overridden.is_verbose(true));
    }

    #[test]
    fn test_command_display_is_the_command_line() {
        let command = Command::new("cargo fmt --check");
        assert_eq!(command.to_string(), "cargo fmt --check");
    }
}
