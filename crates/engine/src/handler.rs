//! Hook orchestration
//!
//! [`HookHandler`] consumes a parsed hook and a shell, runs each command in
//! declared order, classifies every outcome, and reports lifecycle events to
//! a presenter. Execution is strictly sequential by design: a command's side
//! effects are expected to be visible to the next one.

use crate::report::{CommandState, Presenter};
use crate::shell::{Shell, ShellResult};
use gancho_core::{Command, Hook};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that skips hook execution entirely
///
/// Checked by presence only; the value is never inspected.
pub const SKIP_ENV_VAR: &str = "GANCHO_SKIP";

/// Capability of answering whether an environment variable is present
///
/// The skip flag is process-wide ambient state; this seam lets tests inject
/// it instead of mutating the live environment.
pub trait EnvReader {
    /// Whether `name` is present in the environment, with any value
    fn is_set(&self, name: &str) -> bool;
}

/// Reads the live process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvReader for SystemEnv {
    fn is_set(&self, name: &str) -> bool {
        std::env::var_os(name).is_some()
    }
}

/// Sequential command runner for one hook invocation
///
/// In laconic (non-verbose) mode the subprocess output is redirected to two
/// fixed scratch files; on failure the handler drains them back to the
/// presenter so diagnostics are visible above the failure banner. In verbose
/// mode output streams live and no side-channel capture happens.
pub struct HookHandler<'a, S, E> {
    hook: &'a Hook,
    shell: &'a S,
    env: &'a E,
    stdout_file: PathBuf,
    stderr_file: PathBuf,
}

impl<'a, S, E> HookHandler<'a, S, E>
where
    S: Shell,
    E: EnvReader,
{
    /// Create a handler with the default scratch file locations
    pub fn new(hook: &'a Hook, shell: &'a S, env: &'a E) -> Self {
        Self {
            hook,
            shell,
            env,
            stdout_file: std::env::temp_dir().join("gancho_stdout"),
            stderr_file: std::env::temp_dir().join("gancho_stderr"),
        }
    }

    /// Override the laconic capture file paths
    pub fn with_capture_files(mut self, stdout_file: PathBuf, stderr_file: PathBuf) -> Self {
        self.stdout_file = stdout_file;
        self.stderr_file = stderr_file;
        self
    }

    /// Run every command of the hook in order
    ///
    /// Returns `0` on full success (non-critical failures included), or the
    /// exit status of the first critical-failing command. With the skip flag
    /// present nothing runs and nothing is reported.
    pub fn run(&self, presenter: &mut dyn Presenter) -> i32 {
        if self.env.is_set(SKIP_ENV_VAR) {
            tracing::debug!(hook = %self.hook.hook_type, "Skip flag present, not running hook");
            return 0;
        }

        tracing::debug!(
            hook = %self.hook.hook_type,
            commands = self.hook.commands.len(),
            "Running hook"
        );

        for command in &self.hook.commands {
            presenter.state(&CommandState::Running(command));
            let state = self.run_command(command, presenter);
            presenter.state(&state);

            if let CommandState::Error(_, code) = state {
                return code;
            }
        }

        0
    }

    /// Execute one command and classify its outcome
    fn run_command(
        &self,
        command: &'a Command,
        presenter: &mut dyn Presenter,
    ) -> CommandState<'a> {
        let verbose = command.is_verbose(self.hook.verbose);

        let result = if verbose {
            self.run_verbose(command, presenter)
        } else {
            self.run_laconic(command)
        };

        if result.is_success() {
            return CommandState::Success(command);
        }

        if !verbose {
            // Surface the captured diagnostics before the failure banner;
            // in verbose mode everything already streamed live.
            presenter.output(&result.output, true);
            if let Some(stdout) = drain_capture(&self.stdout_file) {
                presenter.output(&stdout, true);
            }
            if let Some(stderr) = drain_capture(&self.stderr_file) {
                presenter.output(&stderr, true);
            }
        }

        if command.is_critical() {
            CommandState::Error(command, result.status)
        } else {
            CommandState::NotCritical(command, result.status)
        }
    }

    fn run_verbose(&self, command: &Command, presenter: &mut dyn Presenter) -> ShellResult {
        self.shell
            .execute_with_progress(&command.run, &mut |chunk| {
                // A chunk with an embedded line break already carries its
                // own line structure
                presenter.output(chunk, !chunk.contains('\n'));
            })
    }

    fn run_laconic(&self, command: &Command) -> ShellResult {
        let redirected = format!(
            "{} >{} 2>{}",
            command.run,
            self.stdout_file.display(),
            self.stderr_file.display()
        );
        self.shell.execute(&redirected)
    }
}

/// Read and delete one capture file, best-effort
///
/// A missing or unreadable file is "no content", never an error; the file is
/// removed either way so stale output cannot leak into a later command.
fn drain_capture(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok();
    let _ = fs::remove_file(path);
    content
}
