//! Command lifecycle events and the presenter seam
//!
//! The handler emits [`CommandState`] transitions and raw output text to an
//! abstract [`Presenter`]. The presenter owns formatting and coloring; it has
//! no effect on exit codes. Tests substitute a recording implementation.

use gancho_core::Command;
use std::fmt;

/// A transient event describing one command's lifecycle
///
/// Created and discarded per command, per run; the `Error` and `NotCritical`
/// variants carry the command's exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState<'a> {
    /// The command is about to execute
    Running(&'a Command),
    /// The command exited with status 0
    Success(&'a Command),
    /// The command failed and halts the hook
    Error(&'a Command, i32),
    /// The command failed but was configured as non-critical
    NotCritical(&'a Command, i32),
}

impl fmt::Display for CommandState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandState::Running(command) => write!(f, "Running {command}"),
            CommandState::Success(command) => {
                write!(f, "{command} has been successfully executed")
            }
            CommandState::Error(command, code) => {
                write!(f, "{command} has failed with error {code}")
            }
            CommandState::NotCritical(command, code) => {
                write!(f, "{command} has failed with error {code}")
            }
        }
    }
}

/// Output sink for hook execution reporting
pub trait Presenter {
    /// Report a command lifecycle transition
    fn state(&mut self, state: &CommandState<'_>);

    /// Forward raw command output
    ///
    /// `newline` tells the sink whether to append a trailing line break;
    /// streamed chunks that already embed one are passed with `false`.
    fn output(&mut self, text: &str, newline: bool);
}
