//! Subprocess execution
//!
//! Commands run through `sh -c` via duct, synchronously. Two modes exist:
//! a captured mode that returns combined stdout/stderr after exit, and a
//! progress mode that hands output chunks to a callback as they arrive.

use std::io::Read;

/// Exit status reported when the subprocess could not be spawned at all
///
/// The shell convention for "command not found"; spawn failures travel
/// through the same [`ShellResult`] channel as ordinary exits.
const SPAWN_FAILURE_STATUS: i32 = 127;

/// Outcome of running one shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellResult {
    /// Exit status; a signal-terminated process reports 1
    pub status: i32,
    /// Combined stdout/stderr text the executor captured
    pub output: String,
}

impl ShellResult {
    /// Create a result from a status code and captured output
    pub fn new(status: i32, output: impl Into<String>) -> Self {
        Self {
            status,
            output: output.into(),
        }
    }

    /// Whether the command exited cleanly
    pub fn is_success(&self) -> bool {
        self.status == 0
    }
}

/// Capability of running a command line in a subprocess
///
/// The handler drives this per command; tests substitute a fake that
/// records invocations instead of spawning processes.
pub trait Shell {
    /// Run the command, blocking until it exits, capturing its output
    fn execute(&self, command: &str) -> ShellResult;

    /// Run the command, forwarding output chunks to `on_progress` as the
    /// subprocess produces them
    fn execute_with_progress(
        &self,
        command: &str,
        on_progress: &mut dyn FnMut(&str),
    ) -> ShellResult;
}

/// The real shell, executing through `sh -c`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn execute(&self, command: &str) -> ShellResult {
        tracing::debug!(command, "Executing command");

        match duct::cmd("sh", ["-c", command])
            .unchecked()
            .stderr_to_stdout()
            .stdout_capture()
            .run()
        {
            Ok(output) => ShellResult::new(
                output.status.code().unwrap_or(1),
                String::from_utf8_lossy(&output.stdout).into_owned(),
            ),
            Err(e) => ShellResult::new(SPAWN_FAILURE_STATUS, e.to_string()),
        }
    }

    fn execute_with_progress(
        &self,
        command: &str,
        on_progress: &mut dyn FnMut(&str),
    ) -> ShellResult {
        tracing::debug!(command, "Executing command with live output");

        let mut reader = match duct::cmd("sh", ["-c", command])
            .unchecked()
            .stderr_to_stdout()
            .reader()
        {
            Ok(reader) => reader,
            Err(e) => return ShellResult::new(SPAWN_FAILURE_STATUS, e.to_string()),
        };

        let mut output = String::new();
        let mut buf = [0u8; 4096];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    let chunk = String::from_utf8_lossy(&buf[..n]);
                    on_progress(&chunk);
                    output.push_str(&chunk);
                }
                Err(e) => return ShellResult::new(SPAWN_FAILURE_STATUS, e.to_string()),
            }
        }

        // The reader waits on the child once it reaches EOF
        match reader.try_wait() {
            Ok(Some(result)) => ShellResult::new(result.status.code().unwrap_or(1), output),
            Ok(None) => ShellResult::new(1, output),
            Err(e) => ShellResult::new(SPAWN_FAILURE_STATUS, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_reports_exit_status() {
        let shell = SystemShell;
        assert_eq!(shell.execute("exit 0").status, 0);
        assert_eq!(shell.execute("exit 7").status, 7);
    }

    #[test]
    fn test_execute_captures_combined_output() {
        let shell = SystemShell;

        let result = shell.execute("echo out; echo err 1>&2");
        assert_eq!(result.status, 0);
        assert!(result.output.contains("out"));
        assert!(result.output.contains("err"));
    }

    #[test]
    fn test_execute_with_progress_streams_chunks() {
        let shell = SystemShell;
        let mut seen = String::new();

        let result = shell.execute_with_progress("printf 'a\\nb\\n'; exit 3", &mut |chunk| {
            seen.push_str(chunk);
        });

        assert_eq!(result.status, 3);
        assert_eq!(seen, "a\nb\n");
        assert_eq!(result.output, seen);
    }

    #[test]
    fn test_is_success() {
        assert!(ShellResult::new(0, "").is_success());
        assert!(!ShellResult::new(1, "").is_success());
    }
}
