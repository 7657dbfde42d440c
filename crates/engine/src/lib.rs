//! Hook execution engine for gancho
//!
//! Runs the commands of a parsed hook strictly sequentially, with
//! per-command verbosity and criticality, and reports every lifecycle
//! transition to a presenter.
//!
//! ## Module Organization
//!
//! - `shell`: subprocess execution (captured and live-streaming modes)
//! - `report`: command lifecycle events and the presenter seam
//! - `handler`: the orchestrator tying hook, shell, and presenter together

pub mod handler;
pub mod report;
pub mod shell;

// Re-export main types for convenience
pub use handler::{EnvReader, HookHandler, SKIP_ENV_VAR, SystemEnv};
pub use report::{CommandState, Presenter};
pub use shell::{Shell, ShellResult, SystemShell};
