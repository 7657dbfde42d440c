//! Structural error types for the hook model
//!
//! These errors describe defects in user-authored hook configuration. The
//! parser in `gancho-config` wraps them so diagnostic messages keep the
//! original cause instead of flattening it to a string.

use crate::hook::HookType;
use thiserror::Error;

/// A structural defect found while building a [`crate::Hook`]
///
/// Variants carry the hook type they belong to so messages can point at the
/// malformed section, and `MissingCommand`/`InvalidEntry` additionally carry
/// a rendering of the offending list entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HookError {
    /// The hook key does not exist in the configuration document
    #[error("hook '{0}' is not defined")]
    NotFound(HookType),

    /// The hook key exists but its value is not a list of commands
    #[error("hook '{0}' is not a list of commands")]
    NotAList(HookType),

    /// The hook resolved to zero commands
    #[error("hook '{0}' defines no commands")]
    Empty(HookType),

    /// A `run:` entry without a `command` field
    #[error("hook '{0}' has an entry without a command: {1}")]
    MissingCommand(HookType, String),

    /// An entry whose shape or field types are not recognized
    #[error("hook '{0}' has an invalid entry: {1}")]
    InvalidEntry(HookType, String),
}

/// Returned when a string does not name a known git hook
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown hook type '{0}'")]
pub struct UnknownHookType(pub String);
