//! Parse-error taxonomy for `.gancho.yml`
//!
//! Configuration errors are reported once, terminate the parse, and are never
//! partially applied: no [`gancho_core::Hook`] is returned on failure.

use gancho_core::HookError;
use thiserror::Error;

/// Errors produced while turning raw configuration text into the hook model
#[derive(Error, Debug)]
pub enum ParseError {
    /// The text is not well-formed YAML
    #[error(".gancho.yml is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document deserialized to nothing
    #[error(".gancho.yml is empty")]
    EmptyConfig,

    /// The top-level value is not a key/value mapping
    #[error(".gancho.yml is not a mapping of hooks")]
    NotAMapping,

    /// Discovery found no hook sections at all
    #[error("there isn't any hook in .gancho.yml")]
    NoHooksFound,

    /// A hook section exists but its structure is defective
    ///
    /// Wraps the first [`HookError`] encountered so the message names the
    /// malformed hook and entry.
    #[error("invalid hook in .gancho.yml: {0}")]
    InvalidHook(#[from] HookError),
}
