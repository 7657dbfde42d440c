//! Configuration parsing for gancho
//!
//! This crate handles:
//! - Parsing `.gancho.yml` into the validated hook model
//! - Discovering which hook sections a configuration defines
//! - Classified parse errors for user-authored configuration
//! - Logging initialization

pub mod error;
pub mod logging;
pub mod parser;

// Re-export structural errors from core so callers see the whole chain
pub use gancho_core::HookError;

pub use error::ParseError;
pub use parser::{available_hooks, parse_hook};

/// File name of the hook configuration, looked up in the repository root
pub const CONFIG_FILE_NAME: &str = ".gancho.yml";
