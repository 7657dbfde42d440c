//! Core types for gancho
//!
//! This is the foundation crate that all other gancho crates depend on.
//! It provides:
//! - The hook data model (`HookType`, `Command`, `Hook`)
//! - Structural error types for hook validation
//!
//! This crate has no dependencies on other gancho crates.

pub mod error;
pub mod hook;

pub use error::{HookError, UnknownHookType};
pub use hook::{Command, Hook, HookType};
