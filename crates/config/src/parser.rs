//! YAML parsing into the hook model
//!
//! Two operations share the same document loader:
//!
//! - [`parse_hook`] fully validates one hook section and builds a
//!   [`Hook`], failing on the first structural defect.
//! - [`available_hooks`] is intentionally shallow: it only checks that a
//!   hook key exists and is a sequence. Discovery decides which hook shims
//!   to install, so a malformed, unused section must not block it; full
//!   validation is deferred to `parse_hook` for the hook actually being run.

use crate::error::ParseError;
use gancho_core::{Command, Hook, HookError, HookType};
use serde_yaml::Value;

/// Deserialize configuration text into a generic top-level mapping
fn load_document(text: &str) -> Result<Value, ParseError> {
    let document: Value = serde_yaml::from_str(text)?;

    if document.is_null() {
        return Err(ParseError::EmptyConfig);
    }
    if !document.is_mapping() {
        return Err(ParseError::NotAMapping);
    }

    Ok(document)
}

/// Parse and validate the section for `hook_type` into a runnable [`Hook`]
pub fn parse_hook(hook_type: HookType, text: &str) -> Result<Hook, ParseError> {
    let document = load_document(text)?;
    let hook = build_hook(hook_type, &document)?;

    tracing::debug!(
        hook = %hook.hook_type,
        commands = hook.commands.len(),
        verbose = hook.verbose,
        "Parsed hook from configuration"
    );

    Ok(hook)
}

/// List every hook type the document defines as a sequence
///
/// Entries are not validated here; see the module docs for why.
pub fn available_hooks(text: &str) -> Result<Vec<HookType>, ParseError> {
    let document = load_document(text)?;

    let hooks: Vec<HookType> = HookType::all()
        .into_iter()
        .filter(|hook| document.get(hook.as_str()).is_some_and(Value::is_sequence))
        .collect();

    if hooks.is_empty() {
        return Err(ParseError::NoHooksFound);
    }

    tracing::debug!(count = hooks.len(), "Discovered hook sections");
    Ok(hooks)
}

fn build_hook(hook_type: HookType, document: &Value) -> Result<Hook, HookError> {
    let section = document
        .get(hook_type.as_str())
        .ok_or(HookError::NotFound(hook_type))?;
    let entries = section
        .as_sequence()
        .ok_or(HookError::NotAList(hook_type))?;

    let mut verbose = false;
    let mut commands = Vec::new();

    for entry in entries {
        match entry {
            // Plain string entry: the command line itself
            Value::String(run) if !run.trim().is_empty() => {
                commands.push(Command::new(run.clone()));
            }
            Value::Mapping(_) => {
                if let Some(run) = entry.get("run") {
                    commands.push(parse_run_entry(hook_type, entry, run)?);
                } else if entry.get("verbose").is_some() {
                    // Hook-level verbosity default, mixed in with the list
                    verbose = required_bool(hook_type, entry, "verbose")?;
                } else {
                    return Err(HookError::InvalidEntry(hook_type, render_entry(entry)));
                }
            }
            _ => return Err(HookError::InvalidEntry(hook_type, render_entry(entry))),
        }
    }

    if commands.is_empty() {
        return Err(HookError::Empty(hook_type));
    }

    Ok(Hook {
        hook_type,
        verbose,
        commands,
    })
}

/// Parse a `run:` entry with a required `command` and optional flags
fn parse_run_entry(hook_type: HookType, entry: &Value, run: &Value) -> Result<Command, HookError> {
    if !run.is_mapping() {
        return Err(HookError::InvalidEntry(hook_type, render_entry(entry)));
    }

    let command = run
        .get("command")
        .ok_or_else(|| HookError::MissingCommand(hook_type, render_entry(entry)))?;
    let command = command
        .as_str()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| HookError::InvalidEntry(hook_type, render_entry(entry)))?;

    let verbose = optional_bool(hook_type, entry, run.get("verbose"))?;
    let critical = optional_bool(hook_type, entry, run.get("critical"))?;

    Ok(Command::with_options(command, verbose, critical))
}

fn required_bool(hook_type: HookType, entry: &Value, key: &str) -> Result<bool, HookError> {
    entry
        .get(key)
        .and_then(Value::as_bool)
        .ok_or_else(|| HookError::InvalidEntry(hook_type, render_entry(entry)))
}

fn optional_bool(
    hook_type: HookType,
    entry: &Value,
    value: Option<&Value>,
) -> Result<Option<bool>, HookError> {
    match value {
        None => Ok(None),
        Some(flag) => flag
            .as_bool()
            .map(Some)
            .ok_or_else(|| HookError::InvalidEntry(hook_type, render_entry(entry))),
    }
}

/// Render the offending entry on one line for error messages
fn render_entry(entry: &Value) -> String {
    serde_yaml::to_string(entry)
        .map(|text| text.trim().replace('\n', ", "))
        .unwrap_or_else(|_| format!("{entry:?}"))
}
