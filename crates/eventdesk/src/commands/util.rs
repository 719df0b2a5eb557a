//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use eventdesk_core::{CommandResult, RecordFilter};

use crate::cli::{GlobalOpts, ListArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to ask on, refuses instead of hanging.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("{}: {e}", path.display()),
    })
}

/// The event commands are scoped to: `--event`, `EVENTDESK_EVENT`, or the profile's.
pub fn require_event(global: &GlobalOpts) -> Result<String, CliError> {
    global.event.clone().ok_or(CliError::NoEvent)
}

/// Build the record filter for a list command.
///
/// Lists are scoped to the current event unless `--all-events` is given.
pub fn filter_from(list: &ListArgs, global: &GlobalOpts) -> Result<RecordFilter, CliError> {
    let event_id = if list.all_events {
        None
    } else {
        Some(require_event(global)?)
    };
    Ok(RecordFilter {
        event_id,
        status: list.status.clone(),
        priority: list.priority.clone(),
        search: list.search.clone(),
    })
}

/// Truncate to `--limit` rows (0 keeps everything).
pub fn apply_limit<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    if limit > 0 {
        items.truncate(limit);
    }
    items
}

/// Report a completed mutation.
///
/// Structured formats print the whole result (record plus refreshed
/// collection) to stdout; the others print a one-line summary to stderr.
pub fn report_mutation(
    summary: &str,
    result: &CommandResult,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match global.format() {
        OutputFormat::Table | OutputFormat::Plain => {
            if !global.quiet {
                let message = result.message.as_deref().unwrap_or(summary);
                eprintln!("{message} ({} records after refresh)", result.refreshed.len());
            }
            Ok(())
        }
        format => {
            let out = output::render_single(format, result, |_| String::new(), |_| String::new())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

/// Timestamp for tables and detail views.
pub fn fmt_time(t: Option<&DateTime<Utc>>) -> String {
    t.map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

pub fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_owned()
}

pub fn opt_num<N: ToString>(value: Option<N>) -> String {
    value.map_or_else(|| "-".into(), |n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_zero_keeps_everything() {
        assert_eq!(apply_limit(vec![1, 2, 3], 0).len(), 3);
        assert_eq!(apply_limit(vec![1, 2, 3], 2), vec![1, 2]);
    }

    #[test]
    fn blank_values_render_as_dash() {
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("Gate 3")), "Gate 3");
        assert_eq!(opt_num::<u32>(None), "-");
    }
}
