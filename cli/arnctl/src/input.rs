//! Collecting command inputs from arguments or stdin.

use std::io::BufRead;

use anyhow::{Context, Result};

use crate::error::CliError;

/// Marker argument meaning "read inputs from stdin".
const STDIN_MARKER: &str = "-";

/// Resolve positional arguments into the list of inputs to process.
///
/// No arguments, or a single `-`, reads newline-separated inputs from
/// stdin. Blank lines are skipped and surrounding whitespace trimmed.
pub fn collect(args: Vec<String>) -> Result<Vec<String>> {
    let inputs = if args.is_empty() || args == [STDIN_MARKER] {
        let stdin = std::io::stdin();
        read_lines(stdin.lock())?
    } else {
        args
    };

    if inputs.is_empty() {
        return Err(CliError::NoInput.into());
    }

    tracing::debug!(count = inputs.len(), "Collected inputs");
    Ok(inputs)
}

fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read stdin line {}", idx + 1))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}
