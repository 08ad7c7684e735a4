//! Prefix check commands.
//!
//! These never fail on an input: a value without the prefix is simply
//! reported as not an ARN.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::input;
use crate::output::print_output;

use super::CommandContext;

/// Check whether values carry the ARN prefix.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Values to check. Omit, or pass '-', to read one per line from stdin.
    inputs: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "ARN")]
    is_arn: bool,
}

impl CheckCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = input::collect(self.inputs)?;
        let rows: Vec<CheckRow> = inputs.into_iter().map(check).collect();
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn check(input: String) -> CheckRow {
    let is_arn = oss_arn::has_arn_prefix(&input);
    tracing::debug!(input = %input, is_arn, "Checked prefix");
    CheckRow { input, is_arn }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        assert!(check("arn:acs:oss:::bucket".to_string()).is_arn);
        assert!(!check("my-bucket".to_string()).is_arn);
    }
}
