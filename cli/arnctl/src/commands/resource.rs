//! Resource decomposition commands.

use anyhow::Result;
use clap::Args;
use oss_arn::ArnResource;
use serde::Serialize;
use tabled::Tabled;

use crate::input;
use crate::output::{display_option, non_empty, print_output};

use super::CommandContext;

/// Split bare resource strings (the part after the account) into parts.
#[derive(Debug, Args)]
pub struct ResourceCommand {
    /// Resource strings, e.g. `bucket/object:id`. Omit, or pass '-', to read
    /// one per line from stdin.
    inputs: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ResourceRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Type", display = "display_option")]
    resource_type: Option<String>,

    #[tabled(rename = "Resource")]
    resource: String,

    #[tabled(rename = "Qualifier", display = "display_option")]
    qualifier: Option<String>,
}

impl From<String> for ResourceRow {
    fn from(input: String) -> Self {
        let parsed = ArnResource::parse(&input);
        Self {
            resource_type: non_empty(parsed.resource_type()),
            resource: parsed.resource().to_string(),
            qualifier: non_empty(parsed.qualifier()),
            input,
        }
    }
}

impl ResourceCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = input::collect(self.inputs)?;
        let rows: Vec<ResourceRow> = inputs.into_iter().map(ResourceRow::from).collect();
        print_output(&rows, ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row() {
        let row = ResourceRow::from("bucket:mybucket:id".to_string());
        assert_eq!(row.resource_type.as_deref(), Some("bucket"));
        assert_eq!(row.resource, "mybucket");
        assert_eq!(row.qualifier.as_deref(), Some("id"));

        let bare = ResourceRow::from("id".to_string());
        assert_eq!(bare.resource_type, None);
        assert_eq!(bare.resource, "id");
    }
}
