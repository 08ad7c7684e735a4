//! Parse commands.

use anyhow::Result;
use clap::Args;
use oss_arn::Arn;
use serde::Serialize;
use tabled::Tabled;

use crate::input;
use crate::output::{display_option, non_empty, print_output};

use super::CommandContext;

/// Parse ARNs into their sections.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// ARNs to parse. Omit, or pass '-', to read one per line from stdin.
    inputs: Vec<String>,
}

/// One parsed ARN.
#[derive(Debug, Serialize, Tabled)]
struct ArnRow {
    #[tabled(rename = "Partition")]
    partition: String,

    #[tabled(rename = "Service")]
    service: String,

    #[tabled(rename = "Region", display = "display_option")]
    region: Option<String>,

    #[tabled(rename = "Account", display = "display_option")]
    account_id: Option<String>,

    #[tabled(rename = "Type", display = "display_option")]
    resource_type: Option<String>,

    #[tabled(rename = "Resource")]
    resource: String,

    #[tabled(rename = "Qualifier", display = "display_option")]
    qualifier: Option<String>,

    #[tabled(skip)]
    arn: String,
}

impl From<Arn> for ArnRow {
    fn from(arn: Arn) -> Self {
        let res = arn.arn_resource();
        Self {
            partition: arn.partition().to_string(),
            service: arn.service().to_string(),
            region: non_empty(arn.region()),
            account_id: non_empty(arn.account_id()),
            resource_type: non_empty(res.resource_type()),
            resource: res.resource().to_string(),
            qualifier: non_empty(res.qualifier()),
            arn: arn.to_string(),
        }
    }
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = input::collect(self.inputs)?;
        let batch = ctx.batch(&inputs, |s| Arn::parse(s).map(ArnRow::from))?;
        print_output(&batch.rows, ctx.format);
        batch.finish()
    }
}
