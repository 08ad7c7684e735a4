//! Resource type listing.

use anyhow::Result;
use oss_arn::ResourceType;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    resource_type: ResourceType,

    #[tabled(rename = "Example")]
    example: String,
}

pub fn run(ctx: CommandContext) -> Result<()> {
    let rows: Vec<TypeRow> = ResourceType::ALL
        .iter()
        .map(|t| TypeRow {
            resource_type: *t,
            example: format!("arn:acs:oss:cn-hangzhou:12345:{t}/my-{t}"),
        })
        .collect();
    print_output(&rows, ctx.format);
    Ok(())
}
