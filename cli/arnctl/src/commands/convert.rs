//! Convert commands.

use anyhow::Result;
use clap::Args;
use oss_arn::{ArnConverter, OssResource, OssResourceInfo};
use serde::Serialize;
use tabled::Tabled;

use crate::input;
use crate::output::{print_json, print_output, OutputFormat};

use super::CommandContext;

/// Convert ARNs into typed resources.
#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// ARNs to convert. Omit, or pass '-', to read one per line from stdin.
    inputs: Vec<String>,
}

/// One converted resource, flattened for table output.
#[derive(Debug, Serialize, Tabled)]
struct ResourceRow {
    #[tabled(rename = "Type")]
    resource_type: String,

    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Partition")]
    partition: String,

    #[tabled(rename = "Region")]
    region: String,

    #[tabled(rename = "Account")]
    account_id: String,
}

impl From<&OssResource> for ResourceRow {
    fn from(res: &OssResource) -> Self {
        let name = match res {
            OssResource::AccessPoint(ap) => ap.access_point_name().to_string(),
        };
        Self {
            resource_type: res.resource_type().to_string(),
            name,
            partition: res.partition().to_string(),
            region: res.region().to_string(),
            account_id: res.account_id().to_string(),
        }
    }
}

impl ConvertCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = input::collect(self.inputs)?;
        let converter = ArnConverter::new();
        let batch = ctx.batch(&inputs, |s| converter.convert_arn(s))?;

        match ctx.format {
            // JSON keeps the tagged resource shape from the library.
            OutputFormat::Json => print_json(&batch.rows),
            OutputFormat::Table => {
                let rows: Vec<ResourceRow> = batch.rows.iter().map(ResourceRow::from).collect();
                print_output(&rows, ctx.format);
            }
        }

        batch.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_access_point() {
        let res = oss_arn::convert("arn:acs:oss:cn-hangzhou:12345:accesspoint/ap-test").unwrap();
        let row = ResourceRow::from(&res);
        assert_eq!(row.resource_type, "accesspoint");
        assert_eq!(row.name, "ap-test");
        assert_eq!(row.partition, "acs");
        assert_eq!(row.region, "cn-hangzhou");
        assert_eq!(row.account_id, "12345");
    }
}
