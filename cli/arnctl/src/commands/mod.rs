//! CLI commands.

mod check;
mod convert;
mod parse;
mod resource;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};
use oss_arn::ArnError;

use crate::config::Config;
use crate::error::{print_input_error, CliError};
use crate::output::OutputFormat;

/// arnctl - Inspect and convert OSS ARNs offline.
#[derive(Debug, Parser)]
#[command(name = "arnctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Defaults to ARNCTL_FORMAT, then table.
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Report failing inputs and continue with the rest.
    #[arg(long, global = true)]
    keep_going: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse ARNs into their sections.
    Parse(parse::ParseCommand),

    /// Convert ARNs into typed resources.
    Convert(convert::ConvertCommand),

    /// Check whether values carry the ARN prefix.
    Check(check::CheckCommand),

    /// Split bare resource strings into type, id and qualifier.
    Resource(resource::ResourceCommand),

    /// List the resource types that can be converted.
    Types,

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            format: self.format.unwrap_or(config.format),
            keep_going: self.keep_going,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Convert(cmd) => cmd.run(ctx),
            Commands::Check(cmd) => cmd.run(ctx),
            Commands::Resource(cmd) => cmd.run(ctx),
            Commands::Types => types::run(ctx),
            Commands::Version => {
                println!("arnctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    pub keep_going: bool,
}

impl CommandContext {
    /// Apply `f` to every input.
    ///
    /// Without `--keep-going` the first failure aborts. With it, failures
    /// are reported on stderr, the successful rows are returned, and
    /// [`Batch::finish`] turns any failure into an error afterwards.
    pub fn batch<T>(
        &self,
        inputs: &[String],
        f: impl Fn(&str) -> Result<T, ArnError>,
    ) -> Result<Batch<T>> {
        let mut rows = Vec::with_capacity(inputs.len());
        let mut failed = 0;

        for input in inputs {
            match f(input) {
                Ok(row) => {
                    tracing::debug!(input = %input, "Input accepted");
                    rows.push(row);
                }
                Err(source) => {
                    let err = CliError::arn(input.as_str(), source);
                    if !self.keep_going {
                        return Err(err.into());
                    }
                    tracing::warn!(input = %input, error = %err, "Input rejected");
                    print_input_error(&err);
                    failed += 1;
                }
            }
        }

        tracing::info!(total = inputs.len(), failed, "Batch complete");
        Ok(Batch {
            rows,
            failed,
            total: inputs.len(),
        })
    }
}

/// Result of running a command over several inputs.
pub struct Batch<T> {
    pub rows: Vec<T>,
    failed: usize,
    total: usize,
}

impl<T> Batch<T> {
    /// Fail if any input was rejected.
    pub fn finish(self) -> Result<()> {
        if self.failed > 0 {
            return Err(CliError::Batch {
                failed: self.failed,
                total: self.total,
            }
            .into());
        }
        Ok(())
    }
}
