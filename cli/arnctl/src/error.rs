//! Error handling and display for the CLI.

use colored::Colorize;
use oss_arn::ArnError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{input}: {source}")]
    Arn {
        input: String,
        #[source]
        source: ArnError,
    },

    #[error("{failed} of {total} input(s) failed")]
    Batch { failed: usize, total: usize },

    #[error("no input given")]
    NoInput,
}

impl CliError {
    /// Wrap a library error with the input that caused it.
    pub fn arn(input: impl Into<String>, source: ArnError) -> Self {
        Self::Arn {
            input: input.into(),
            source,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        if let Some(hint) = hint(cli_err) {
            eprintln!("\n{}", format!("Hint: {hint}").yellow());
        }
    }
}

/// Print a per-input failure without stopping a batch.
pub fn print_input_error(err: &CliError) {
    eprintln!("{} {}", "Failed:".red(), err);
}

fn hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Arn { source, .. } => match source {
            ArnError::Malformed { .. } => Some(
                "An ARN looks like arn:partition:service:region:account:resource.",
            ),
            ArnError::UnknownResourceType { resource_type, .. } if resource_type.is_empty() => {
                Some("The resource has no type. Write it as type/name, e.g. accesspoint/my-ap.")
            }
            ArnError::UnknownResourceType { .. } => {
                Some("Run `arnctl types` to list the supported resource types.")
            }
            ArnError::InvalidAccessPointName { .. } => {
                Some("Access point names may only use letters, digits and '-'.")
            }
            ArnError::InvalidAccountId { .. } => Some("Account IDs must be all digits."),
        },
        CliError::Batch { .. } => Some("Re-run with RUST_LOG=debug to see every input."),
        CliError::NoInput => Some("Pass values as arguments, or '-' to read them from stdin."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arn_error_message_names_input() {
        let err = CliError::arn(
            "arn:x",
            ArnError::Malformed {
                arn: "arn:x".to_string(),
            },
        );
        assert_eq!(err.to_string(), "arn:x: malformed ARN: arn:x");
    }

    #[test]
    fn test_empty_type_gets_its_own_hint() {
        let empty = CliError::arn(
            "a",
            ArnError::UnknownResourceType {
                resource_type: String::new(),
            },
        );
        let named = CliError::arn(
            "a",
            ArnError::UnknownResourceType {
                resource_type: "cloudbox".to_string(),
            },
        );
        assert_ne!(hint(&empty), hint(&named));
    }
}
