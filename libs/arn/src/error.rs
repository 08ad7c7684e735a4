//! Error types for ARN parsing and conversion.

use thiserror::Error;

/// Errors that can occur when parsing or converting an ARN.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArnError {
    /// The ARN is empty or has fewer than six `:`-separated sections.
    #[error("malformed ARN: {}", describe_malformed(.arn))]
    Malformed { arn: String },

    /// The resource type is missing or not one we know how to convert.
    #[error("{}", describe_unknown_type(.resource_type))]
    UnknownResourceType { resource_type: String },

    /// The access point name is empty or contains characters outside `[0-9A-Za-z-]`.
    #[error("invalid access point name in ARN: '{name}'")]
    InvalidAccessPointName { name: String },

    /// The account ID is empty or not all digits.
    #[error("invalid account ID in ARN: '{account_id}'")]
    InvalidAccountId { account_id: String },
}

fn describe_malformed(arn: &str) -> &str {
    if arn.is_empty() {
        "empty string"
    } else {
        arn
    }
}

fn describe_unknown_type(resource_type: &str) -> String {
    if resource_type.is_empty() {
        "unknown ARN type: resource has no type".to_string()
    } else {
        format!("unknown ARN type '{resource_type}'")
    }
}

impl ArnError {
    /// Returns true if the ARN itself could not be split into sections.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ArnError::Malformed { .. })
    }

    /// Returns true if the resource type was missing or unrecognized.
    pub fn is_unknown_resource_type(&self) -> bool {
        matches!(self, ArnError::UnknownResourceType { .. })
    }

    /// Returns true if the ARN parsed but a type-specific field check failed.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            ArnError::InvalidAccessPointName { .. } | ArnError::InvalidAccountId { .. }
        )
    }
}
