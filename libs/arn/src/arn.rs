//! Top-level ARN parsing.

use crate::{ArnError, ArnResource};

/// Literal that starts every ARN.
pub const ARN_PREFIX: &str = "arn:";

const DELIMITER: char = ':';

/// Minimum number of `:`-separated sections in an ARN.
const SECTIONS: usize = 6;

/// Returns true if `s` starts with the `arn:` prefix.
///
/// This is a cheap check for telling ARNs apart from plain names; it does
/// not validate the rest of the string.
#[must_use]
pub fn has_arn_prefix(s: &str) -> bool {
    s.starts_with(ARN_PREFIX)
}

/// A parsed Amazon Resource Name.
///
/// Fields are taken positionally and accepted verbatim; only the number of
/// sections is checked. The resource part keeps any `:` it contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arn {
    partition: String,
    service: String,
    region: String,
    account_id: String,
    resource: String,
    arn_resource: ArnResource,
}

impl Arn {
    /// Builds an ARN from its fields. The resource is decomposed as in
    /// [`ArnResource::parse`].
    pub fn new(
        partition: impl Into<String>,
        service: impl Into<String>,
        region: impl Into<String>,
        account_id: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        let resource = resource.into();
        let arn_resource = ArnResource::parse(&resource);
        Self {
            partition: partition.into(),
            service: service.into(),
            region: region.into(),
            account_id: account_id.into(),
            resource,
            arn_resource,
        }
    }

    /// Parses an ARN from a string.
    ///
    /// The string must have at least six `:`-separated sections. The first
    /// section is the prefix position and is not inspected. Sections past
    /// the sixth belong to the resource and are joined back with `:`.
    pub fn parse(s: &str) -> Result<Self, ArnError> {
        if s.is_empty() {
            return Err(ArnError::Malformed { arn: String::new() });
        }

        let mut sections = s.splitn(SECTIONS, DELIMITER);
        let mut next = || {
            sections.next().ok_or_else(|| ArnError::Malformed {
                arn: s.to_string(),
            })
        };

        let _prefix = next()?;
        let partition = next()?;
        let service = next()?;
        let region = next()?;
        let account_id = next()?;
        // splitn leaves the remainder, embedded ':' included, in the last item.
        let resource = next()?;

        Ok(Self::new(partition, service, region, account_id, resource))
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Returns the resource part exactly as it appeared in the ARN.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the decomposed resource part.
    pub fn arn_resource(&self) -> &ArnResource {
        &self.arn_resource
    }
}

impl std::fmt::Display for Arn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{ARN_PREFIX}{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}

impl std::str::FromStr for Arn {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Arn {
    type Error = ArnError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl serde::Serialize for Arn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Arn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
