//! Registry of resource types that can be converted into typed resources.

use serde::{Deserialize, Serialize};

use crate::ArnError;

/// A resource type understood by [`crate::ArnConverter`].
///
/// Adding a type means adding a variant here and a branch in the converter;
/// the ARN parser itself does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// An access point, written `accesspoint` in ARNs.
    #[serde(rename = "accesspoint")]
    AccessPoint,
}

impl ResourceType {
    /// Every registered resource type.
    pub const ALL: &'static [ResourceType] = &[ResourceType::AccessPoint];

    /// Returns the tag used in ARNs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceType::AccessPoint => "accesspoint",
        }
    }

    /// Looks up a resource type by its exact tag.
    ///
    /// Matching is case-sensitive; callers that accept mixed case must
    /// lower-case first.
    pub fn parse(s: &str) -> Result<Self, ArnError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ArnError::UnknownResourceType {
                resource_type: s.to_string(),
            })
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceType {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_access_point() {
        assert_eq!(
            ResourceType::parse("accesspoint").unwrap(),
            ResourceType::AccessPoint
        );
        let parsed: ResourceType = "accesspoint".parse().unwrap();
        assert_eq!(parsed, ResourceType::AccessPoint);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = ResourceType::parse("AccessPoint").unwrap_err();
        assert_eq!(
            err,
            ArnError::UnknownResourceType {
                resource_type: "AccessPoint".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert!(ResourceType::parse("abc").unwrap_err().is_unknown_resource_type());
        assert!(ResourceType::parse("").unwrap_err().is_unknown_resource_type());
    }

    #[test]
    fn test_display_roundtrip() {
        for t in ResourceType::ALL {
            assert_eq!(ResourceType::parse(&t.to_string()).unwrap(), *t);
        }
    }

    #[test]
    fn test_json_uses_tag() {
        let json = serde_json::to_string(&ResourceType::AccessPoint).unwrap();
        assert_eq!(json, "\"accesspoint\"");
        let parsed: ResourceType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ResourceType::AccessPoint);
    }
}
