//! Conversion from ARNs to typed resources.

use serde::Serialize;

use crate::access_point::{is_valid_access_point_name, is_valid_account_id};
use crate::{AccessPointResource, Arn, ArnError, ResourceType};

/// Location and type shared by every typed resource.
pub trait OssResourceInfo: std::fmt::Debug {
    fn partition(&self) -> &str;

    fn region(&self) -> &str;

    fn account_id(&self) -> &str;

    fn resource_type(&self) -> ResourceType;

    /// The resource this one was nested under, if it is kept.
    ///
    /// None of the current resource types keep their parent.
    fn parent_resource(&self) -> Option<&OssResource> {
        None
    }
}

/// A validated resource, one variant per [`ResourceType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OssResource {
    AccessPoint(AccessPointResource),
}

impl OssResource {
    /// Returns the access point, if this is one.
    pub fn as_access_point(&self) -> Option<&AccessPointResource> {
        match self {
            OssResource::AccessPoint(ap) => Some(ap),
        }
    }

    fn info(&self) -> &dyn OssResourceInfo {
        match self {
            OssResource::AccessPoint(ap) => ap,
        }
    }
}

impl OssResourceInfo for OssResource {
    fn partition(&self) -> &str {
        self.info().partition()
    }

    fn region(&self) -> &str {
        self.info().region()
    }

    fn account_id(&self) -> &str {
        self.info().account_id()
    }

    fn resource_type(&self) -> ResourceType {
        self.info().resource_type()
    }

    fn parent_resource(&self) -> Option<&OssResource> {
        self.info().parent_resource()
    }
}

impl From<AccessPointResource> for OssResource {
    fn from(ap: AccessPointResource) -> Self {
        OssResource::AccessPoint(ap)
    }
}

/// Converts ARN strings into typed resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArnConverter;

impl ArnConverter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses `s` and builds the typed resource its resource type names.
    ///
    /// The resource type is matched case-insensitively. Errors name the
    /// type as written in the ARN.
    pub fn convert_arn(&self, s: &str) -> Result<OssResource, ArnError> {
        let arn = Arn::parse(s)?;
        let raw_type = arn.arn_resource().resource_type();

        let resource_type = ResourceType::parse(&raw_type.to_lowercase()).map_err(|_| {
            ArnError::UnknownResourceType {
                resource_type: raw_type.to_string(),
            }
        })?;

        match resource_type {
            ResourceType::AccessPoint => self.parse_access_point_arn(&arn).map(Into::into),
        }
    }

    /// Validates an access point ARN and builds the access point.
    ///
    /// The name is checked before the account ID. The resource type of
    /// `arn` is not re-checked.
    pub fn parse_access_point_arn(&self, arn: &Arn) -> Result<AccessPointResource, ArnError> {
        let name = arn.arn_resource().resource();
        if !is_valid_access_point_name(name) {
            return Err(ArnError::InvalidAccessPointName {
                name: name.to_string(),
            });
        }

        if !is_valid_account_id(arn.account_id()) {
            return Err(ArnError::InvalidAccountId {
                account_id: arn.account_id().to_string(),
            });
        }

        Ok(AccessPointResource::new(
            arn.partition(),
            arn.region(),
            arn.account_id(),
            name,
        ))
    }
}

/// Converts an ARN string with the default [`ArnConverter`].
pub fn convert(s: &str) -> Result<OssResource, ArnError> {
    ArnConverter::new().convert_arn(s)
}
