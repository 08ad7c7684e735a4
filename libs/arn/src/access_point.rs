//! Access point resources.

use serde::Serialize;

use crate::{OssResourceInfo, ResourceType};

/// An access point addressed by ARN.
///
/// Values produced by [`crate::ArnConverter`] always carry a name made of
/// `[0-9A-Za-z-]` and an all-digit account ID. Values produced by
/// [`AccessPointResourceBuilder`] are not checked. There is no
/// `Deserialize`: JSON cannot mint an access point that skipped those checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AccessPointResource {
    partition: String,
    region: String,
    account_id: String,
    access_point_name: String,
}

impl AccessPointResource {
    /// Starts building an access point from explicit fields.
    #[must_use]
    pub fn builder<'a>() -> AccessPointResourceBuilder<'a> {
        AccessPointResourceBuilder::default()
    }

    pub(crate) fn new(
        partition: impl Into<String>,
        region: impl Into<String>,
        account_id: impl Into<String>,
        access_point_name: impl Into<String>,
    ) -> Self {
        Self {
            partition: partition.into(),
            region: region.into(),
            account_id: account_id.into(),
            access_point_name: access_point_name.into(),
        }
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn access_point_name(&self) -> &str {
        &self.access_point_name
    }
}

impl OssResourceInfo for AccessPointResource {
    fn partition(&self) -> &str {
        &self.partition
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::AccessPoint
    }
}

/// Builder for [`AccessPointResource`].
///
/// When a parent resource is set, each of partition, region and account ID
/// that was given here is replaced by the parent's value; one that was left
/// empty stays empty. The parent is only borrowed for
/// [`build`](Self::build); the built access point keeps no link to it.
#[derive(Debug, Default)]
pub struct AccessPointResourceBuilder<'a> {
    partition: String,
    region: String,
    account_id: String,
    access_point_name: String,
    parent_resource: Option<&'a dyn OssResourceInfo>,
}

impl<'a> AccessPointResourceBuilder<'a> {
    #[must_use]
    pub fn partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = partition.into();
        self
    }

    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    #[must_use]
    pub fn access_point_name(mut self, name: impl Into<String>) -> Self {
        self.access_point_name = name.into();
        self
    }

    /// Sets the resource this access point belongs to.
    #[must_use]
    pub fn parent_resource(mut self, parent: &'a dyn OssResourceInfo) -> Self {
        self.parent_resource = Some(parent);
        self
    }

    /// Builds the access point. No field is validated.
    #[must_use]
    pub fn build(self) -> AccessPointResource {
        match self.parent_resource {
            Some(parent) => AccessPointResource::new(
                inherit(&self.partition, parent.partition()),
                inherit(&self.region, parent.region()),
                inherit(&self.account_id, parent.account_id()),
                self.access_point_name,
            ),
            None => AccessPointResource::new(
                self.partition,
                self.region,
                self.account_id,
                self.access_point_name,
            ),
        }
    }
}

/// A field set on the builder takes the parent's value; an unset one stays empty.
fn inherit<'p>(given: &str, from_parent: &'p str) -> &'p str {
    if given.is_empty() {
        ""
    } else {
        from_parent
    }
}

/// Returns true if `name` is a non-empty run of ASCII letters, digits and `-`.
pub(crate) fn is_valid_access_point_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Returns true if `account_id` is a non-empty run of ASCII digits.
pub(crate) fn is_valid_account_id(account_id: &str) -> bool {
    !account_id.is_empty() && account_id.chars().all(|c| c.is_ascii_digit())
}
