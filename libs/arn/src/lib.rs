//! # oss-arn
//!
//! ARN parsing and typed resource conversion for object storage.
//!
//! ## ARN Format
//!
//! ```text
//! arn:{partition}:{service}:{region}:{account}:{resource}
//! ```
//!
//! The resource part has one of three shapes:
//! - `resource-id`
//! - `resource-type:resource-id` (or `resource-type/resource-id`)
//! - `resource-type:resource-id:qualifier`
//!
//! Examples:
//! - `arn:acs:oss:cn-hangzhou:12345:accesspoint/ap-test`
//! - `arn:acs:oss:cn-hangzhou:12345:bucket:mybucket:id`
//!
//! ## Layers
//!
//! - [`Arn`] splits the top-level fields and keeps the resource verbatim
//! - [`ArnResource`] decomposes the resource into type, id and qualifier
//! - [`ResourceType`] is the closed set of resource types we understand
//! - [`ArnConverter`] validates an ARN and builds the matching [`OssResource`]
//!
//! Everything here is a pure function over strings. Nothing is resolved
//! against a remote service.

mod access_point;
mod arn;
mod converter;
mod error;
mod resource;
mod resource_type;

pub use access_point::{AccessPointResource, AccessPointResourceBuilder};
pub use arn::{has_arn_prefix, Arn, ARN_PREFIX};
pub use converter::{convert, ArnConverter, OssResource, OssResourceInfo};
pub use error::ArnError;
pub use resource::ArnResource;
pub use resource_type::ResourceType;
