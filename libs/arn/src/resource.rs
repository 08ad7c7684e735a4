//! The resource part of an ARN.

use serde::{Deserialize, Serialize};

/// Decomposed resource part of an ARN: `type`, `id` and `qualifier`.
///
/// Empty strings stand for absent parts. A resource without a type is a
/// bare id; the qualifier is only present when a type is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArnResource {
    resource_type: String,
    resource: String,
    qualifier: String,
}

impl ArnResource {
    /// Splits a resource string into type, id and qualifier.
    ///
    /// The type ends at the first `:` or `/`. The qualifier starts after the
    /// last `:` to the right of that boundary. A `/` never starts a
    /// qualifier. Empty pieces are kept as-is; this never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        // A delimiter at index 0 does not open a type.
        let Some(type_end) = s.find([':', '/']).filter(|&i| i > 0) else {
            return Self {
                resource: s.to_string(),
                ..Self::default()
            };
        };

        let rest = &s[type_end + 1..];
        let (resource, qualifier) = match rest.rfind(':') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };

        Self {
            resource_type: s[..type_end].to_string(),
            resource: resource.to_string(),
            qualifier: qualifier.to_string(),
        }
    }

    /// Returns the resource type, or `""` for a bare id.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the resource id.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the qualifier, or `""` if there is none.
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    pub fn has_resource_type(&self) -> bool {
        !self.resource_type.is_empty()
    }

    pub fn has_qualifier(&self) -> bool {
        !self.qualifier.is_empty()
    }
}

impl std::fmt::Display for ArnResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_resource_type() {
            write!(f, "{}:", self.resource_type)?;
        }
        f.write_str(&self.resource)?;
        if self.has_qualifier() {
            write!(f, ":{}", self.qualifier)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::bare_id("id", "", "id", "")]
    #[case::slash_type("bucket/object", "bucket", "object", "")]
    #[case::slash_type_with_qualifier("bucket/object:id", "bucket", "object", "id")]
    #[case::colon_type("bucket:mybucket", "bucket", "mybucket", "")]
    #[case::colon_type_with_qualifier("bucket:mybucket:id", "bucket", "mybucket", "id")]
    #[case::special_chars("bucket#@/object", "bucket#@", "object", "")]
    #[case::slashes_stay_in_id("bucket/a/b/c", "bucket", "a/b/c", "")]
    #[case::last_colon_wins("t:a:b:c", "t", "a:b", "c")]
    #[case::slash_after_colon("t:a/b", "t", "a/b", "")]
    #[case::empty_id("accesspoint/", "accesspoint", "", "")]
    #[case::empty_qualifier("bucket:mybucket:", "bucket", "mybucket", "")]
    #[case::empty_id_with_qualifier("bucket::q", "bucket", "", "q")]
    #[case::empty("", "", "", "")]
    #[case::leading_delimiter(":a:b", "", ":a:b", "")]
    fn test_parse_shapes(
        #[case] input: &str,
        #[case] resource_type: &str,
        #[case] resource: &str,
        #[case] qualifier: &str,
    ) {
        let parsed = ArnResource::parse(input);
        assert_eq!(parsed.resource_type(), resource_type);
        assert_eq!(parsed.resource(), resource);
        assert_eq!(parsed.qualifier(), qualifier);
    }

    #[test]
    fn test_type_colon_without_second_colon() {
        // The only ':' is the type boundary itself.
        let parsed = ArnResource::parse("bucket:");
        assert_eq!(parsed.resource_type(), "bucket");
        assert_eq!(parsed.resource(), "");
        assert!(!parsed.has_qualifier());
    }

    #[rstest]
    #[case("id", "id")]
    #[case("bucket/object", "bucket:object")]
    #[case("bucket/object:id", "bucket:object:id")]
    #[case("bucket:mybucket:id", "bucket:mybucket:id")]
    fn test_display(#[case] input: &str, #[case] rendered: &str) {
        assert_eq!(ArnResource::parse(input).to_string(), rendered);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(ArnResource::parse("bucket/object:id")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "resource_type": "bucket",
                "resource": "object",
                "qualifier": "id",
            })
        );
    }

    proptest! {
        #[test]
        fn prop_no_delimiter_is_bare_id(tail in "[^:/]*") {
            let parsed = ArnResource::parse(&tail);
            prop_assert_eq!(parsed.resource_type(), "");
            prop_assert_eq!(parsed.resource(), tail.as_str());
            prop_assert_eq!(parsed.qualifier(), "");
        }

        #[test]
        fn prop_rendered_form_reparses_equal(tail in "[a-z0-9:/-]{0,24}") {
            let parsed = ArnResource::parse(&tail);
            // An id holding ':' with an empty qualifier (`t:a:b:`) renders
            // without the trailing ':' and so grows a qualifier.
            prop_assume!(parsed.has_qualifier() || !parsed.resource().contains(':'));
            let reparsed = ArnResource::parse(&parsed.to_string());
            prop_assert_eq!(reparsed, parsed);
        }
    }
}
