//! End-to-end checks through the public API: string in, typed resource out.

use oss_arn::{
    convert, has_arn_prefix, AccessPointResource, Arn, ArnConverter, ArnError, ArnResource,
    OssResource, OssResourceInfo, ResourceType,
};

#[test]
fn access_point_arn_converts() {
    let res = ArnConverter::new()
        .convert_arn("prefix:acs:oss:cn-hangzhou:12345:accesspoint/ap-test")
        .unwrap();

    let OssResource::AccessPoint(ap) = &res;
    assert_eq!(ap.access_point_name(), "ap-test");
    assert_eq!(ap.account_id(), "12345");
    assert_eq!(ap.partition(), "acs");
    assert_eq!(ap.region(), "cn-hangzhou");
    assert!(res.parent_resource().is_none());
}

#[test]
fn every_failure_kind_is_reachable() {
    let cases = [
        ("", "malformed ARN: empty string"),
        ("arn:acs:oss", "malformed ARN: arn:acs:oss"),
        (
            "arn:acs:oss:cn-hangzhou:12345:accesspoint",
            "unknown ARN type: resource has no type",
        ),
        (
            "arn:acs:oss:cn-hangzhou:12345:cloudbox/cloudbox-id",
            "unknown ARN type 'cloudbox'",
        ),
        (
            "arn:acs:oss:cn-hangzhou:12345:accesspoint/",
            "invalid access point name in ARN: ''",
        ),
        (
            "arn:acs:oss:cn-hangzhou:12#ad345:accesspoint/ap-name",
            "invalid account ID in ARN: '12#ad345'",
        ),
    ];

    for (input, message) in cases {
        let err = convert(input).unwrap_err();
        assert_eq!(err.to_string(), message, "input: {input:?}");
    }
}

#[test]
fn resource_with_extra_colons_survives_parse_and_render() {
    let raw = "arn:acs:oss:cn-hangzhou:12345:bucket:my:bucket:id";
    let arn: Arn = raw.parse().unwrap();

    assert_eq!(arn.resource(), "bucket:my:bucket:id");
    assert_eq!(
        arn.arn_resource(),
        &ArnResource::parse("bucket:my:bucket:id")
    );
    assert_eq!(arn.arn_resource().resource(), "my:bucket");
    assert_eq!(arn.arn_resource().qualifier(), "id");
    assert_eq!(arn.to_string(), raw);
}

#[test]
fn prefix_check_screens_plain_names() {
    let inputs = ["my-bucket", "arn:acs:oss:cn-hangzhou:12345:accesspoint/ap-test"];
    let arns: Vec<_> = inputs
        .iter()
        .filter(|s| has_arn_prefix(s))
        .map(|s| Arn::parse(s))
        .collect::<Result<_, ArnError>>()
        .unwrap();

    assert_eq!(arns.len(), 1);
    assert_eq!(arns[0].service(), "oss");
}

#[test]
fn child_access_point_takes_set_fields_from_converted_parent() {
    let parent = convert("arn:acs:oss:cn-shanghai:777:accesspoint/parent").unwrap();
    let child = AccessPointResource::builder()
        .access_point_name("child")
        .region("given")
        .parent_resource(&parent)
        .build();

    assert_eq!(child.partition(), "");
    assert_eq!(child.region(), "cn-shanghai");
    assert_eq!(child.account_id(), "");
    assert_eq!(child.resource_type(), ResourceType::AccessPoint);
}
