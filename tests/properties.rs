use ec2_model::{DescribeImagesRequest, Ec2Model, Filter, Placement, ReservedInstances, Tag};
use proptest::prelude::*;

fn describe_images() -> impl Strategy<Value = DescribeImagesRequest> {
    (
        proptest::option::of(proptest::collection::vec("[a-z0-9-]{1,12}", 0..4)),
        proptest::option::of(proptest::collection::vec(("[a-z:-]{1,16}", proptest::collection::vec("[a-z0-9 .*]{0,8}", 1..3)), 0..3)),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(image_ids, filters, dry_run)| {
            let mut request = DescribeImagesRequest::new();
            if let Some(ids) = image_ids {
                request = request.with_image_ids(ids);
            }
            if let Some(filters) = filters {
                request = request.with_filters(filters);
            }
            request.set_dry_run(dry_run);
            request
        })
}

fn placement() -> impl Strategy<Value = Placement> {
    (
        proptest::option::of("[a-z]{2}-[a-z]+-[0-9][a-z]"),
        proptest::option::of(0..8i32),
        proptest::option::of(prop_oneof![Just("default"), Just("dedicated"), Just("host"), Just("shared")]),
    )
        .prop_map(|(zone, partition, tenancy)| {
            let mut placement = Placement::new();
            placement.set_availability_zone(zone);
            placement.set_partition_number(partition);
            match tenancy {
                Some(raw) => placement.set_tenancy(raw),
                None => placement.set_tenancy(None),
            }
            placement
        })
}

proptest! {
    #[test]
    fn equality_is_symmetric_and_hash_consistent(a in describe_images(), b in describe_images()) {
        prop_assert_eq!(a == b, b == a);
        if a == b {
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }
        let copy = a.clone();
        prop_assert_eq!(&copy, &a);
        prop_assert_eq!(copy.hash_code(), a.hash_code());
    }

    #[test]
    fn presence_mismatch_is_never_equal(a in placement()) {
        let mut b = a.clone();
        match a.partition_number() {
            Some(_) => b.set_partition_number(None),
            None => b.set_partition_number(Some(0)),
        }
        prop_assert_ne!(a, b);
    }

    #[test]
    fn setter_is_idempotent(zone in "\\PC{0,20}") {
        let mut placement = Placement::new();
        placement.set_availability_zone(Some(zone.clone()));
        placement.set_availability_zone(Some(zone.clone()));
        prop_assert_eq!(placement.availability_zone(), Some(zone.as_str()));
    }

    #[test]
    fn builders_accumulate(first in proptest::collection::vec("[a-z]{1,6}", 0..5), second in proptest::collection::vec("[a-z]{1,6}", 0..5)) {
        let request = DescribeImagesRequest::new()
            .with_owners(first.clone())
            .with_owners(second.clone());
        let expected: Vec<String> = first.into_iter().chain(second).collect();
        prop_assert_eq!(request.owners(), Some(expected.as_slice()));
    }

    #[test]
    fn list_setter_clears(a in describe_images()) {
        let mut request = a;
        request.set_filters(Some(Vec::new()));
        prop_assert!(request.filters().is_none());
        request.set_image_ids(None);
        prop_assert!(request.image_ids().is_none());
    }

    #[test]
    fn display_names_present_attributes_only(a in describe_images()) {
        let shown = a.to_string();
        prop_assert!(shown.starts_with('{') && shown.ends_with('}'), "not brace-delimited: {}", shown);
        prop_assert_eq!(shown.contains("ImageIds: "), a.image_ids().is_some());
        prop_assert_eq!(shown.contains("DryRun: "), a.dry_run().is_some());
        prop_assert!(!shown.contains("Owners: "));
        prop_assert!(!shown.contains("ExecutableUsers: "));
    }

    #[test]
    fn json_document_round_trips(a in describe_images(), p in placement()) {
        let json = a.to_json().unwrap();
        prop_assert_eq!(DescribeImagesRequest::from_json(&json).unwrap(), a);
        let json = p.to_json().unwrap();
        prop_assert_eq!(Placement::from_json(&json).unwrap(), p);
    }

    #[test]
    fn tag_hash_follows_key_and_value(key in "\\PC{0,10}", value in "\\PC{0,10}") {
        let tag = Tag::from((key.as_str(), value.as_str()));
        let expected = Tag::new().with_key(key).with_value(value);
        prop_assert_eq!(tag.hash_code(), expected.hash_code());
        prop_assert_eq!(tag, expected);
    }

    #[test]
    fn prices_hash_like_they_compare(price in any::<f32>().prop_filter("nan never equals itself", |p| !p.is_nan())) {
        let a = ReservedInstances::new().with_fixed_price(price);
        let b = ReservedInstances::new().with_fixed_price(price);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash_code(), b.hash_code());
    }
}

#[test]
fn new_objects_are_empty() {
    assert_eq!(DescribeImagesRequest::new().to_string(), "{}");
    assert_eq!(Filter::new(), Filter::default());
    assert_eq!(Placement::new().to_json().unwrap(), "{}");
}
