use crate::types::*;

ec2_model! {
    /// A named key with one or more values, used to narrow a describe call.
    ///
    /// Filter names are case-sensitive (`instance-state-name`, `tag:Name`,
    /// `tag-key`, ...). Builds from a `(name, values)` pair.
    pub struct Filter {
        one name / set_name / with_name: String = "Name";
        many values / set_values / with_values: String = "Values";
    }
}

impl<N, V> From<(N, V)> for Filter
where
    N: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from((name, values): (N, V)) -> Self {
        Filter::new().with_name(name).with_values(values)
    }
}

ec2_model! {
    /// A key/value tag. Builds from a `(key, value)` pair.
    pub struct Tag {
        one key / set_key / with_key: String = "Key";
        one value / set_value / with_value: String = "Value";
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Tag {
    fn from((key, value): (K, V)) -> Self {
        Tag::new().with_key(key).with_value(value)
    }
}

ec2_model! {
    /// Tags to apply to a resource while it is created.
    pub struct TagSpecification {
        one resource_type / set_resource_type / with_resource_type: ResourceType = "ResourceType";
        many tags / set_tags / with_tags: Tag = "Tags";
    }
}

impl<R, T> From<(R, T)> for TagSpecification
where
    R: Into<ResourceType>,
    T: IntoIterator,
    T::Item: Into<Tag>,
{
    fn from((resource_type, tags): (R, T)) -> Self {
        TagSpecification::new().with_resource_type(resource_type).with_tags(tags)
    }
}

ec2_model! {
    pub struct ProductCode {
        one product_code_id / set_product_code_id / with_product_code_id: String = "ProductCodeId";
        one product_code_type / set_product_code_type / with_product_code_type: ProductCodeValues = "ProductCodeType";
    }
}

ec2_model! {
    /// Why a resource last changed state, e.g. `Client.UserInitiatedShutdown`.
    pub struct StateReason {
        one code / set_code / with_code: String = "Code";
        one message / set_message / with_message: String = "Message";
    }
}

ec2_model! {
    pub struct GroupIdentifier {
        one group_name / set_group_name / with_group_name: String = "GroupName";
        one group_id / set_group_id / with_group_id: String = "GroupId";
    }
}

ec2_model! {
    /// Where an instance runs.
    pub struct Placement {
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        /// Affinity with a Dedicated Host (`default` or `host`).
        one affinity / set_affinity / with_affinity: String = "Affinity";
        one group_name / set_group_name / with_group_name: String = "GroupName";
        /// Partition number, only for `partition` placement groups.
        copy partition_number / set_partition_number / with_partition_number: i32 = "PartitionNumber";
        one host_id / set_host_id / with_host_id: String = "HostId";
        one tenancy / set_tenancy / with_tenancy: Tenancy = "Tenancy";
        one spread_domain / set_spread_domain / with_spread_domain: String = "SpreadDomain";
        one host_resource_group_arn / set_host_resource_group_arn / with_host_resource_group_arn: String = "HostResourceGroupArn";
    }
}

ec2_model! {
    /// Current state of an instance. The low byte of `code` is the state
    /// (`0` pending, `16` running, `32` shutting-down, `48` terminated,
    /// `64` stopping, `80` stopped); the high byte is internal to EC2.
    pub struct InstanceState {
        copy code / set_code / with_code: i32 = "Code";
        one name / set_name / with_name: InstanceStateName = "Name";
    }
}

ec2_model! {
    pub struct Monitoring {
        one state / set_state / with_state: MonitoringState = "State";
    }
}

ec2_model! {
    pub struct InstanceIpv6Address {
        one ipv6_address / set_ipv6_address / with_ipv6_address: String = "Ipv6Address";
    }
}

impl From<&str> for InstanceIpv6Address {
    fn from(address: &str) -> Self {
        InstanceIpv6Address::new().with_ipv6_address(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_from_pair() {
        let filter = Filter::from(("instance-state-name", ["running", "pending"]));
        assert_eq!(filter.name(), Some("instance-state-name"));
        assert_eq!(filter.values().unwrap(), ["running", "pending"]);
        assert_eq!(filter.to_string(), "{Name: instance-state-name, Values: [running, pending]}");
    }

    #[test]
    fn tag_hash_code() {
        let tag = Tag::from(("a", "b"));
        assert_eq!(tag.hash_code(), 31 * (31 + 97) + 98);
        assert_eq!(Tag::new().hash_code(), 31 * 31);
    }

    #[test]
    fn tag_specification_from_pair() {
        let spec = TagSpecification::from(("volume", [("Name", "data"), ("env", "prod")]));
        assert_eq!(spec.resource_type(), Some(&ResourceType::Volume));
        assert_eq!(spec.tags().map(<[Tag]>::len), Some(2));
        assert_eq!(
            spec.to_string(),
            "{ResourceType: volume, Tags: [{Key: Name, Value: data}, {Key: env, Value: prod}]}"
        );
    }

    #[test]
    fn enum_attribute_accepts_raw_and_symbolic_values() {
        let raw = Placement::new().with_tenancy("dedicated");
        let symbolic = Placement::new().with_tenancy(Tenancy::Dedicated);
        assert_eq!(raw, symbolic);
        assert_eq!(raw.hash_code(), symbolic.hash_code());
        assert_eq!(raw.tenancy().map(Tenancy::as_str), Some("dedicated"));
    }

    #[test]
    fn setters_take_raw_values_and_none() {
        let mut placement = Placement::new();
        placement.set_tenancy("dedicated");
        assert_eq!(placement.tenancy(), Some(&Tenancy::Dedicated));
        placement.set_tenancy(String::from("host"));
        assert_eq!(placement, Placement::new().with_tenancy(Tenancy::Host));
        placement.set_tenancy(Some(Tenancy::Default));
        assert_eq!(placement.tenancy(), Some(&Tenancy::Default));
        placement.set_tenancy(None);
        assert!(placement.tenancy().is_none());

        placement.set_availability_zone("us-east-1a");
        assert_eq!(placement.availability_zone(), Some("us-east-1a"));
        placement.set_availability_zone(None);
        assert_eq!(placement, Placement::new());

        let mut filter = Filter::new();
        filter.set_name("tag:Name");
        assert_eq!(filter, Filter::new().with_name("tag:Name"));
    }

    #[test]
    fn instance_state() {
        let state = InstanceState::new().with_code(16).with_name("running");
        assert_eq!(state.code(), Some(16));
        assert_eq!(state.name(), Some(&InstanceStateName::Running));
        assert_eq!(state.to_string(), "{Code: 16, Name: running}");
    }
}
