use super::{
    GroupIdentifier, InstanceBlockDeviceMapping, InstanceIpv6Address, InstanceState, Monitoring,
    Placement, ProductCode, StateReason, Tag,
};
use crate::attribute::Timestamp;
use crate::types::*;

ec2_model! {
    pub struct IamInstanceProfile {
        one arn / set_arn / with_arn: String = "Arn";
        one id / set_id / with_id: String = "Id";
    }
}

ec2_model! {
    pub struct ElasticGpuAssociation {
        one elastic_gpu_id / set_elastic_gpu_id / with_elastic_gpu_id: String = "ElasticGpuId";
        one elastic_gpu_association_id / set_elastic_gpu_association_id / with_elastic_gpu_association_id: String = "ElasticGpuAssociationId";
        one elastic_gpu_association_state / set_elastic_gpu_association_state / with_elastic_gpu_association_state: String = "ElasticGpuAssociationState";
        /// Kept as the service sends it; EC2 documents no format for it.
        one elastic_gpu_association_time / set_elastic_gpu_association_time / with_elastic_gpu_association_time: String = "ElasticGpuAssociationTime";
    }
}

ec2_model! {
    pub struct ElasticInferenceAcceleratorAssociation {
        one elastic_inference_accelerator_arn / set_elastic_inference_accelerator_arn / with_elastic_inference_accelerator_arn: String = "ElasticInferenceAcceleratorArn";
        one elastic_inference_accelerator_association_id / set_elastic_inference_accelerator_association_id / with_elastic_inference_accelerator_association_id: String = "ElasticInferenceAcceleratorAssociationId";
        one elastic_inference_accelerator_association_state / set_elastic_inference_accelerator_association_state / with_elastic_inference_accelerator_association_state: String = "ElasticInferenceAcceleratorAssociationState";
        copy elastic_inference_accelerator_association_time / set_elastic_inference_accelerator_association_time / with_elastic_inference_accelerator_association_time: Timestamp = "ElasticInferenceAcceleratorAssociationTime";
    }
}

ec2_model! {
    /// A network interface attached to an instance.
    pub struct InstanceNetworkInterface {
        one description / set_description / with_description: String = "Description";
        many groups / set_groups / with_groups: GroupIdentifier = "Groups";
        many ipv6_addresses / set_ipv6_addresses / with_ipv6_addresses: InstanceIpv6Address = "Ipv6Addresses";
        one mac_address / set_mac_address / with_mac_address: String = "MacAddress";
        one network_interface_id / set_network_interface_id / with_network_interface_id: String = "NetworkInterfaceId";
        one owner_id / set_owner_id / with_owner_id: String = "OwnerId";
        one private_dns_name / set_private_dns_name / with_private_dns_name: String = "PrivateDnsName";
        one private_ip_address / set_private_ip_address / with_private_ip_address: String = "PrivateIpAddress";
        copy source_dest_check / set_source_dest_check / with_source_dest_check: bool = "SourceDestCheck";
        one status / set_status / with_status: NetworkInterfaceStatus = "Status";
        one subnet_id / set_subnet_id / with_subnet_id: String = "SubnetId";
        one vpc_id / set_vpc_id / with_vpc_id: String = "VpcId";
        /// `interface` or `efa`.
        one interface_type / set_interface_type / with_interface_type: String = "InterfaceType";
    }
}

ec2_model! {
    pub struct CpuOptions {
        copy core_count / set_core_count / with_core_count: i32 = "CoreCount";
        copy threads_per_core / set_threads_per_core / with_threads_per_core: i32 = "ThreadsPerCore";
    }
}

ec2_model! {
    pub struct CapacityReservationTargetResponse {
        one capacity_reservation_id / set_capacity_reservation_id / with_capacity_reservation_id: String = "CapacityReservationId";
    }
}

ec2_model! {
    /// The Capacity Reservation targeting option an instance was launched with.
    pub struct CapacityReservationSpecificationResponse {
        one capacity_reservation_preference / set_capacity_reservation_preference / with_capacity_reservation_preference: CapacityReservationPreference = "CapacityReservationPreference";
        one capacity_reservation_target / set_capacity_reservation_target / with_capacity_reservation_target: CapacityReservationTargetResponse = "CapacityReservationTarget";
    }
}

ec2_model! {
    pub struct HibernationOptions {
        copy configured / set_configured / with_configured: bool = "Configured";
    }
}

ec2_model! {
    pub struct LicenseConfiguration {
        one license_configuration_arn / set_license_configuration_arn / with_license_configuration_arn: String = "LicenseConfigurationArn";
    }
}

ec2_model! {
    pub struct InstanceMetadataOptionsResponse {
        /// `applied` once the options have taken effect on the instance.
        one state / set_state / with_state: InstanceMetadataOptionsState = "State";
        one http_tokens / set_http_tokens / with_http_tokens: HttpTokensState = "HttpTokens";
        /// 1 to 64.
        copy http_put_response_hop_limit / set_http_put_response_hop_limit / with_http_put_response_hop_limit: i32 = "HttpPutResponseHopLimit";
        one http_endpoint / set_http_endpoint / with_http_endpoint: InstanceMetadataEndpointState = "HttpEndpoint";
    }
}

ec2_model! {
    /// An EC2 instance as returned by `DescribeInstances` and `RunInstances`.
    pub struct Instance {
        /// Position of the instance in its launch group.
        copy ami_launch_index / set_ami_launch_index / with_ami_launch_index: i32 = "AmiLaunchIndex";
        one image_id / set_image_id / with_image_id: String = "ImageId";
        one instance_id / set_instance_id / with_instance_id: String = "InstanceId";
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        one kernel_id / set_kernel_id / with_kernel_id: String = "KernelId";
        one key_name / set_key_name / with_key_name: String = "KeyName";
        copy launch_time / set_launch_time / with_launch_time: Timestamp = "LaunchTime";
        one monitoring / set_monitoring / with_monitoring: Monitoring = "Monitoring";
        one placement / set_placement / with_placement: Placement = "Placement";
        /// `Windows` for Windows instances, absent otherwise.
        one platform / set_platform / with_platform: PlatformValues = "Platform";
        /// Only set while the instance is running, and only for the VPC's DNS hostnames.
        one private_dns_name / set_private_dns_name / with_private_dns_name: String = "PrivateDnsName";
        one private_ip_address / set_private_ip_address / with_private_ip_address: String = "PrivateIpAddress";
        many product_codes / set_product_codes / with_product_codes: ProductCode = "ProductCodes";
        one public_dns_name / set_public_dns_name / with_public_dns_name: String = "PublicDnsName";
        one public_ip_address / set_public_ip_address / with_public_ip_address: String = "PublicIpAddress";
        one ramdisk_id / set_ramdisk_id / with_ramdisk_id: String = "RamdiskId";
        one state / set_state / with_state: InstanceState = "State";
        one state_transition_reason / set_state_transition_reason / with_state_transition_reason: String = "StateTransitionReason";
        one subnet_id / set_subnet_id / with_subnet_id: String = "SubnetId";
        one vpc_id / set_vpc_id / with_vpc_id: String = "VpcId";
        one architecture / set_architecture / with_architecture: ArchitectureValues = "Architecture";
        many block_device_mappings / set_block_device_mappings / with_block_device_mappings: InstanceBlockDeviceMapping = "BlockDeviceMappings";
        one client_token / set_client_token / with_client_token: String = "ClientToken";
        copy ebs_optimized / set_ebs_optimized / with_ebs_optimized: bool = "EbsOptimized";
        copy ena_support / set_ena_support / with_ena_support: bool = "EnaSupport";
        one hypervisor / set_hypervisor / with_hypervisor: HypervisorType = "Hypervisor";
        one iam_instance_profile / set_iam_instance_profile / with_iam_instance_profile: IamInstanceProfile = "IamInstanceProfile";
        one instance_lifecycle / set_instance_lifecycle / with_instance_lifecycle: InstanceLifecycleType = "InstanceLifecycle";
        many elastic_gpu_associations / set_elastic_gpu_associations / with_elastic_gpu_associations: ElasticGpuAssociation = "ElasticGpuAssociations";
        many elastic_inference_accelerator_associations / set_elastic_inference_accelerator_associations / with_elastic_inference_accelerator_associations: ElasticInferenceAcceleratorAssociation = "ElasticInferenceAcceleratorAssociations";
        many network_interfaces / set_network_interfaces / with_network_interfaces: InstanceNetworkInterface = "NetworkInterfaces";
        one outpost_arn / set_outpost_arn / with_outpost_arn: String = "OutpostArn";
        one root_device_name / set_root_device_name / with_root_device_name: String = "RootDeviceName";
        one root_device_type / set_root_device_type / with_root_device_type: DeviceType = "RootDeviceType";
        many security_groups / set_security_groups / with_security_groups: GroupIdentifier = "SecurityGroups";
        copy source_dest_check / set_source_dest_check / with_source_dest_check: bool = "SourceDestCheck";
        one spot_instance_request_id / set_spot_instance_request_id / with_spot_instance_request_id: String = "SpotInstanceRequestId";
        one sriov_net_support / set_sriov_net_support / with_sriov_net_support: String = "SriovNetSupport";
        one state_reason / set_state_reason / with_state_reason: StateReason = "StateReason";
        many tags / set_tags / with_tags: Tag = "Tags";
        one virtualization_type / set_virtualization_type / with_virtualization_type: VirtualizationType = "VirtualizationType";
        one cpu_options / set_cpu_options / with_cpu_options: CpuOptions = "CpuOptions";
        one capacity_reservation_id / set_capacity_reservation_id / with_capacity_reservation_id: String = "CapacityReservationId";
        one capacity_reservation_specification / set_capacity_reservation_specification / with_capacity_reservation_specification: CapacityReservationSpecificationResponse = "CapacityReservationSpecification";
        one hibernation_options / set_hibernation_options / with_hibernation_options: HibernationOptions = "HibernationOptions";
        many licenses / set_licenses / with_licenses: LicenseConfiguration = "Licenses";
        one metadata_options / set_metadata_options / with_metadata_options: InstanceMetadataOptionsResponse = "MetadataOptions";
    }
}

impl Instance {
    /// Value of the tag with the given key, if the instance carries it.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags()?.iter().find(|t| t.key() == Some(key))?.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use chrono::{TimeZone, Utc};

    const DESCRIBE_INSTANCES_ITEM: &str = r#"{
        "AmiLaunchIndex": 0,
        "ImageId": "ami-0abcdef1234567890",
        "InstanceId": "i-1234567890abcdef0",
        "InstanceType": "t3.micro",
        "KeyName": "MyKeyPair",
        "LaunchTime": "2018-05-10T08:05:20Z",
        "Monitoring": { "State": "disabled" },
        "Placement": { "AvailabilityZone": "us-east-2a", "GroupName": "", "Tenancy": "default" },
        "PrivateIpAddress": "10.0.0.157",
        "ProductCodes": [],
        "State": { "Code": 16, "Name": "running" },
        "Architecture": "x86_64",
        "EbsOptimized": false,
        "Hypervisor": "xen",
        "RootDeviceType": "ebs",
        "SecurityGroups": [{ "GroupName": "my-sg", "GroupId": "sg-0abc" }],
        "Tags": [{ "Key": "Name", "Value": "web 01" }],
        "PlatformDetails": "Linux/UNIX",
        "VirtualizationType": "hvm",
        "MetadataOptions": { "State": "applied", "HttpTokens": "optional", "HttpPutResponseHopLimit": 1, "HttpEndpoint": "enabled" }
    }"#;

    #[test]
    fn parse_cli_instance_succeeds() {
        match Instance::from_json(DESCRIBE_INSTANCES_ITEM) {
            Ok(instance) => {
                assert_eq!(instance.instance_type(), Some(&InstanceType::T3Micro));
                assert_eq!(
                    instance.launch_time(),
                    Some(Utc.with_ymd_and_hms(2018, 5, 10, 8, 5, 20).unwrap())
                );
                assert_eq!(
                    instance.state().and_then(InstanceState::name),
                    Some(&InstanceStateName::Running)
                );
                assert_eq!(instance.tag("Name"), Some("web 01"));
                assert_eq!(instance.tag("env"), None);
                // an empty list in the document is present-but-empty
                assert_eq!(instance.product_codes().map(<[ProductCode]>::len), Some(0));
                assert!(instance.platform().is_none());
                assert_eq!(
                    instance.metadata_options().and_then(InstanceMetadataOptionsResponse::http_put_response_hop_limit),
                    Some(1)
                );
            }
            Err(err) => panic!("{err:#}"),
        }
    }

    #[test]
    fn json_skips_absent_attributes() {
        let instance = Instance::new().with_instance_id("i-1").with_tags([("Name", "web")]);
        let json = instance.to_json().unwrap();
        assert_eq!(json, r#"{"InstanceId":"i-1","Tags":[{"Key":"Name","Value":"web"}]}"#);
        assert_eq!(Instance::from_json(&json).unwrap(), instance);
    }

    #[test]
    fn unknown_instance_type_survives_round_trip() {
        let instance = Instance::from_json(r#"{"InstanceType":"m7i.large"}"#).unwrap();
        assert_eq!(
            instance.instance_type(),
            Some(&InstanceType::Unknown("m7i.large".to_string()))
        );
        assert_eq!(instance.to_json().unwrap(), r#"{"InstanceType":"m7i.large"}"#);
    }

    #[test]
    fn bad_document_reports_model() {
        match Instance::from_json(r#"{"AmiLaunchIndex": "zero"}"#) {
            Ok(_) => panic!("accepted a string launch index"),
            Err(err) => assert!(f!("{err:#}").starts_with("can't parse Instance document")),
        }
    }
}
