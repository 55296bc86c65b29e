use super::{
    CapacityReservationTarget, CapacityReservationTargetResponse, CreditSpecificationRequest,
    ElasticGpuSpecification, InstanceIpv6Address, PrivateIpAddressSpecification, Tag,
};
use crate::attribute::Timestamp;
use crate::types::*;

ec2_model! {
    pub struct LaunchTemplateIamInstanceProfileSpecificationRequest {
        one arn / set_arn / with_arn: String = "Arn";
        one name / set_name / with_name: String = "Name";
    }
}

ec2_model! {
    pub struct LaunchTemplateEbsBlockDeviceRequest {
        copy encrypted / set_encrypted / with_encrypted: bool = "Encrypted";
        copy delete_on_termination / set_delete_on_termination / with_delete_on_termination: bool = "DeleteOnTermination";
        copy iops / set_iops / with_iops: i32 = "Iops";
        one kms_key_id / set_kms_key_id / with_kms_key_id: String = "KmsKeyId";
        one snapshot_id / set_snapshot_id / with_snapshot_id: String = "SnapshotId";
        /// GiB.
        copy volume_size / set_volume_size / with_volume_size: i32 = "VolumeSize";
        one volume_type / set_volume_type / with_volume_type: VolumeType = "VolumeType";
    }
}

ec2_model! {
    pub struct LaunchTemplateBlockDeviceMappingRequest {
        one device_name / set_device_name / with_device_name: String = "DeviceName";
        one virtual_name / set_virtual_name / with_virtual_name: String = "VirtualName";
        one ebs / set_ebs / with_ebs: LaunchTemplateEbsBlockDeviceRequest = "Ebs";
        /// Suppresses the device named in the image's mapping.
        one no_device / set_no_device / with_no_device: String = "NoDevice";
    }
}

ec2_model! {
    pub struct InstanceIpv6AddressRequest {
        one ipv6_address / set_ipv6_address / with_ipv6_address: String = "Ipv6Address";
    }
}

impl From<&str> for InstanceIpv6AddressRequest {
    fn from(address: &str) -> Self {
        InstanceIpv6AddressRequest::new().with_ipv6_address(address)
    }
}

ec2_model! {
    pub struct LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
        copy associate_public_ip_address / set_associate_public_ip_address / with_associate_public_ip_address: bool = "AssociatePublicIpAddress";
        copy delete_on_termination / set_delete_on_termination / with_delete_on_termination: bool = "DeleteOnTermination";
        one description / set_description / with_description: String = "Description";
        copy device_index / set_device_index / with_device_index: i32 = "DeviceIndex";
        many groups / set_groups / with_groups: String = "Groups";
        one interface_type / set_interface_type / with_interface_type: String = "InterfaceType";
        copy ipv6_address_count / set_ipv6_address_count / with_ipv6_address_count: i32 = "Ipv6AddressCount";
        many ipv6_addresses / set_ipv6_addresses / with_ipv6_addresses: InstanceIpv6AddressRequest = "Ipv6Addresses";
        one network_interface_id / set_network_interface_id / with_network_interface_id: String = "NetworkInterfaceId";
        one private_ip_address / set_private_ip_address / with_private_ip_address: String = "PrivateIpAddress";
        many private_ip_addresses / set_private_ip_addresses / with_private_ip_addresses: PrivateIpAddressSpecification = "PrivateIpAddresses";
        copy secondary_private_ip_address_count / set_secondary_private_ip_address_count / with_secondary_private_ip_address_count: i32 = "SecondaryPrivateIpAddressCount";
        one subnet_id / set_subnet_id / with_subnet_id: String = "SubnetId";
    }
}

ec2_model! {
    pub struct LaunchTemplatesMonitoringRequest {
        copy enabled / set_enabled / with_enabled: bool = "Enabled";
    }
}

ec2_model! {
    pub struct LaunchTemplatePlacementRequest {
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        /// Host affinity, `default` or `host`.
        one affinity / set_affinity / with_affinity: String = "Affinity";
        one group_name / set_group_name / with_group_name: String = "GroupName";
        one host_id / set_host_id / with_host_id: String = "HostId";
        one tenancy / set_tenancy / with_tenancy: Tenancy = "Tenancy";
        one spread_domain / set_spread_domain / with_spread_domain: String = "SpreadDomain";
        one host_resource_group_arn / set_host_resource_group_arn / with_host_resource_group_arn: String = "HostResourceGroupArn";
        copy partition_number / set_partition_number / with_partition_number: i32 = "PartitionNumber";
    }
}

ec2_model! {
    /// Only `instance` and `volume` resources can be tagged at launch.
    pub struct LaunchTemplateTagSpecificationRequest {
        one resource_type / set_resource_type / with_resource_type: ResourceType = "ResourceType";
        many tags / set_tags / with_tags: Tag = "Tags";
    }
}

ec2_model! {
    pub struct LaunchTemplateElasticInferenceAccelerator {
        one r#type / set_type / with_type: String = "Type";
        copy count / set_count / with_count: i32 = "Count";
    }
}

ec2_model! {
    pub struct LaunchTemplateSpotMarketOptionsRequest {
        one max_price / set_max_price / with_max_price: String = "MaxPrice";
        one spot_instance_type / set_spot_instance_type / with_spot_instance_type: SpotInstanceType = "SpotInstanceType";
        copy block_duration_minutes / set_block_duration_minutes / with_block_duration_minutes: i32 = "BlockDurationMinutes";
        copy valid_until / set_valid_until / with_valid_until: Timestamp = "ValidUntil";
        one instance_interruption_behavior / set_instance_interruption_behavior / with_instance_interruption_behavior: InstanceInterruptionBehavior = "InstanceInterruptionBehavior";
    }
}

ec2_model! {
    pub struct LaunchTemplateInstanceMarketOptionsRequest {
        one market_type / set_market_type / with_market_type: MarketType = "MarketType";
        one spot_options / set_spot_options / with_spot_options: LaunchTemplateSpotMarketOptionsRequest = "SpotOptions";
    }
}

ec2_model! {
    pub struct LaunchTemplateCpuOptionsRequest {
        copy core_count / set_core_count / with_core_count: i32 = "CoreCount";
        copy threads_per_core / set_threads_per_core / with_threads_per_core: i32 = "ThreadsPerCore";
    }
}

ec2_model! {
    pub struct LaunchTemplateCapacityReservationSpecificationRequest {
        one capacity_reservation_preference / set_capacity_reservation_preference / with_capacity_reservation_preference: CapacityReservationPreference = "CapacityReservationPreference";
        one capacity_reservation_target / set_capacity_reservation_target / with_capacity_reservation_target: CapacityReservationTarget = "CapacityReservationTarget";
    }
}

ec2_model! {
    pub struct LaunchTemplateLicenseConfigurationRequest {
        one license_configuration_arn / set_license_configuration_arn / with_license_configuration_arn: String = "LicenseConfigurationArn";
    }
}

ec2_model! {
    pub struct LaunchTemplateHibernationOptionsRequest {
        copy configured / set_configured / with_configured: bool = "Configured";
    }
}

ec2_model! {
    pub struct LaunchTemplateInstanceMetadataOptionsRequest {
        one http_tokens / set_http_tokens / with_http_tokens: LaunchTemplateHttpTokensState = "HttpTokens";
        copy http_put_response_hop_limit / set_http_put_response_hop_limit / with_http_put_response_hop_limit: i32 = "HttpPutResponseHopLimit";
        one http_endpoint / set_http_endpoint / with_http_endpoint: LaunchTemplateInstanceMetadataEndpointState = "HttpEndpoint";
    }
}

ec2_model! {
    /// Launch parameters stored in a launch template, as sent to
    /// `CreateLaunchTemplate` and `CreateLaunchTemplateVersion`.
    ///
    /// Everything is optional here; whatever the template leaves out must be
    /// supplied by the `RunInstances` call that uses it.
    pub struct RequestLaunchTemplateData {
        one kernel_id / set_kernel_id / with_kernel_id: String = "KernelId";
        copy ebs_optimized / set_ebs_optimized / with_ebs_optimized: bool = "EbsOptimized";
        one iam_instance_profile / set_iam_instance_profile / with_iam_instance_profile: LaunchTemplateIamInstanceProfileSpecificationRequest = "IamInstanceProfile";
        many block_device_mappings / set_block_device_mappings / with_block_device_mappings: LaunchTemplateBlockDeviceMappingRequest = "BlockDeviceMappings";
        many network_interfaces / set_network_interfaces / with_network_interfaces: LaunchTemplateInstanceNetworkInterfaceSpecificationRequest = "NetworkInterfaces";
        one image_id / set_image_id / with_image_id: String = "ImageId";
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        one key_name / set_key_name / with_key_name: String = "KeyName";
        one monitoring / set_monitoring / with_monitoring: LaunchTemplatesMonitoringRequest = "Monitoring";
        one placement / set_placement / with_placement: LaunchTemplatePlacementRequest = "Placement";
        one ram_disk_id / set_ram_disk_id / with_ram_disk_id: String = "RamDiskId";
        copy disable_api_termination / set_disable_api_termination / with_disable_api_termination: bool = "DisableApiTermination";
        one instance_initiated_shutdown_behavior / set_instance_initiated_shutdown_behavior / with_instance_initiated_shutdown_behavior: ShutdownBehavior = "InstanceInitiatedShutdownBehavior";
        /// Base64-encoded, up to 16 KB before encoding.
        one user_data / set_user_data / with_user_data: String = "UserData";
        many tag_specifications / set_tag_specifications / with_tag_specifications: LaunchTemplateTagSpecificationRequest = "TagSpecifications";
        many elastic_gpu_specifications / set_elastic_gpu_specifications / with_elastic_gpu_specifications: ElasticGpuSpecification = "ElasticGpuSpecifications";
        many elastic_inference_accelerators / set_elastic_inference_accelerators / with_elastic_inference_accelerators: LaunchTemplateElasticInferenceAccelerator = "ElasticInferenceAccelerators";
        /// Not allowed together with network interfaces.
        many security_group_ids / set_security_group_ids / with_security_group_ids: String = "SecurityGroupIds";
        /// Default VPC only.
        many security_groups / set_security_groups / with_security_groups: String = "SecurityGroups";
        one instance_market_options / set_instance_market_options / with_instance_market_options: LaunchTemplateInstanceMarketOptionsRequest = "InstanceMarketOptions";
        one credit_specification / set_credit_specification / with_credit_specification: CreditSpecificationRequest = "CreditSpecification";
        one cpu_options / set_cpu_options / with_cpu_options: LaunchTemplateCpuOptionsRequest = "CpuOptions";
        one capacity_reservation_specification / set_capacity_reservation_specification / with_capacity_reservation_specification: LaunchTemplateCapacityReservationSpecificationRequest = "CapacityReservationSpecification";
        many license_specifications / set_license_specifications / with_license_specifications: LaunchTemplateLicenseConfigurationRequest = "LicenseSpecifications";
        one hibernation_options / set_hibernation_options / with_hibernation_options: LaunchTemplateHibernationOptionsRequest = "HibernationOptions";
        one metadata_options / set_metadata_options / with_metadata_options: LaunchTemplateInstanceMetadataOptionsRequest = "MetadataOptions";
    }
}

ec2_model! {
    pub struct LaunchTemplateIamInstanceProfileSpecification {
        one arn / set_arn / with_arn: String = "Arn";
        one name / set_name / with_name: String = "Name";
    }
}

ec2_model! {
    pub struct LaunchTemplateEbsBlockDevice {
        copy encrypted / set_encrypted / with_encrypted: bool = "Encrypted";
        copy delete_on_termination / set_delete_on_termination / with_delete_on_termination: bool = "DeleteOnTermination";
        copy iops / set_iops / with_iops: i32 = "Iops";
        one kms_key_id / set_kms_key_id / with_kms_key_id: String = "KmsKeyId";
        one snapshot_id / set_snapshot_id / with_snapshot_id: String = "SnapshotId";
        copy volume_size / set_volume_size / with_volume_size: i32 = "VolumeSize";
        one volume_type / set_volume_type / with_volume_type: VolumeType = "VolumeType";
    }
}

ec2_model! {
    pub struct LaunchTemplateBlockDeviceMapping {
        one device_name / set_device_name / with_device_name: String = "DeviceName";
        one virtual_name / set_virtual_name / with_virtual_name: String = "VirtualName";
        one ebs / set_ebs / with_ebs: LaunchTemplateEbsBlockDevice = "Ebs";
        one no_device / set_no_device / with_no_device: String = "NoDevice";
    }
}

ec2_model! {
    pub struct LaunchTemplateInstanceNetworkInterfaceSpecification {
        copy associate_public_ip_address / set_associate_public_ip_address / with_associate_public_ip_address: bool = "AssociatePublicIpAddress";
        copy delete_on_termination / set_delete_on_termination / with_delete_on_termination: bool = "DeleteOnTermination";
        one description / set_description / with_description: String = "Description";
        copy device_index / set_device_index / with_device_index: i32 = "DeviceIndex";
        many groups / set_groups / with_groups: String = "Groups";
        one interface_type / set_interface_type / with_interface_type: String = "InterfaceType";
        copy ipv6_address_count / set_ipv6_address_count / with_ipv6_address_count: i32 = "Ipv6AddressCount";
        many ipv6_addresses / set_ipv6_addresses / with_ipv6_addresses: InstanceIpv6Address = "Ipv6Addresses";
        one network_interface_id / set_network_interface_id / with_network_interface_id: String = "NetworkInterfaceId";
        one private_ip_address / set_private_ip_address / with_private_ip_address: String = "PrivateIpAddress";
        many private_ip_addresses / set_private_ip_addresses / with_private_ip_addresses: PrivateIpAddressSpecification = "PrivateIpAddresses";
        copy secondary_private_ip_address_count / set_secondary_private_ip_address_count / with_secondary_private_ip_address_count: i32 = "SecondaryPrivateIpAddressCount";
        one subnet_id / set_subnet_id / with_subnet_id: String = "SubnetId";
    }
}

ec2_model! {
    pub struct LaunchTemplatesMonitoring {
        copy enabled / set_enabled / with_enabled: bool = "Enabled";
    }
}

ec2_model! {
    pub struct LaunchTemplatePlacement {
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        one affinity / set_affinity / with_affinity: String = "Affinity";
        one group_name / set_group_name / with_group_name: String = "GroupName";
        one host_id / set_host_id / with_host_id: String = "HostId";
        one tenancy / set_tenancy / with_tenancy: Tenancy = "Tenancy";
        one spread_domain / set_spread_domain / with_spread_domain: String = "SpreadDomain";
        one host_resource_group_arn / set_host_resource_group_arn / with_host_resource_group_arn: String = "HostResourceGroupArn";
        copy partition_number / set_partition_number / with_partition_number: i32 = "PartitionNumber";
    }
}

ec2_model! {
    pub struct LaunchTemplateTagSpecification {
        one resource_type / set_resource_type / with_resource_type: ResourceType = "ResourceType";
        many tags / set_tags / with_tags: Tag = "Tags";
    }
}

ec2_model! {
    pub struct ElasticGpuSpecificationResponse {
        one r#type / set_type / with_type: String = "Type";
    }
}

ec2_model! {
    pub struct LaunchTemplateElasticInferenceAcceleratorResponse {
        one r#type / set_type / with_type: String = "Type";
        copy count / set_count / with_count: i32 = "Count";
    }
}

ec2_model! {
    pub struct LaunchTemplateSpotMarketOptions {
        one max_price / set_max_price / with_max_price: String = "MaxPrice";
        one spot_instance_type / set_spot_instance_type / with_spot_instance_type: SpotInstanceType = "SpotInstanceType";
        copy block_duration_minutes / set_block_duration_minutes / with_block_duration_minutes: i32 = "BlockDurationMinutes";
        copy valid_until / set_valid_until / with_valid_until: Timestamp = "ValidUntil";
        one instance_interruption_behavior / set_instance_interruption_behavior / with_instance_interruption_behavior: InstanceInterruptionBehavior = "InstanceInterruptionBehavior";
    }
}

ec2_model! {
    pub struct LaunchTemplateInstanceMarketOptions {
        one market_type / set_market_type / with_market_type: MarketType = "MarketType";
        one spot_options / set_spot_options / with_spot_options: LaunchTemplateSpotMarketOptions = "SpotOptions";
    }
}

ec2_model! {
    pub struct CreditSpecification {
        one cpu_credits / set_cpu_credits / with_cpu_credits: String = "CpuCredits";
    }
}

ec2_model! {
    pub struct LaunchTemplateCpuOptions {
        copy core_count / set_core_count / with_core_count: i32 = "CoreCount";
        copy threads_per_core / set_threads_per_core / with_threads_per_core: i32 = "ThreadsPerCore";
    }
}

ec2_model! {
    pub struct LaunchTemplateCapacityReservationSpecificationResponse {
        one capacity_reservation_preference / set_capacity_reservation_preference / with_capacity_reservation_preference: CapacityReservationPreference = "CapacityReservationPreference";
        one capacity_reservation_target / set_capacity_reservation_target / with_capacity_reservation_target: CapacityReservationTargetResponse = "CapacityReservationTarget";
    }
}

ec2_model! {
    pub struct LaunchTemplateLicenseConfiguration {
        one license_configuration_arn / set_license_configuration_arn / with_license_configuration_arn: String = "LicenseConfigurationArn";
    }
}

ec2_model! {
    pub struct LaunchTemplateHibernationOptions {
        copy configured / set_configured / with_configured: bool = "Configured";
    }
}

ec2_model! {
    pub struct LaunchTemplateInstanceMetadataOptions {
        /// `pending` until the options apply to running instances.
        one state / set_state / with_state: LaunchTemplateInstanceMetadataOptionsState = "State";
        one http_tokens / set_http_tokens / with_http_tokens: LaunchTemplateHttpTokensState = "HttpTokens";
        copy http_put_response_hop_limit / set_http_put_response_hop_limit / with_http_put_response_hop_limit: i32 = "HttpPutResponseHopLimit";
        one http_endpoint / set_http_endpoint / with_http_endpoint: LaunchTemplateInstanceMetadataEndpointState = "HttpEndpoint";
    }
}

ec2_model! {
    /// Launch parameters of a launch template version, as returned by
    /// `DescribeLaunchTemplateVersions`.
    pub struct ResponseLaunchTemplateData {
        one kernel_id / set_kernel_id / with_kernel_id: String = "KernelId";
        copy ebs_optimized / set_ebs_optimized / with_ebs_optimized: bool = "EbsOptimized";
        one iam_instance_profile / set_iam_instance_profile / with_iam_instance_profile: LaunchTemplateIamInstanceProfileSpecification = "IamInstanceProfile";
        many block_device_mappings / set_block_device_mappings / with_block_device_mappings: LaunchTemplateBlockDeviceMapping = "BlockDeviceMappings";
        many network_interfaces / set_network_interfaces / with_network_interfaces: LaunchTemplateInstanceNetworkInterfaceSpecification = "NetworkInterfaces";
        one image_id / set_image_id / with_image_id: String = "ImageId";
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        one key_name / set_key_name / with_key_name: String = "KeyName";
        one monitoring / set_monitoring / with_monitoring: LaunchTemplatesMonitoring = "Monitoring";
        one placement / set_placement / with_placement: LaunchTemplatePlacement = "Placement";
        one ram_disk_id / set_ram_disk_id / with_ram_disk_id: String = "RamDiskId";
        copy disable_api_termination / set_disable_api_termination / with_disable_api_termination: bool = "DisableApiTermination";
        one instance_initiated_shutdown_behavior / set_instance_initiated_shutdown_behavior / with_instance_initiated_shutdown_behavior: ShutdownBehavior = "InstanceInitiatedShutdownBehavior";
        one user_data / set_user_data / with_user_data: String = "UserData";
        many tag_specifications / set_tag_specifications / with_tag_specifications: LaunchTemplateTagSpecification = "TagSpecifications";
        many elastic_gpu_specifications / set_elastic_gpu_specifications / with_elastic_gpu_specifications: ElasticGpuSpecificationResponse = "ElasticGpuSpecifications";
        many elastic_inference_accelerators / set_elastic_inference_accelerators / with_elastic_inference_accelerators: LaunchTemplateElasticInferenceAcceleratorResponse = "ElasticInferenceAccelerators";
        many security_group_ids / set_security_group_ids / with_security_group_ids: String = "SecurityGroupIds";
        many security_groups / set_security_groups / with_security_groups: String = "SecurityGroups";
        one instance_market_options / set_instance_market_options / with_instance_market_options: LaunchTemplateInstanceMarketOptions = "InstanceMarketOptions";
        one credit_specification / set_credit_specification / with_credit_specification: CreditSpecification = "CreditSpecification";
        one cpu_options / set_cpu_options / with_cpu_options: LaunchTemplateCpuOptions = "CpuOptions";
        one capacity_reservation_specification / set_capacity_reservation_specification / with_capacity_reservation_specification: LaunchTemplateCapacityReservationSpecificationResponse = "CapacityReservationSpecification";
        many license_specifications / set_license_specifications / with_license_specifications: LaunchTemplateLicenseConfiguration = "LicenseSpecifications";
        one hibernation_options / set_hibernation_options / with_hibernation_options: LaunchTemplateHibernationOptions = "HibernationOptions";
        one metadata_options / set_metadata_options / with_metadata_options: LaunchTemplateInstanceMetadataOptions = "MetadataOptions";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    // `aws ec2 describe-launch-template-versions`, one version's LaunchTemplateData.
    const TEMPLATE_DATA: &str = r#"{
        "ImageId": "ami-0ff8a91507f77f867",
        "InstanceType": "t3.micro",
        "KeyName": "ops",
        "EbsOptimized": false,
        "BlockDeviceMappings": [
            {"DeviceName": "/dev/xvda", "Ebs": {"VolumeSize": 20, "VolumeType": "gp2", "DeleteOnTermination": true}}
        ],
        "NetworkInterfaces": [
            {"DeviceIndex": 0, "AssociatePublicIpAddress": true, "Groups": ["sg-7c227019"], "SubnetId": "subnet-7b16de0c"}
        ],
        "TagSpecifications": [
            {"ResourceType": "instance", "Tags": [{"Key": "Name", "Value": "web"}]}
        ],
        "CreditSpecification": {"CpuCredits": "unlimited"},
        "MetadataOptions": {"State": "applied", "HttpTokens": "required", "HttpPutResponseHopLimit": 2, "HttpEndpoint": "enabled"}
    }"#;

    #[test]
    fn response_template_data_fixture() {
        let data = match ResponseLaunchTemplateData::from_json(TEMPLATE_DATA) {
            Ok(data) => data,
            Err(err) => panic!("{err:#}"),
        };
        assert_eq!(data.instance_type(), Some(&InstanceType::T3Micro));
        assert_eq!(data.ebs_optimized(), Some(false));
        let ebs = data.block_device_mappings().unwrap()[0].ebs().unwrap();
        assert_eq!(ebs.volume_size(), Some(20));
        assert_eq!(ebs.volume_type(), Some(&VolumeType::Gp2));
        let eni = &data.network_interfaces().unwrap()[0];
        assert_eq!(eni.groups().unwrap(), ["sg-7c227019"]);
        assert_eq!(
            data.tag_specifications().unwrap()[0].resource_type(),
            Some(&ResourceType::Instance)
        );
        let metadata = data.metadata_options().unwrap();
        assert_eq!(metadata.state(), Some(&LaunchTemplateInstanceMetadataOptionsState::Applied));
        assert_eq!(metadata.http_tokens(), Some(&LaunchTemplateHttpTokensState::Required));
        assert!(data.placement().is_none());
        assert!(data.security_group_ids().is_none());
    }

    #[test]
    fn request_template_data() {
        let data = RequestLaunchTemplateData::new()
            .with_image_id("ami-1")
            .with_instance_type("c5.large")
            .with_ram_disk_id("ari-1")
            .with_network_interfaces([LaunchTemplateInstanceNetworkInterfaceSpecificationRequest::new()
                .with_device_index(0)
                .with_ipv6_addresses(["2001:db8::1"])])
            .with_credit_specification(CreditSpecificationRequest::new().with_cpu_credits("standard"))
            .with_security_group_ids(["sg-1"]);
        assert_eq!(
            data.to_string(),
            "{NetworkInterfaces: [{DeviceIndex: 0, Ipv6Addresses: [{Ipv6Address: 2001:db8::1}]}], \
             ImageId: ami-1, InstanceType: c5.large, RamDiskId: ari-1, \
             SecurityGroupIds: [sg-1], CreditSpecification: {CpuCredits: standard}}"
        );
        match data.to_json() {
            Ok(json) => {
                assert!(json.contains(r#""RamDiskId":"ari-1""#), "{json}");
                assert_eq!(RequestLaunchTemplateData::from_json(&json).unwrap(), data);
            }
            Err(err) => panic!("{err:#}"),
        }
    }
}
