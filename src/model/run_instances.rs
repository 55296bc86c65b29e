use super::{BlockDeviceMapping, InstanceIpv6Address, Placement, TagSpecification};
use crate::attribute::Timestamp;
use crate::types::*;

ec2_model! {
    pub struct RunInstancesMonitoringEnabled {
        copy enabled / set_enabled / with_enabled: bool = "Enabled";
    }
}

ec2_model! {
    pub struct IamInstanceProfileSpecification {
        one arn / set_arn / with_arn: String = "Arn";
        one name / set_name / with_name: String = "Name";
    }
}

ec2_model! {
    pub struct PrivateIpAddressSpecification {
        /// Only one address of an interface can be primary.
        copy primary / set_primary / with_primary: bool = "Primary";
        one private_ip_address / set_private_ip_address / with_private_ip_address: String = "PrivateIpAddress";
    }
}

ec2_model! {
    /// A network interface to create or attach at launch.
    pub struct InstanceNetworkInterfaceSpecification {
        /// Only for a new interface at device index 0.
        copy associate_public_ip_address / set_associate_public_ip_address / with_associate_public_ip_address: bool = "AssociatePublicIpAddress";
        copy delete_on_termination / set_delete_on_termination / with_delete_on_termination: bool = "DeleteOnTermination";
        one description / set_description / with_description: String = "Description";
        /// Required when `network_interface_id` is set.
        copy device_index / set_device_index / with_device_index: i32 = "DeviceIndex";
        many groups / set_groups / with_groups: String = "Groups";
        copy ipv6_address_count / set_ipv6_address_count / with_ipv6_address_count: i32 = "Ipv6AddressCount";
        many ipv6_addresses / set_ipv6_addresses / with_ipv6_addresses: InstanceIpv6Address = "Ipv6Addresses";
        one network_interface_id / set_network_interface_id / with_network_interface_id: String = "NetworkInterfaceId";
        one private_ip_address / set_private_ip_address / with_private_ip_address: String = "PrivateIpAddress";
        many private_ip_addresses / set_private_ip_addresses / with_private_ip_addresses: PrivateIpAddressSpecification = "PrivateIpAddresses";
        copy secondary_private_ip_address_count / set_secondary_private_ip_address_count / with_secondary_private_ip_address_count: i32 = "SecondaryPrivateIpAddressCount";
        one subnet_id / set_subnet_id / with_subnet_id: String = "SubnetId";
        /// `efa` for an Elastic Fabric Adapter, absent otherwise.
        one interface_type / set_interface_type / with_interface_type: String = "InterfaceType";
    }
}

ec2_model! {
    pub struct ElasticGpuSpecification {
        /// e.g. `eg1.medium`.
        one r#type / set_type / with_type: String = "Type";
    }
}

ec2_model! {
    pub struct ElasticInferenceAccelerator {
        /// `eia1.medium`, `eia1.large` or `eia1.xlarge`.
        one r#type / set_type / with_type: String = "Type";
        copy count / set_count / with_count: i32 = "Count";
    }
}

ec2_model! {
    /// Launch template to take parameters from; id or name, not both.
    pub struct LaunchTemplateSpecification {
        one launch_template_id / set_launch_template_id / with_launch_template_id: String = "LaunchTemplateId";
        one launch_template_name / set_launch_template_name / with_launch_template_name: String = "LaunchTemplateName";
        /// A version number, `$Latest` or `$Default`. Defaults to `$Default`.
        one version / set_version / with_version: String = "Version";
    }
}

ec2_model! {
    pub struct SpotMarketOptions {
        /// Defaults to the On-Demand price.
        one max_price / set_max_price / with_max_price: String = "MaxPrice";
        one spot_instance_type / set_spot_instance_type / with_spot_instance_type: SpotInstanceType = "SpotInstanceType";
        /// Multiple of 60, up to 360.
        copy block_duration_minutes / set_block_duration_minutes / with_block_duration_minutes: i32 = "BlockDurationMinutes";
        copy valid_until / set_valid_until / with_valid_until: Timestamp = "ValidUntil";
        one instance_interruption_behavior / set_instance_interruption_behavior / with_instance_interruption_behavior: InstanceInterruptionBehavior = "InstanceInterruptionBehavior";
    }
}

ec2_model! {
    pub struct InstanceMarketOptionsRequest {
        one market_type / set_market_type / with_market_type: MarketType = "MarketType";
        one spot_options / set_spot_options / with_spot_options: SpotMarketOptions = "SpotOptions";
    }
}

ec2_model! {
    pub struct CreditSpecificationRequest {
        /// `standard` or `unlimited`, for burstable instances.
        one cpu_credits / set_cpu_credits / with_cpu_credits: String = "CpuCredits";
    }
}

ec2_model! {
    pub struct CpuOptionsRequest {
        copy core_count / set_core_count / with_core_count: i32 = "CoreCount";
        /// 1 disables multithreading.
        copy threads_per_core / set_threads_per_core / with_threads_per_core: i32 = "ThreadsPerCore";
    }
}

ec2_model! {
    pub struct CapacityReservationTarget {
        one capacity_reservation_id / set_capacity_reservation_id / with_capacity_reservation_id: String = "CapacityReservationId";
    }
}

ec2_model! {
    /// Either a preference or a target.
    pub struct CapacityReservationSpecification {
        one capacity_reservation_preference / set_capacity_reservation_preference / with_capacity_reservation_preference: CapacityReservationPreference = "CapacityReservationPreference";
        one capacity_reservation_target / set_capacity_reservation_target / with_capacity_reservation_target: CapacityReservationTarget = "CapacityReservationTarget";
    }
}

ec2_model! {
    pub struct HibernationOptionsRequest {
        copy configured / set_configured / with_configured: bool = "Configured";
    }
}

ec2_model! {
    pub struct LicenseConfigurationRequest {
        one license_configuration_arn / set_license_configuration_arn / with_license_configuration_arn: String = "LicenseConfigurationArn";
    }
}

ec2_model! {
    pub struct InstanceMetadataOptionsRequest {
        /// Defaults to `optional`.
        one http_tokens / set_http_tokens / with_http_tokens: HttpTokensState = "HttpTokens";
        /// 1 to 64; defaults to 1.
        copy http_put_response_hop_limit / set_http_put_response_hop_limit / with_http_put_response_hop_limit: i32 = "HttpPutResponseHopLimit";
        one http_endpoint / set_http_endpoint / with_http_endpoint: InstanceMetadataEndpointState = "HttpEndpoint";
    }
}

ec2_model! {
    /// Parameters of `RunInstances`.
    ///
    /// EC2 launches up to `max_count` and at least `min_count` instances, or
    /// none at all.
    pub struct RunInstancesRequest {
        many block_device_mappings / set_block_device_mappings / with_block_device_mappings: BlockDeviceMapping = "BlockDeviceMappings";
        /// Required unless the launch template supplies it.
        one image_id / set_image_id / with_image_id: String = "ImageId";
        /// Defaults to `m1.small`.
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        /// Not with `ipv6_addresses`.
        copy ipv6_address_count / set_ipv6_address_count / with_ipv6_address_count: i32 = "Ipv6AddressCount";
        many ipv6_addresses / set_ipv6_addresses / with_ipv6_addresses: InstanceIpv6Address = "Ipv6Addresses";
        one kernel_id / set_kernel_id / with_kernel_id: String = "KernelId";
        one key_name / set_key_name / with_key_name: String = "KeyName";
        copy max_count / set_max_count / with_max_count: i32 = "MaxCount";
        copy min_count / set_min_count / with_min_count: i32 = "MinCount";
        one monitoring / set_monitoring / with_monitoring: RunInstancesMonitoringEnabled = "Monitoring";
        one placement / set_placement / with_placement: Placement = "Placement";
        one ramdisk_id / set_ramdisk_id / with_ramdisk_id: String = "RamdiskId";
        many security_group_ids / set_security_group_ids / with_security_group_ids: String = "SecurityGroupIds";
        /// Names; default VPC only.
        many security_groups / set_security_groups / with_security_groups: String = "SecurityGroups";
        one subnet_id / set_subnet_id / with_subnet_id: String = "SubnetId";
        /// Base64-encoded, up to 16 KB before encoding. Stored as given.
        one user_data / set_user_data / with_user_data: String = "UserData";
        one additional_info / set_additional_info / with_additional_info: String = "AdditionalInfo";
        one client_token / set_client_token / with_client_token: String = "ClientToken";
        copy disable_api_termination / set_disable_api_termination / with_disable_api_termination: bool = "DisableApiTermination";
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
        copy ebs_optimized / set_ebs_optimized / with_ebs_optimized: bool = "EbsOptimized";
        one iam_instance_profile / set_iam_instance_profile / with_iam_instance_profile: IamInstanceProfileSpecification = "IamInstanceProfile";
        /// Defaults to `stop`.
        one instance_initiated_shutdown_behavior / set_instance_initiated_shutdown_behavior / with_instance_initiated_shutdown_behavior: ShutdownBehavior = "InstanceInitiatedShutdownBehavior";
        many network_interfaces / set_network_interfaces / with_network_interfaces: InstanceNetworkInterfaceSpecification = "NetworkInterfaces";
        one private_ip_address / set_private_ip_address / with_private_ip_address: String = "PrivateIpAddress";
        many elastic_gpu_specification / set_elastic_gpu_specification / with_elastic_gpu_specification: ElasticGpuSpecification = "ElasticGpuSpecification";
        many elastic_inference_accelerators / set_elastic_inference_accelerators / with_elastic_inference_accelerators: ElasticInferenceAccelerator = "ElasticInferenceAccelerators";
        /// Resource types `instance` and `volume` only.
        many tag_specifications / set_tag_specifications / with_tag_specifications: TagSpecification = "TagSpecifications";
        one launch_template / set_launch_template / with_launch_template: LaunchTemplateSpecification = "LaunchTemplate";
        one instance_market_options / set_instance_market_options / with_instance_market_options: InstanceMarketOptionsRequest = "InstanceMarketOptions";
        one credit_specification / set_credit_specification / with_credit_specification: CreditSpecificationRequest = "CreditSpecification";
        one cpu_options / set_cpu_options / with_cpu_options: CpuOptionsRequest = "CpuOptions";
        one capacity_reservation_specification / set_capacity_reservation_specification / with_capacity_reservation_specification: CapacityReservationSpecification = "CapacityReservationSpecification";
        one hibernation_options / set_hibernation_options / with_hibernation_options: HibernationOptionsRequest = "HibernationOptions";
        many license_specifications / set_license_specifications / with_license_specifications: LicenseConfigurationRequest = "LicenseSpecifications";
        one metadata_options / set_metadata_options / with_metadata_options: InstanceMetadataOptionsRequest = "MetadataOptions";
    }
}

ec2_request!(RunInstancesRequest => "RunInstances");

impl RunInstancesRequest {
    /// Launches exactly `count` instances of `image_id`.
    pub fn launch(image_id: impl Into<String>, count: i32) -> Self {
        Self::new().with_image_id(image_id).with_min_count(count).with_max_count(count)
    }
}
