use super::{
    BlockDeviceMapping, GroupIdentifier, IamInstanceProfileSpecification,
    InstanceNetworkInterfaceSpecification, Tag, TagSpecification,
};
use crate::attribute::Timestamp;
use crate::types::*;

ec2_model! {
    /// Launch template of a fleet; id or name, plus a version.
    pub struct FleetLaunchTemplateSpecification {
        one launch_template_id / set_launch_template_id / with_launch_template_id: String = "LaunchTemplateId";
        one launch_template_name / set_launch_template_name / with_launch_template_name: String = "LaunchTemplateName";
        one version / set_version / with_version: String = "Version";
    }
}

ec2_model! {
    pub struct PlacementResponse {
        one group_name / set_group_name / with_group_name: String = "GroupName";
    }
}

ec2_model! {
    pub struct FleetLaunchTemplateOverrides {
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        one max_price / set_max_price / with_max_price: String = "MaxPrice";
        one subnet_id / set_subnet_id / with_subnet_id: String = "SubnetId";
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        copy weighted_capacity / set_weighted_capacity / with_weighted_capacity: f64 = "WeightedCapacity";
        /// Lower is tried first with the `prioritized` On-Demand strategy.
        copy priority / set_priority / with_priority: f64 = "Priority";
        one placement / set_placement / with_placement: PlacementResponse = "Placement";
    }
}

ec2_model! {
    pub struct FleetLaunchTemplateConfig {
        one launch_template_specification / set_launch_template_specification / with_launch_template_specification: FleetLaunchTemplateSpecification = "LaunchTemplateSpecification";
        many overrides / set_overrides / with_overrides: FleetLaunchTemplateOverrides = "Overrides";
    }
}

ec2_model! {
    /// Capacity in instances, or in the units of `weighted_capacity`.
    pub struct TargetCapacitySpecification {
        copy total_target_capacity / set_total_target_capacity / with_total_target_capacity: i32 = "TotalTargetCapacity";
        copy on_demand_target_capacity / set_on_demand_target_capacity / with_on_demand_target_capacity: i32 = "OnDemandTargetCapacity";
        copy spot_target_capacity / set_spot_target_capacity / with_spot_target_capacity: i32 = "SpotTargetCapacity";
        one default_target_capacity_type / set_default_target_capacity_type / with_default_target_capacity_type: DefaultTargetCapacityType = "DefaultTargetCapacityType";
    }
}

ec2_model! {
    pub struct SpotOptions {
        one allocation_strategy / set_allocation_strategy / with_allocation_strategy: SpotAllocationStrategy = "AllocationStrategy";
        one instance_interruption_behavior / set_instance_interruption_behavior / with_instance_interruption_behavior: SpotInstanceInterruptionBehavior = "InstanceInterruptionBehavior";
        /// `lowest-price` only.
        copy instance_pools_to_use_count / set_instance_pools_to_use_count / with_instance_pools_to_use_count: i32 = "InstancePoolsToUseCount";
        copy single_instance_type / set_single_instance_type / with_single_instance_type: bool = "SingleInstanceType";
        copy single_availability_zone / set_single_availability_zone / with_single_availability_zone: bool = "SingleAvailabilityZone";
        copy min_target_capacity / set_min_target_capacity / with_min_target_capacity: i32 = "MinTargetCapacity";
        one max_total_price / set_max_total_price / with_max_total_price: String = "MaxTotalPrice";
    }
}

ec2_model! {
    pub struct CapacityReservationOptions {
        one usage_strategy / set_usage_strategy / with_usage_strategy: FleetCapacityReservationUsageStrategy = "UsageStrategy";
    }
}

ec2_model! {
    pub struct OnDemandOptions {
        one allocation_strategy / set_allocation_strategy / with_allocation_strategy: FleetOnDemandAllocationStrategy = "AllocationStrategy";
        one capacity_reservation_options / set_capacity_reservation_options / with_capacity_reservation_options: CapacityReservationOptions = "CapacityReservationOptions";
        copy single_instance_type / set_single_instance_type / with_single_instance_type: bool = "SingleInstanceType";
        copy single_availability_zone / set_single_availability_zone / with_single_availability_zone: bool = "SingleAvailabilityZone";
        copy min_target_capacity / set_min_target_capacity / with_min_target_capacity: i32 = "MinTargetCapacity";
        one max_total_price / set_max_total_price / with_max_total_price: String = "MaxTotalPrice";
    }
}

ec2_model! {
    pub struct LaunchTemplateAndOverridesResponse {
        one launch_template_specification / set_launch_template_specification / with_launch_template_specification: FleetLaunchTemplateSpecification = "LaunchTemplateSpecification";
        one overrides / set_overrides / with_overrides: FleetLaunchTemplateOverrides = "Overrides";
    }
}

ec2_model! {
    /// Why an `instant` fleet could not launch some capacity.
    pub struct DescribeFleetError {
        one launch_template_and_overrides / set_launch_template_and_overrides / with_launch_template_and_overrides: LaunchTemplateAndOverridesResponse = "LaunchTemplateAndOverrides";
        one lifecycle / set_lifecycle / with_lifecycle: InstanceLifecycle = "Lifecycle";
        one error_code / set_error_code / with_error_code: String = "ErrorCode";
        one error_message / set_error_message / with_error_message: String = "ErrorMessage";
    }
}

ec2_model! {
    pub struct DescribeFleetsInstances {
        one launch_template_and_overrides / set_launch_template_and_overrides / with_launch_template_and_overrides: LaunchTemplateAndOverridesResponse = "LaunchTemplateAndOverrides";
        one lifecycle / set_lifecycle / with_lifecycle: InstanceLifecycle = "Lifecycle";
        many instance_ids / set_instance_ids / with_instance_ids: String = "InstanceIds";
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        one platform / set_platform / with_platform: PlatformValues = "Platform";
    }
}

ec2_model! {
    /// An EC2 Fleet, as returned by `DescribeFleets`.
    pub struct FleetData {
        /// Progress towards the target capacity; `maintain` fleets only.
        one activity_status / set_activity_status / with_activity_status: FleetActivityStatus = "ActivityStatus";
        copy create_time / set_create_time / with_create_time: Timestamp = "CreateTime";
        one fleet_id / set_fleet_id / with_fleet_id: String = "FleetId";
        one fleet_state / set_fleet_state / with_fleet_state: FleetStateCode = "FleetState";
        one client_token / set_client_token / with_client_token: String = "ClientToken";
        one excess_capacity_termination_policy / set_excess_capacity_termination_policy / with_excess_capacity_termination_policy: FleetExcessCapacityTerminationPolicy = "ExcessCapacityTerminationPolicy";
        copy fulfilled_capacity / set_fulfilled_capacity / with_fulfilled_capacity: f64 = "FulfilledCapacity";
        copy fulfilled_on_demand_capacity / set_fulfilled_on_demand_capacity / with_fulfilled_on_demand_capacity: f64 = "FulfilledOnDemandCapacity";
        many launch_template_configs / set_launch_template_configs / with_launch_template_configs: FleetLaunchTemplateConfig = "LaunchTemplateConfigs";
        one target_capacity_specification / set_target_capacity_specification / with_target_capacity_specification: TargetCapacitySpecification = "TargetCapacitySpecification";
        copy terminate_instances_with_expiration / set_terminate_instances_with_expiration / with_terminate_instances_with_expiration: bool = "TerminateInstancesWithExpiration";
        one r#type / set_type / with_type: FleetType = "Type";
        copy valid_from / set_valid_from / with_valid_from: Timestamp = "ValidFrom";
        copy valid_until / set_valid_until / with_valid_until: Timestamp = "ValidUntil";
        copy replace_unhealthy_instances / set_replace_unhealthy_instances / with_replace_unhealthy_instances: bool = "ReplaceUnhealthyInstances";
        one spot_options / set_spot_options / with_spot_options: SpotOptions = "SpotOptions";
        one on_demand_options / set_on_demand_options / with_on_demand_options: OnDemandOptions = "OnDemandOptions";
        many tags / set_tags / with_tags: Tag = "Tags";
        many errors / set_errors / with_errors: DescribeFleetError = "Errors";
        many instances / set_instances / with_instances: DescribeFleetsInstances = "Instances";
    }
}

impl FleetData {
    /// Ids of every instance the fleet reports, in report order.
    pub fn instance_ids(&self) -> Vec<&str> {
        self.instances()
            .unwrap_or_default()
            .iter()
            .flat_map(|group| group.instance_ids().unwrap_or_default())
            .map(String::as_str)
            .collect()
    }
}

ec2_model! {
    pub struct SpotFleetMonitoring {
        copy enabled / set_enabled / with_enabled: bool = "Enabled";
    }
}

ec2_model! {
    pub struct SpotPlacement {
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        one group_name / set_group_name / with_group_name: String = "GroupName";
        /// `host` is not supported for Spot Instances.
        one tenancy / set_tenancy / with_tenancy: Tenancy = "Tenancy";
    }
}

ec2_model! {
    pub struct SpotFleetTagSpecification {
        /// Only `instance` is accepted.
        one resource_type / set_resource_type / with_resource_type: ResourceType = "ResourceType";
        many tags / set_tags / with_tags: Tag = "Tags";
    }
}

ec2_model! {
    pub struct SpotFleetLaunchSpecification {
        many security_groups / set_security_groups / with_security_groups: GroupIdentifier = "SecurityGroups";
        one addressing_type / set_addressing_type / with_addressing_type: String = "AddressingType";
        many block_device_mappings / set_block_device_mappings / with_block_device_mappings: BlockDeviceMapping = "BlockDeviceMappings";
        copy ebs_optimized / set_ebs_optimized / with_ebs_optimized: bool = "EbsOptimized";
        one iam_instance_profile / set_iam_instance_profile / with_iam_instance_profile: IamInstanceProfileSpecification = "IamInstanceProfile";
        one image_id / set_image_id / with_image_id: String = "ImageId";
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        one kernel_id / set_kernel_id / with_kernel_id: String = "KernelId";
        one key_name / set_key_name / with_key_name: String = "KeyName";
        one monitoring / set_monitoring / with_monitoring: SpotFleetMonitoring = "Monitoring";
        many network_interfaces / set_network_interfaces / with_network_interfaces: InstanceNetworkInterfaceSpecification = "NetworkInterfaces";
        one placement / set_placement / with_placement: SpotPlacement = "Placement";
        one ramdisk_id / set_ramdisk_id / with_ramdisk_id: String = "RamdiskId";
        one spot_price / set_spot_price / with_spot_price: String = "SpotPrice";
        one subnet_id / set_subnet_id / with_subnet_id: String = "SubnetId";
        one user_data / set_user_data / with_user_data: String = "UserData";
        copy weighted_capacity / set_weighted_capacity / with_weighted_capacity: f64 = "WeightedCapacity";
        many tag_specifications / set_tag_specifications / with_tag_specifications: SpotFleetTagSpecification = "TagSpecifications";
    }
}

ec2_model! {
    pub struct LaunchTemplateOverrides {
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        one spot_price / set_spot_price / with_spot_price: String = "SpotPrice";
        one subnet_id / set_subnet_id / with_subnet_id: String = "SubnetId";
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        copy weighted_capacity / set_weighted_capacity / with_weighted_capacity: f64 = "WeightedCapacity";
        copy priority / set_priority / with_priority: f64 = "Priority";
    }
}

ec2_model! {
    pub struct LaunchTemplateConfig {
        one launch_template_specification / set_launch_template_specification / with_launch_template_specification: FleetLaunchTemplateSpecification = "LaunchTemplateSpecification";
        many overrides / set_overrides / with_overrides: LaunchTemplateOverrides = "Overrides";
    }
}

ec2_model! {
    pub struct ClassicLoadBalancer {
        one name / set_name / with_name: String = "Name";
    }
}

ec2_model! {
    pub struct ClassicLoadBalancersConfig {
        many classic_load_balancers / set_classic_load_balancers / with_classic_load_balancers: ClassicLoadBalancer = "ClassicLoadBalancers";
    }
}

ec2_model! {
    pub struct TargetGroup {
        one arn / set_arn / with_arn: String = "Arn";
    }
}

ec2_model! {
    pub struct TargetGroupsConfig {
        many target_groups / set_target_groups / with_target_groups: TargetGroup = "TargetGroups";
    }
}

ec2_model! {
    pub struct LoadBalancersConfig {
        one classic_load_balancers_config / set_classic_load_balancers_config / with_classic_load_balancers_config: ClassicLoadBalancersConfig = "ClassicLoadBalancersConfig";
        one target_groups_config / set_target_groups_config / with_target_groups_config: TargetGroupsConfig = "TargetGroupsConfig";
    }
}

ec2_model! {
    /// Configuration of a Spot Fleet request.
    ///
    /// Instances come from either `launch_specifications` or
    /// `launch_template_configs`, never both. `iam_fleet_role` and
    /// `target_capacity` are required when requesting.
    pub struct SpotFleetRequestConfigData {
        one allocation_strategy / set_allocation_strategy / with_allocation_strategy: AllocationStrategy = "AllocationStrategy";
        one on_demand_allocation_strategy / set_on_demand_allocation_strategy / with_on_demand_allocation_strategy: OnDemandAllocationStrategy = "OnDemandAllocationStrategy";
        one client_token / set_client_token / with_client_token: String = "ClientToken";
        one excess_capacity_termination_policy / set_excess_capacity_termination_policy / with_excess_capacity_termination_policy: ExcessCapacityTerminationPolicy = "ExcessCapacityTerminationPolicy";
        copy fulfilled_capacity / set_fulfilled_capacity / with_fulfilled_capacity: f64 = "FulfilledCapacity";
        copy on_demand_fulfilled_capacity / set_on_demand_fulfilled_capacity / with_on_demand_fulfilled_capacity: f64 = "OnDemandFulfilledCapacity";
        one iam_fleet_role / set_iam_fleet_role / with_iam_fleet_role: String = "IamFleetRole";
        many launch_specifications / set_launch_specifications / with_launch_specifications: SpotFleetLaunchSpecification = "LaunchSpecifications";
        many launch_template_configs / set_launch_template_configs / with_launch_template_configs: LaunchTemplateConfig = "LaunchTemplateConfigs";
        /// Per instance hour; defaults to the On-Demand price.
        one spot_price / set_spot_price / with_spot_price: String = "SpotPrice";
        copy target_capacity / set_target_capacity / with_target_capacity: i32 = "TargetCapacity";
        copy on_demand_target_capacity / set_on_demand_target_capacity / with_on_demand_target_capacity: i32 = "OnDemandTargetCapacity";
        one on_demand_max_total_price / set_on_demand_max_total_price / with_on_demand_max_total_price: String = "OnDemandMaxTotalPrice";
        one spot_max_total_price / set_spot_max_total_price / with_spot_max_total_price: String = "SpotMaxTotalPrice";
        copy terminate_instances_with_expiration / set_terminate_instances_with_expiration / with_terminate_instances_with_expiration: bool = "TerminateInstancesWithExpiration";
        /// `instant` is not accepted for Spot Fleets.
        one r#type / set_type / with_type: FleetType = "Type";
        copy valid_from / set_valid_from / with_valid_from: Timestamp = "ValidFrom";
        copy valid_until / set_valid_until / with_valid_until: Timestamp = "ValidUntil";
        copy replace_unhealthy_instances / set_replace_unhealthy_instances / with_replace_unhealthy_instances: bool = "ReplaceUnhealthyInstances";
        one instance_interruption_behavior / set_instance_interruption_behavior / with_instance_interruption_behavior: InstanceInterruptionBehavior = "InstanceInterruptionBehavior";
        one load_balancers_config / set_load_balancers_config / with_load_balancers_config: LoadBalancersConfig = "LoadBalancersConfig";
        copy instance_pools_to_use_count / set_instance_pools_to_use_count / with_instance_pools_to_use_count: i32 = "InstancePoolsToUseCount";
        many tag_specifications / set_tag_specifications / with_tag_specifications: TagSpecification = "TagSpecifications";
    }
}

impl SpotFleetRequestConfigData {
    /// Whether the fleet has reached its target; `false` while either side is unknown.
    pub fn is_fulfilled(&self) -> bool {
        match (self.fulfilled_capacity(), self.target_capacity()) {
            (Some(fulfilled), Some(target)) => fulfilled >= f64::from(target),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use chrono::{TimeZone, Utc};

    // Trimmed `aws ec2 describe-fleets` entry.
    const FLEET: &str = r#"{
        "ActivityStatus": "fulfilled",
        "CreateTime": "2020-02-10T12:00:00.000Z",
        "FleetId": "fleet-73fbd2ce-aa30-494c-8788-1cee4EXAMPLE",
        "FleetState": "active",
        "ExcessCapacityTerminationPolicy": "termination",
        "FulfilledCapacity": 2.0,
        "FulfilledOnDemandCapacity": 0.0,
        "LaunchTemplateConfigs": [
            {
                "LaunchTemplateSpecification": {"LaunchTemplateId": "lt-0e8c754449b27161c", "Version": "1"},
                "Overrides": [{"InstanceType": "c5.large", "WeightedCapacity": 1.0, "Placement": {"GroupName": "batch"}}]
            }
        ],
        "TargetCapacitySpecification": {"TotalTargetCapacity": 2, "OnDemandTargetCapacity": 0, "SpotTargetCapacity": 2, "DefaultTargetCapacityType": "spot"},
        "TerminateInstancesWithExpiration": false,
        "Type": "maintain",
        "ReplaceUnhealthyInstances": false,
        "SpotOptions": {"AllocationStrategy": "lowest-price", "InstanceInterruptionBehavior": "terminate", "InstancePoolsToUseCount": 1},
        "OnDemandOptions": {"AllocationStrategy": "lowest-price"},
        "Tags": [{"Key": "team", "Value": "batch"}],
        "Errors": [],
        "Instances": [
            {"Lifecycle": "spot", "InstanceIds": ["i-1", "i-2"], "InstanceType": "c5.large"},
            {"Lifecycle": "spot", "InstanceIds": ["i-3"], "InstanceType": "c5.xlarge", "Platform": "Windows"}
        ]
    }"#;

    #[test]
    fn describe_fleets_fixture() {
        let fleet = match FleetData::from_json(FLEET) {
            Ok(fleet) => fleet,
            Err(err) => panic!("{err:#}"),
        };
        assert_eq!(fleet.fleet_state(), Some(&FleetStateCode::Active));
        assert_eq!(fleet.activity_status(), Some(&FleetActivityStatus::Fulfilled));
        assert_eq!(fleet.r#type(), Some(&FleetType::Maintain));
        assert_eq!(fleet.create_time(), Some(Utc.with_ymd_and_hms(2020, 2, 10, 12, 0, 0).unwrap()));
        assert_eq!(fleet.fulfilled_capacity(), Some(2.0));
        assert_eq!(fleet.errors().map(<[DescribeFleetError]>::len), Some(0));
        assert_eq!(fleet.instance_ids(), ["i-1", "i-2", "i-3"]);

        let target = fleet.target_capacity_specification().unwrap();
        assert_eq!(target.default_target_capacity_type(), Some(&DefaultTargetCapacityType::Spot));
        let spot = fleet.spot_options().unwrap();
        assert_eq!(spot.allocation_strategy(), Some(&SpotAllocationStrategy::LowestPrice));
        let overrides = &fleet.launch_template_configs().unwrap()[0].overrides().unwrap()[0];
        assert_eq!(overrides.instance_type(), Some(&InstanceType::C5Large));
        assert_eq!(overrides.placement().and_then(PlacementResponse::group_name), Some("batch"));
        let windows = &fleet.instances().unwrap()[1];
        assert_eq!(windows.platform(), Some(&PlatformValues::Windows));
    }

    #[test]
    fn fleet_without_instances() {
        let fleet = FleetData::new().with_fleet_id("fleet-1").with_fleet_state("deleted_running");
        assert!(fleet.instance_ids().is_empty());
        assert_eq!(fleet.fleet_state(), Some(&FleetStateCode::DeletedRunning));
        assert_eq!(fleet.to_string(), "{FleetId: fleet-1, FleetState: deleted_running}");
    }

    #[test]
    fn spot_fleet_request_config() {
        let config = SpotFleetRequestConfigData::new()
            .with_iam_fleet_role("arn:aws:iam::123456789012:role/aws-ec2-spot-fleet-tagging-role")
            .with_allocation_strategy("capacityOptimized")
            .with_target_capacity(4)
            .with_type(FleetType::Maintain)
            .with_launch_specifications([SpotFleetLaunchSpecification::new()
                .with_image_id("ami-1")
                .with_instance_type(InstanceType::M5Large)
                .with_security_groups([GroupIdentifier::new().with_group_id("sg-1")])
                .with_placement(SpotPlacement::new().with_availability_zone("us-west-2a"))
                .with_weighted_capacity(2.0)])
            .with_load_balancers_config(
                LoadBalancersConfig::new().with_target_groups_config(
                    TargetGroupsConfig::new().with_target_groups([TargetGroup::new().with_arn("arn:tg")]),
                ),
            );
        assert_eq!(config.allocation_strategy(), Some(&AllocationStrategy::CapacityOptimized));
        assert!(!config.is_fulfilled());
        match config.to_json() {
            Ok(json) => {
                assert!(json.contains(r#""AllocationStrategy":"capacityOptimized""#), "{json}");
                assert!(json.contains(r#""TargetGroups":[{"Arn":"arn:tg"}]"#), "{json}");
                let parsed = SpotFleetRequestConfigData::from_json(&json).unwrap();
                assert_eq!(parsed, config);
                assert_eq!(parsed.hash_code(), config.hash_code());
            }
            Err(err) => panic!("{err:#}"),
        }

        let fulfilled = config.with_fulfilled_capacity(4.0);
        assert!(fulfilled.is_fulfilled());
    }
}
