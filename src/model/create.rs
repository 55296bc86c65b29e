use super::TagSpecification;
use crate::attribute::Timestamp;
use crate::types::*;

ec2_model! {
    /// Parameters of `CreateVolume`.
    ///
    /// Size limits by volume type: `gp2` 1 to 16384 GiB, `io1` 4 to 16384,
    /// `st1`/`sc1` 500 to 16384, `standard` 1 to 1024. Without a snapshot
    /// the size is required.
    pub struct CreateVolumeRequest {
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        copy encrypted / set_encrypted / with_encrypted: bool = "Encrypted";
        /// `io1` only: 100 to 64000 IOPS, at most 50 per GiB.
        copy iops / set_iops / with_iops: i32 = "Iops";
        /// Key id, alias or ARN; `encrypted` must be set too.
        one kms_key_id / set_kms_key_id / with_kms_key_id: String = "KmsKeyId";
        one outpost_arn / set_outpost_arn / with_outpost_arn: String = "OutpostArn";
        /// GiB.
        copy size / set_size / with_size: i32 = "Size";
        one snapshot_id / set_snapshot_id / with_snapshot_id: String = "SnapshotId";
        /// Defaults to `gp2`.
        one volume_type / set_volume_type / with_volume_type: VolumeType = "VolumeType";
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
        many tag_specifications / set_tag_specifications / with_tag_specifications: TagSpecification = "TagSpecifications";
        /// `io1` volumes only; up to 16 Nitro instances in one zone.
        copy multi_attach_enabled / set_multi_attach_enabled / with_multi_attach_enabled: bool = "MultiAttachEnabled";
    }
}

ec2_request!(CreateVolumeRequest => "CreateVolume");

ec2_model! {
    pub struct CreateCapacityReservationRequest {
        /// Idempotency token, up to 64 ASCII characters.
        one client_token / set_client_token / with_client_token: String = "ClientToken";
        one instance_type / set_instance_type / with_instance_type: String = "InstanceType";
        one instance_platform / set_instance_platform / with_instance_platform: CapacityReservationInstancePlatform = "InstancePlatform";
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        one availability_zone_id / set_availability_zone_id / with_availability_zone_id: String = "AvailabilityZoneId";
        one tenancy / set_tenancy / with_tenancy: CapacityReservationTenancy = "Tenancy";
        copy instance_count / set_instance_count / with_instance_count: i32 = "InstanceCount";
        copy ebs_optimized / set_ebs_optimized / with_ebs_optimized: bool = "EbsOptimized";
        copy ephemeral_storage / set_ephemeral_storage / with_ephemeral_storage: bool = "EphemeralStorage";
        /// Required with `limited`, omitted with `unlimited`. Cancelled within an hour of this time.
        copy end_date / set_end_date / with_end_date: Timestamp = "EndDate";
        one end_date_type / set_end_date_type / with_end_date_type: EndDateType = "EndDateType";
        one instance_match_criteria / set_instance_match_criteria / with_instance_match_criteria: InstanceMatchCriteria = "InstanceMatchCriteria";
        many tag_specifications / set_tag_specifications / with_tag_specifications: TagSpecification = "TagSpecifications";
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
    }
}

ec2_request!(CreateCapacityReservationRequest => "CreateCapacityReservation");

ec2_model! {
    pub struct CreateFlowLogsRequest {
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
        one client_token / set_client_token / with_client_token: String = "ClientToken";
        /// Role allowed to publish to CloudWatch Logs; not used with `s3`.
        one deliver_logs_permission_arn / set_deliver_logs_permission_arn / with_deliver_logs_permission_arn: String = "DeliverLogsPermissionArn";
        one log_group_name / set_log_group_name / with_log_group_name: String = "LogGroupName";
        /// Up to 1000 ids of the kind named by `resource_type`.
        many resource_ids / set_resource_ids / with_resource_ids: String = "ResourceIds";
        one resource_type / set_resource_type / with_resource_type: FlowLogsResourceType = "ResourceType";
        one traffic_type / set_traffic_type / with_traffic_type: TrafficType = "TrafficType";
        one log_destination_type / set_log_destination_type / with_log_destination_type: LogDestinationType = "LogDestinationType";
        /// Log group or bucket ARN, matching `log_destination_type`.
        one log_destination / set_log_destination / with_log_destination: String = "LogDestination";
        /// Space-separated `${field}` list, e.g. `${version} ${srcaddr}`.
        one log_format / set_log_format / with_log_format: String = "LogFormat";
        many tag_specifications / set_tag_specifications / with_tag_specifications: TagSpecification = "TagSpecifications";
        /// 60 or 600 seconds; defaults to 600.
        copy max_aggregation_interval / set_max_aggregation_interval / with_max_aggregation_interval: i32 = "MaxAggregationInterval";
    }
}

ec2_request!(CreateFlowLogsRequest => "CreateFlowLogs");
