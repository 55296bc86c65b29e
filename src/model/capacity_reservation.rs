use super::Tag;
use crate::attribute::Timestamp;
use crate::types::*;

ec2_model! {
    /// A Capacity Reservation.
    pub struct CapacityReservation {
        one capacity_reservation_id / set_capacity_reservation_id / with_capacity_reservation_id: String = "CapacityReservationId";
        one owner_id / set_owner_id / with_owner_id: String = "OwnerId";
        one capacity_reservation_arn / set_capacity_reservation_arn / with_capacity_reservation_arn: String = "CapacityReservationArn";
        one availability_zone_id / set_availability_zone_id / with_availability_zone_id: String = "AvailabilityZoneId";
        one instance_type / set_instance_type / with_instance_type: String = "InstanceType";
        one instance_platform / set_instance_platform / with_instance_platform: CapacityReservationInstancePlatform = "InstancePlatform";
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        one tenancy / set_tenancy / with_tenancy: CapacityReservationTenancy = "Tenancy";
        copy total_instance_count / set_total_instance_count / with_total_instance_count: i32 = "TotalInstanceCount";
        copy available_instance_count / set_available_instance_count / with_available_instance_count: i32 = "AvailableInstanceCount";
        copy ebs_optimized / set_ebs_optimized / with_ebs_optimized: bool = "EbsOptimized";
        copy ephemeral_storage / set_ephemeral_storage / with_ephemeral_storage: bool = "EphemeralStorage";
        one state / set_state / with_state: CapacityReservationState = "State";
        /// Only set when `end_date_type` is `limited`.
        copy end_date / set_end_date / with_end_date: Timestamp = "EndDate";
        one end_date_type / set_end_date_type / with_end_date_type: EndDateType = "EndDateType";
        one instance_match_criteria / set_instance_match_criteria / with_instance_match_criteria: InstanceMatchCriteria = "InstanceMatchCriteria";
        copy create_date / set_create_date / with_create_date: Timestamp = "CreateDate";
        many tags / set_tags / with_tags: Tag = "Tags";
    }
}

impl CapacityReservation {
    /// Instances currently running in the reservation, `None` unless both
    /// counts are known and their difference fits an `i32`.
    pub fn used_instance_count(&self) -> Option<i32> {
        self.total_instance_count()?.checked_sub(self.available_instance_count()?)
    }
}
