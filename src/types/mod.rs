//! Enumerated strings.
//!
//! Each type lists the values EC2 documents for it; anything else is kept in
//! the `Unknown` variant so newer service values pass through untouched.
//! Setters accept `&str`, `String` or the variant itself.

mod instance_type;

pub use instance_type::InstanceType;

ec2_enum! {
    pub enum ArchitectureValues {
        I386 = "i386",
        X8664 = "x86_64",
        Arm64 = "arm64",
    }
}

ec2_enum! {
    /// `Windows` for Windows images and instances; absent otherwise.
    pub enum PlatformValues {
        Windows = "Windows",
    }
}

ec2_enum! {
    pub enum ImageTypeValues {
        Machine = "machine",
        Kernel = "kernel",
        Ramdisk = "ramdisk",
    }
}

ec2_enum! {
    pub enum ImageState {
        Pending = "pending",
        Available = "available",
        Invalid = "invalid",
        Deregistered = "deregistered",
        Transient = "transient",
        Failed = "failed",
        Error = "error",
    }
}

ec2_enum! {
    pub enum HypervisorType {
        Ovm = "ovm",
        Xen = "xen",
    }
}

ec2_enum! {
    /// Root device type.
    pub enum DeviceType {
        Ebs = "ebs",
        InstanceStore = "instance-store",
    }
}

ec2_enum! {
    pub enum VirtualizationType {
        Hvm = "hvm",
        Paravirtual = "paravirtual",
    }
}

ec2_enum! {
    pub enum InstanceLifecycleType {
        Spot = "spot",
        Scheduled = "scheduled",
    }
}

ec2_enum! {
    /// Product description of a Reserved Instance or offering.
    pub enum RiProductDescription {
        LinuxUnix = "Linux/UNIX",
        LinuxUnixAmazonVpc = "Linux/UNIX (Amazon VPC)",
        Windows = "Windows",
        WindowsAmazonVpc = "Windows (Amazon VPC)",
    }
}

ec2_enum! {
    pub enum ReservedInstanceState {
        PaymentPending = "payment-pending",
        Active = "active",
        PaymentFailed = "payment-failed",
        Retired = "retired",
        Queued = "queued",
        QueuedDeleted = "queued-deleted",
    }
}

ec2_enum! {
    pub enum CurrencyCodeValues {
        Usd = "USD",
    }
}

ec2_enum! {
    pub enum Tenancy {
        Default = "default",
        Dedicated = "dedicated",
        Host = "host",
    }
}

ec2_enum! {
    pub enum OfferingClassType {
        Standard = "standard",
        Convertible = "convertible",
    }
}

ec2_enum! {
    /// Payment option of a Reserved Instance. The `* Utilization` values
    /// belong to legacy offerings.
    pub enum OfferingTypeValues {
        HeavyUtilization = "Heavy Utilization",
        MediumUtilization = "Medium Utilization",
        LightUtilization = "Light Utilization",
        NoUpfront = "No Upfront",
        PartialUpfront = "Partial Upfront",
        AllUpfront = "All Upfront",
    }
}

ec2_enum! {
    /// Whether a Reserved Instance applies to an Availability Zone or a Region.
    pub enum Scope {
        AvailabilityZone = "Availability Zone",
        Region = "Region",
    }
}

ec2_enum! {
    pub enum CapacityReservationInstancePlatform {
        LinuxUnix = "Linux/UNIX",
        RedHatEnterpriseLinux = "Red Hat Enterprise Linux",
        SuseLinux = "SUSE Linux",
        Windows = "Windows",
        WindowsWithSqlServer = "Windows with SQL Server",
        WindowsWithSqlServerEnterprise = "Windows with SQL Server Enterprise",
        WindowsWithSqlServerStandard = "Windows with SQL Server Standard",
        WindowsWithSqlServerWeb = "Windows with SQL Server Web",
        LinuxWithSqlServerStandard = "Linux with SQL Server Standard",
        LinuxWithSqlServerWeb = "Linux with SQL Server Web",
        LinuxWithSqlServerEnterprise = "Linux with SQL Server Enterprise",
    }
}

ec2_enum! {
    pub enum CapacityReservationTenancy {
        Default = "default",
        Dedicated = "dedicated",
    }
}

ec2_enum! {
    pub enum CapacityReservationState {
        Active = "active",
        Expired = "expired",
        Cancelled = "cancelled",
        Pending = "pending",
        Failed = "failed",
    }
}

ec2_enum! {
    pub enum EndDateType {
        Unlimited = "unlimited",
        Limited = "limited",
    }
}

ec2_enum! {
    pub enum InstanceMatchCriteria {
        Open = "open",
        Targeted = "targeted",
    }
}

ec2_enum! {
    pub enum FlowLogsResourceType {
        Vpc = "VPC",
        Subnet = "Subnet",
        NetworkInterface = "NetworkInterface",
    }
}

ec2_enum! {
    pub enum TrafficType {
        Accept = "ACCEPT",
        Reject = "REJECT",
        All = "ALL",
    }
}

ec2_enum! {
    pub enum LogDestinationType {
        CloudWatchLogs = "cloud-watch-logs",
        S3 = "s3",
    }
}

ec2_enum! {
    pub enum VolumeType {
        Standard = "standard",
        Io1 = "io1",
        Gp2 = "gp2",
        Sc1 = "sc1",
        St1 = "st1",
    }
}

ec2_enum! {
    pub enum ShutdownBehavior {
        Stop = "stop",
        Terminate = "terminate",
    }
}

ec2_enum! {
    pub enum InstanceStateName {
        Pending = "pending",
        Running = "running",
        ShuttingDown = "shutting-down",
        Terminated = "terminated",
        Stopping = "stopping",
        Stopped = "stopped",
    }
}

ec2_enum! {
    pub enum MonitoringState {
        Disabled = "disabled",
        Disabling = "disabling",
        Enabled = "enabled",
        Pending = "pending",
    }
}

ec2_enum! {
    pub enum ProductCodeValues {
        Devpay = "devpay",
        Marketplace = "marketplace",
    }
}

ec2_enum! {
    pub enum AttachmentStatus {
        Attaching = "attaching",
        Attached = "attached",
        Detaching = "detaching",
        Detached = "detached",
    }
}

ec2_enum! {
    /// Resource a tag specification applies to.
    pub enum ResourceType {
        ClientVpnEndpoint = "client-vpn-endpoint",
        CustomerGateway = "customer-gateway",
        DedicatedHost = "dedicated-host",
        DhcpOptions = "dhcp-options",
        ElasticIp = "elastic-ip",
        Fleet = "fleet",
        FpgaImage = "fpga-image",
        HostReservation = "host-reservation",
        Image = "image",
        Instance = "instance",
        InternetGateway = "internet-gateway",
        KeyPair = "key-pair",
        LaunchTemplate = "launch-template",
        Natgateway = "natgateway",
        NetworkAcl = "network-acl",
        NetworkInterface = "network-interface",
        PlacementGroup = "placement-group",
        ReservedInstances = "reserved-instances",
        RouteTable = "route-table",
        SecurityGroup = "security-group",
        Snapshot = "snapshot",
        SpotFleetRequest = "spot-fleet-request",
        SpotInstancesRequest = "spot-instances-request",
        Subnet = "subnet",
        TrafficMirrorFilter = "traffic-mirror-filter",
        TrafficMirrorSession = "traffic-mirror-session",
        TrafficMirrorTarget = "traffic-mirror-target",
        TransitGateway = "transit-gateway",
        TransitGatewayAttachment = "transit-gateway-attachment",
        TransitGatewayMulticastDomain = "transit-gateway-multicast-domain",
        TransitGatewayRouteTable = "transit-gateway-route-table",
        Volume = "volume",
        Vpc = "vpc",
        VpcPeeringConnection = "vpc-peering-connection",
        VpnConnection = "vpn-connection",
        VpnGateway = "vpn-gateway",
        VpcFlowLog = "vpc-flow-log",
    }
}

ec2_enum! {
    pub enum MarketType {
        Spot = "spot",
    }
}

ec2_enum! {
    pub enum SpotInstanceType {
        OneTime = "one-time",
        Persistent = "persistent",
    }
}

ec2_enum! {
    pub enum InstanceInterruptionBehavior {
        Hibernate = "hibernate",
        Stop = "stop",
        Terminate = "terminate",
    }
}

ec2_enum! {
    pub enum CapacityReservationPreference {
        Open = "open",
        None = "none",
    }
}

ec2_enum! {
    pub enum HttpTokensState {
        Optional = "optional",
        Required = "required",
    }
}

ec2_enum! {
    pub enum InstanceMetadataEndpointState {
        Disabled = "disabled",
        Enabled = "enabled",
    }
}

ec2_enum! {
    pub enum InstanceMetadataOptionsState {
        Pending = "pending",
        Applied = "applied",
    }
}

ec2_enum! {
    pub enum RecurringChargeFrequency {
        Hourly = "Hourly",
    }
}

ec2_enum! {
    pub enum NetworkInterfaceStatus {
        Available = "available",
        Associated = "associated",
        Attaching = "attaching",
        InUse = "in-use",
        Detaching = "detaching",
    }
}

ec2_enum! {
    pub enum FleetActivityStatus {
        Error = "error",
        PendingFulfillment = "pending_fulfillment",
        PendingTermination = "pending_termination",
        Fulfilled = "fulfilled",
    }
}

ec2_enum! {
    pub enum FleetStateCode {
        Submitted = "submitted",
        Active = "active",
        Deleted = "deleted",
        Failed = "failed",
        DeletedRunning = "deleted_running",
        DeletedTerminating = "deleted_terminating",
        Modifying = "modifying",
    }
}

ec2_enum! {
    pub enum FleetExcessCapacityTerminationPolicy {
        NoTermination = "no-termination",
        Termination = "termination",
    }
}

ec2_enum! {
    /// Shared by EC2 Fleets and Spot Fleets.
    pub enum FleetType {
        Request = "request",
        Maintain = "maintain",
        Instant = "instant",
    }
}

ec2_enum! {
    pub enum DefaultTargetCapacityType {
        Spot = "spot",
        OnDemand = "on-demand",
    }
}

ec2_enum! {
    pub enum SpotAllocationStrategy {
        LowestPrice = "lowest-price",
        Diversified = "diversified",
        CapacityOptimized = "capacity-optimized",
    }
}

ec2_enum! {
    pub enum SpotInstanceInterruptionBehavior {
        Hibernate = "hibernate",
        Stop = "stop",
        Terminate = "terminate",
    }
}

ec2_enum! {
    pub enum FleetOnDemandAllocationStrategy {
        LowestPrice = "lowest-price",
        Prioritized = "prioritized",
    }
}

ec2_enum! {
    pub enum FleetCapacityReservationUsageStrategy {
        UseCapacityReservationsFirst = "use-capacity-reservations-first",
    }
}

ec2_enum! {
    /// Whether a fleet instance is Spot or On-Demand.
    pub enum InstanceLifecycle {
        Spot = "spot",
        OnDemand = "on-demand",
    }
}

ec2_enum! {
    /// Spot Fleet allocation; camel case, unlike the EC2 Fleet values.
    pub enum AllocationStrategy {
        LowestPrice = "lowestPrice",
        Diversified = "diversified",
        CapacityOptimized = "capacityOptimized",
    }
}

ec2_enum! {
    pub enum OnDemandAllocationStrategy {
        LowestPrice = "lowestPrice",
        Prioritized = "prioritized",
    }
}

ec2_enum! {
    pub enum ExcessCapacityTerminationPolicy {
        NoTermination = "noTermination",
        Default = "default",
    }
}

ec2_enum! {
    pub enum UsageClassType {
        Spot = "spot",
        OnDemand = "on-demand",
    }
}

ec2_enum! {
    pub enum ArchitectureType {
        I386 = "i386",
        X8664 = "x86_64",
        Arm64 = "arm64",
    }
}

ec2_enum! {
    pub enum InstanceTypeHypervisor {
        Nitro = "nitro",
        Xen = "xen",
    }
}

ec2_enum! {
    pub enum DiskType {
        Hdd = "hdd",
        Ssd = "ssd",
    }
}

ec2_enum! {
    pub enum EbsOptimizedSupport {
        Unsupported = "unsupported",
        Supported = "supported",
        Default = "default",
    }
}

ec2_enum! {
    pub enum EbsEncryptionSupport {
        Unsupported = "unsupported",
        Supported = "supported",
    }
}

ec2_enum! {
    pub enum EnaSupport {
        Unsupported = "unsupported",
        Supported = "supported",
        Required = "required",
    }
}

ec2_enum! {
    pub enum PlacementGroupStrategy {
        Cluster = "cluster",
        Partition = "partition",
        Spread = "spread",
    }
}

ec2_enum! {
    pub enum LaunchTemplateInstanceMetadataOptionsState {
        Pending = "pending",
        Applied = "applied",
    }
}

ec2_enum! {
    pub enum LaunchTemplateHttpTokensState {
        Optional = "optional",
        Required = "required",
    }
}

ec2_enum! {
    pub enum LaunchTemplateInstanceMetadataEndpointState {
        Disabled = "disabled",
        Enabled = "enabled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{string_hash, Attribute};
    use crate::model::Placement;
    use crate::request::Ec2Model;
    use std::hash::Hasher;
    use std::str::FromStr;

    #[test]
    fn raw_and_symbolic_values_share_storage() {
        assert_eq!(VolumeType::from("gp2"), VolumeType::Gp2);
        assert_eq!(VolumeType::from("gp2".to_string()), VolumeType::Gp2);
        assert_eq!(VolumeType::Gp2.as_str(), "gp2");
        assert_eq!(OfferingTypeValues::from("No Upfront"), OfferingTypeValues::NoUpfront);
    }

    #[test]
    fn unknown_values_are_kept_verbatim() {
        let volume = VolumeType::from("gp3");
        assert_eq!(volume, VolumeType::Unknown("gp3".into()));
        assert_eq!(volume.to_string(), "gp3");
        assert!(!volume.is_known());
        assert!(VolumeType::Io1.is_known());
    }

    #[test]
    fn strict_conversion() {
        assert_eq!(Tenancy::known("host").unwrap(), Tenancy::Host);
        match Tenancy::known("shared") {
            Ok(t) => panic!("accepted {t}"),
            Err(err) => assert_eq!(format!("{err:#}"), "Cannot create enum from shared value!"),
        }
        match Tenancy::known("") {
            Ok(t) => panic!("accepted {t}"),
            Err(err) => assert_eq!(format!("{err:#}"), "Value cannot be null or empty!"),
        }
    }

    #[test]
    fn from_str_never_fails() {
        assert_eq!(TrafficType::from_str("ALL"), Ok(TrafficType::All));
        assert_eq!(
            TrafficType::from_str("all"),
            Ok(TrafficType::Unknown("all".to_string()))
        );
    }

    #[test]
    fn values_in_documented_order() {
        assert_eq!(ArchitectureValues::values(), ["i386", "x86_64", "arm64"]);
        assert_eq!(ResourceType::values().len(), 37);
    }

    #[test]
    fn hash_is_the_string_hash() {
        assert_eq!(Scope::Region.attribute_hash(), string_hash("Region"));
        assert_eq!(
            Scope::from("Region").attribute_hash(),
            Scope::Unknown("Region".into()).attribute_hash()
        );
    }

    #[test]
    fn serde_as_bare_string() {
        let json = serde_json::to_string(&ImageState::Deregistered).unwrap();
        assert_eq!(json, r#""deregistered""#);
        let state: ImageState = serde_json::from_str(r#""disabled""#).unwrap();
        assert_eq!(state, ImageState::Unknown("disabled".into()));
    }

    fn std_hash<T: std::hash::Hash>(value: &T) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn unknown_with_documented_text_is_that_variant() {
        let spelled = Tenancy::Unknown("host".into());
        assert_eq!(spelled, Tenancy::Host);
        assert_eq!(Tenancy::Host, spelled);
        assert_eq!(std_hash(&spelled), std_hash(&Tenancy::Host));
        assert_eq!(spelled.cmp(&Tenancy::Host), std::cmp::Ordering::Equal);
        assert_ne!(spelled, Tenancy::Dedicated);

        let symbolic = Placement::new().with_tenancy(Tenancy::Host);
        let hand_built = Placement::new().with_tenancy(spelled);
        assert_eq!(symbolic, hand_built);
        assert_eq!(std_hash(&symbolic), std_hash(&hand_built));
        assert_eq!(symbolic.to_string(), hand_built.to_string());
        match hand_built.to_json() {
            Ok(json) => assert_eq!(Placement::from_json(&json).unwrap(), hand_built),
            Err(err) => panic!("{err:#}"),
        }
    }
}
