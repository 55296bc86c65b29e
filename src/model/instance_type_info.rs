use crate::types::*;

ec2_model! {
    pub struct ProcessorInfo {
        many supported_architectures / set_supported_architectures / with_supported_architectures: ArchitectureType = "SupportedArchitectures";
        copy sustained_clock_speed_in_ghz / set_sustained_clock_speed_in_ghz / with_sustained_clock_speed_in_ghz: f64 = "SustainedClockSpeedInGhz";
    }
}

ec2_model! {
    pub struct VCpuInfo {
        copy default_v_cpus / set_default_v_cpus / with_default_v_cpus: i32 = "DefaultVCpus";
        copy default_cores / set_default_cores / with_default_cores: i32 = "DefaultCores";
        copy default_threads_per_core / set_default_threads_per_core / with_default_threads_per_core: i32 = "DefaultThreadsPerCore";
        /// Core counts accepted by `CpuOptions` at launch.
        many valid_cores / set_valid_cores / with_valid_cores: i32 = "ValidCores";
        many valid_threads_per_core / set_valid_threads_per_core / with_valid_threads_per_core: i32 = "ValidThreadsPerCore";
    }
}

ec2_model! {
    pub struct MemoryInfo {
        copy size_in_mib / set_size_in_mib / with_size_in_mib: i64 = "SizeInMiB";
    }
}

ec2_model! {
    pub struct DiskInfo {
        /// Per disk, GB.
        copy size_in_gb / set_size_in_gb / with_size_in_gb: i64 = "SizeInGB";
        copy count / set_count / with_count: i32 = "Count";
        one r#type / set_type / with_type: DiskType = "Type";
    }
}

ec2_model! {
    pub struct InstanceStorageInfo {
        copy total_size_in_gb / set_total_size_in_gb / with_total_size_in_gb: i64 = "TotalSizeInGB";
        many disks / set_disks / with_disks: DiskInfo = "Disks";
    }
}

ec2_model! {
    pub struct EbsInfo {
        one ebs_optimized_support / set_ebs_optimized_support / with_ebs_optimized_support: EbsOptimizedSupport = "EbsOptimizedSupport";
        one encryption_support / set_encryption_support / with_encryption_support: EbsEncryptionSupport = "EncryptionSupport";
    }
}

ec2_model! {
    pub struct NetworkInfo {
        /// Free text, e.g. `Up to 5 Gigabit`.
        one network_performance / set_network_performance / with_network_performance: String = "NetworkPerformance";
        copy maximum_network_interfaces / set_maximum_network_interfaces / with_maximum_network_interfaces: i32 = "MaximumNetworkInterfaces";
        copy ipv4_addresses_per_interface / set_ipv4_addresses_per_interface / with_ipv4_addresses_per_interface: i32 = "Ipv4AddressesPerInterface";
        copy ipv6_addresses_per_interface / set_ipv6_addresses_per_interface / with_ipv6_addresses_per_interface: i32 = "Ipv6AddressesPerInterface";
        copy ipv6_supported / set_ipv6_supported / with_ipv6_supported: bool = "Ipv6Supported";
        one ena_support / set_ena_support / with_ena_support: EnaSupport = "EnaSupport";
    }
}

ec2_model! {
    pub struct GpuDeviceMemoryInfo {
        copy size_in_mib / set_size_in_mib / with_size_in_mib: i32 = "SizeInMiB";
    }
}

ec2_model! {
    pub struct GpuDeviceInfo {
        one name / set_name / with_name: String = "Name";
        one manufacturer / set_manufacturer / with_manufacturer: String = "Manufacturer";
        copy count / set_count / with_count: i32 = "Count";
        one memory_info / set_memory_info / with_memory_info: GpuDeviceMemoryInfo = "MemoryInfo";
    }
}

ec2_model! {
    pub struct GpuInfo {
        many gpus / set_gpus / with_gpus: GpuDeviceInfo = "Gpus";
        copy total_gpu_memory_in_mib / set_total_gpu_memory_in_mib / with_total_gpu_memory_in_mib: i32 = "TotalGpuMemoryInMiB";
    }
}

ec2_model! {
    pub struct FpgaDeviceMemoryInfo {
        copy size_in_mib / set_size_in_mib / with_size_in_mib: i32 = "SizeInMiB";
    }
}

ec2_model! {
    pub struct FpgaDeviceInfo {
        one name / set_name / with_name: String = "Name";
        one manufacturer / set_manufacturer / with_manufacturer: String = "Manufacturer";
        copy count / set_count / with_count: i32 = "Count";
        one memory_info / set_memory_info / with_memory_info: FpgaDeviceMemoryInfo = "MemoryInfo";
    }
}

ec2_model! {
    pub struct FpgaInfo {
        many fpgas / set_fpgas / with_fpgas: FpgaDeviceInfo = "Fpgas";
        copy total_fpga_memory_in_mib / set_total_fpga_memory_in_mib / with_total_fpga_memory_in_mib: i32 = "TotalFpgaMemoryInMiB";
    }
}

ec2_model! {
    pub struct PlacementGroupInfo {
        many supported_strategies / set_supported_strategies / with_supported_strategies: PlacementGroupStrategy = "SupportedStrategies";
    }
}

ec2_model! {
    pub struct InferenceDeviceInfo {
        copy count / set_count / with_count: i32 = "Count";
        one name / set_name / with_name: String = "Name";
        one manufacturer / set_manufacturer / with_manufacturer: String = "Manufacturer";
    }
}

ec2_model! {
    pub struct InferenceAcceleratorInfo {
        many accelerators / set_accelerators / with_accelerators: InferenceDeviceInfo = "Accelerators";
    }
}

ec2_model! {
    /// One entry of `DescribeInstanceTypes`: what an instance type offers.
    pub struct InstanceTypeInfo {
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        copy current_generation / set_current_generation / with_current_generation: bool = "CurrentGeneration";
        copy free_tier_eligible / set_free_tier_eligible / with_free_tier_eligible: bool = "FreeTierEligible";
        many supported_usage_classes / set_supported_usage_classes / with_supported_usage_classes: UsageClassType = "SupportedUsageClasses";
        many supported_root_device_types / set_supported_root_device_types / with_supported_root_device_types: DeviceType = "SupportedRootDeviceTypes";
        many supported_virtualization_types / set_supported_virtualization_types / with_supported_virtualization_types: VirtualizationType = "SupportedVirtualizationTypes";
        copy bare_metal / set_bare_metal / with_bare_metal: bool = "BareMetal";
        one hypervisor / set_hypervisor / with_hypervisor: InstanceTypeHypervisor = "Hypervisor";
        one processor_info / set_processor_info / with_processor_info: ProcessorInfo = "ProcessorInfo";
        one v_cpu_info / set_v_cpu_info / with_v_cpu_info: VCpuInfo = "VCpuInfo";
        one memory_info / set_memory_info / with_memory_info: MemoryInfo = "MemoryInfo";
        copy instance_storage_supported / set_instance_storage_supported / with_instance_storage_supported: bool = "InstanceStorageSupported";
        one instance_storage_info / set_instance_storage_info / with_instance_storage_info: InstanceStorageInfo = "InstanceStorageInfo";
        one ebs_info / set_ebs_info / with_ebs_info: EbsInfo = "EbsInfo";
        one network_info / set_network_info / with_network_info: NetworkInfo = "NetworkInfo";
        one gpu_info / set_gpu_info / with_gpu_info: GpuInfo = "GpuInfo";
        one fpga_info / set_fpga_info / with_fpga_info: FpgaInfo = "FpgaInfo";
        one placement_group_info / set_placement_group_info / with_placement_group_info: PlacementGroupInfo = "PlacementGroupInfo";
        one inference_accelerator_info / set_inference_accelerator_info / with_inference_accelerator_info: InferenceAcceleratorInfo = "InferenceAcceleratorInfo";
        copy hibernation_supported / set_hibernation_supported / with_hibernation_supported: bool = "HibernationSupported";
        copy burstable_performance_supported / set_burstable_performance_supported / with_burstable_performance_supported: bool = "BurstablePerformanceSupported";
        copy dedicated_hosts_supported / set_dedicated_hosts_supported / with_dedicated_hosts_supported: bool = "DedicatedHostsSupported";
        copy auto_recovery_supported / set_auto_recovery_supported / with_auto_recovery_supported: bool = "AutoRecoverySupported";
    }
}

impl InstanceTypeInfo {
    /// Default vCPU count, if the vCPU block was returned.
    pub fn default_v_cpus(&self) -> Option<i32> {
        self.v_cpu_info()?.default_v_cpus()
    }

    pub fn supports_spot(&self) -> bool {
        self.supported_usage_classes()
            .is_some_and(|classes| classes.contains(&UsageClassType::Spot))
    }
}
