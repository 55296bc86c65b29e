use super::{BlockDeviceMapping, ProductCode, StateReason, Tag};
use crate::types::*;

ec2_model! {
    /// An Amazon Machine Image.
    pub struct Image {
        one architecture / set_architecture / with_architecture: ArchitectureValues = "Architecture";
        /// As sent by EC2 (`2019-12-04T19:13:01.000Z`); not parsed.
        one creation_date / set_creation_date / with_creation_date: String = "CreationDate";
        one image_id / set_image_id / with_image_id: String = "ImageId";
        /// `<bucket>/<manifest>` for instance-store images, `<owner>/<name>` for EBS-backed ones.
        one image_location / set_image_location / with_image_location: String = "ImageLocation";
        one image_type / set_image_type / with_image_type: ImageTypeValues = "ImageType";
        /// Launch permissions are public.
        copy public / set_public / with_public: bool = "Public";
        one kernel_id / set_kernel_id / with_kernel_id: String = "KernelId";
        one owner_id / set_owner_id / with_owner_id: String = "OwnerId";
        one platform / set_platform / with_platform: PlatformValues = "Platform";
        one platform_details / set_platform_details / with_platform_details: String = "PlatformDetails";
        /// Billing code, e.g. `RunInstances:0002` for Windows.
        one usage_operation / set_usage_operation / with_usage_operation: String = "UsageOperation";
        many product_codes / set_product_codes / with_product_codes: ProductCode = "ProductCodes";
        one ramdisk_id / set_ramdisk_id / with_ramdisk_id: String = "RamdiskId";
        one state / set_state / with_state: ImageState = "State";
        many block_device_mappings / set_block_device_mappings / with_block_device_mappings: BlockDeviceMapping = "BlockDeviceMappings";
        one description / set_description / with_description: String = "Description";
        copy ena_support / set_ena_support / with_ena_support: bool = "EnaSupport";
        one hypervisor / set_hypervisor / with_hypervisor: HypervisorType = "Hypervisor";
        /// `amazon`, `aws-marketplace` or the owner's account alias.
        one image_owner_alias / set_image_owner_alias / with_image_owner_alias: String = "ImageOwnerAlias";
        one name / set_name / with_name: String = "Name";
        one root_device_name / set_root_device_name / with_root_device_name: String = "RootDeviceName";
        one root_device_type / set_root_device_type / with_root_device_type: DeviceType = "RootDeviceType";
        one sriov_net_support / set_sriov_net_support / with_sriov_net_support: String = "SriovNetSupport";
        one state_reason / set_state_reason / with_state_reason: StateReason = "StateReason";
        many tags / set_tags / with_tags: Tag = "Tags";
        one virtualization_type / set_virtualization_type / with_virtualization_type: VirtualizationType = "VirtualizationType";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn parse_cli_image_succeeds() {
        let json = r#"{
            "Architecture": "x86_64",
            "CreationDate": "2019-12-04T19:13:01.000Z",
            "ImageId": "ami-0abcdef1234567890",
            "ImageLocation": "amazon/amzn2-ami-hvm-2.0.20191116.0-x86_64-gp2",
            "ImageType": "machine",
            "Public": true,
            "OwnerId": "137112412989",
            "State": "available",
            "BlockDeviceMappings": [
                { "DeviceName": "/dev/xvda",
                  "Ebs": { "DeleteOnTermination": true, "SnapshotId": "snap-0abc", "VolumeSize": 8, "VolumeType": "gp2", "Encrypted": false } }
            ],
            "EnaSupport": true,
            "Hypervisor": "xen",
            "ImageOwnerAlias": "amazon",
            "Name": "amzn2-ami-hvm-2.0.20191116.0-x86_64-gp2",
            "RootDeviceName": "/dev/xvda",
            "RootDeviceType": "ebs",
            "VirtualizationType": "hvm"
        }"#;
        match Image::from_json(json) {
            Ok(image) => {
                assert_eq!(image.public(), Some(true));
                assert_eq!(image.state(), Some(&ImageState::Available));
                assert_eq!(image.creation_date(), Some("2019-12-04T19:13:01.000Z"));
                let root = &image.block_device_mappings().unwrap()[0];
                assert_eq!(root.device_name(), image.root_device_name());
                assert_eq!(
                    root.ebs().and_then(|ebs| ebs.volume_type()),
                    Some(&VolumeType::Gp2)
                );
                assert!(image.tags().is_none());
            }
            Err(err) => panic!("{err:#}"),
        }
    }

    #[test]
    fn public_flag_display() {
        let image = Image::new().with_image_id("ami-1").with_public(false);
        assert_eq!(image.to_string(), "{ImageId: ami-1, Public: false}");
    }
}
