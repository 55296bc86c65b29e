use crate::attribute::Timestamp;
use crate::types::*;

ec2_model! {
    /// EBS volume settings used when an instance or image is launched.
    pub struct EbsBlockDevice {
        copy delete_on_termination / set_delete_on_termination / with_delete_on_termination: bool = "DeleteOnTermination";
        /// Provisioned IOPS; required for `io1`, not used by the other volume types.
        copy iops / set_iops / with_iops: i32 = "Iops";
        one snapshot_id / set_snapshot_id / with_snapshot_id: String = "SnapshotId";
        /// Size in GiB.
        copy volume_size / set_volume_size / with_volume_size: i32 = "VolumeSize";
        one volume_type / set_volume_type / with_volume_type: VolumeType = "VolumeType";
        one kms_key_id / set_kms_key_id / with_kms_key_id: String = "KmsKeyId";
        copy encrypted / set_encrypted / with_encrypted: bool = "Encrypted";
    }
}

ec2_model! {
    /// A block device mapping for an image or a `RunInstances` call.
    pub struct BlockDeviceMapping {
        /// Device name, e.g. `/dev/sdh` or `xvdh`.
        one device_name / set_device_name / with_device_name: String = "DeviceName";
        /// Instance store volume name (`ephemeral0` .. `ephemeral23`).
        one virtual_name / set_virtual_name / with_virtual_name: String = "VirtualName";
        one ebs / set_ebs / with_ebs: EbsBlockDevice = "Ebs";
        /// Suppresses the device named in the image's mapping when set (to an empty string).
        one no_device / set_no_device / with_no_device: String = "NoDevice";
    }
}

ec2_model! {
    pub struct EbsInstanceBlockDevice {
        copy attach_time / set_attach_time / with_attach_time: Timestamp = "AttachTime";
        copy delete_on_termination / set_delete_on_termination / with_delete_on_termination: bool = "DeleteOnTermination";
        one status / set_status / with_status: AttachmentStatus = "Status";
        one volume_id / set_volume_id / with_volume_id: String = "VolumeId";
    }
}

ec2_model! {
    /// A block device attached to a running instance.
    pub struct InstanceBlockDeviceMapping {
        one device_name / set_device_name / with_device_name: String = "DeviceName";
        one ebs / set_ebs / with_ebs: EbsInstanceBlockDevice = "Ebs";
    }
}
