ec2_model! {
    pub struct Phase1EncryptionAlgorithmsRequestListValue {
        /// `AES128`, `AES256`, `AES128-GCM-16` or `AES256-GCM-16`.
        one value / set_value / with_value: String = "Value";
    }
}

ec2_model! {
    pub struct Phase2EncryptionAlgorithmsRequestListValue {
        one value / set_value / with_value: String = "Value";
    }
}

ec2_model! {
    pub struct Phase1IntegrityAlgorithmsRequestListValue {
        /// `SHA1`, `SHA2-256`, `SHA2-384` or `SHA2-512`.
        one value / set_value / with_value: String = "Value";
    }
}

ec2_model! {
    pub struct Phase2IntegrityAlgorithmsRequestListValue {
        one value / set_value / with_value: String = "Value";
    }
}

ec2_model! {
    pub struct Phase1DHGroupNumbersRequestListValue {
        copy value / set_value / with_value: i32 = "Value";
    }
}

ec2_model! {
    pub struct Phase2DHGroupNumbersRequestListValue {
        copy value / set_value / with_value: i32 = "Value";
    }
}

ec2_model! {
    pub struct IKEVersionsRequestListValue {
        /// `ikev1` or `ikev2`.
        one value / set_value / with_value: String = "Value";
    }
}

// The list values are single-attribute wrappers; let plain values stand in
// for them in the `with_*` builders.
macro_rules! list_value_from {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    $name::new().with_value(value)
                }
            }
        )*
    };
}

list_value_from! {
    Phase1EncryptionAlgorithmsRequestListValue: &str,
    Phase2EncryptionAlgorithmsRequestListValue: &str,
    Phase1IntegrityAlgorithmsRequestListValue: &str,
    Phase2IntegrityAlgorithmsRequestListValue: &str,
    Phase1DHGroupNumbersRequestListValue: i32,
    Phase2DHGroupNumbersRequestListValue: i32,
    IKEVersionsRequestListValue: &str,
}

ec2_model! {
    /// Tunnel options for one VPN tunnel of a Site-to-Site VPN connection.
    ///
    /// Ranges EC2 enforces (not checked here): phase 1 lifetime 900 to 28800
    /// seconds, phase 2 lifetime 900 to 3600 and below phase 1, rekey fuzz
    /// 0 to 100 percent, replay window 64 to 2048 packets, DPD timeout 30 or
    /// more.
    pub struct VpnTunnelOptionsSpecification {
        /// A /30 from `169.254.0.0/16`.
        one tunnel_inside_cidr / set_tunnel_inside_cidr / with_tunnel_inside_cidr: String = "TunnelInsideCidr";
        /// 8 to 64 characters of alphanumerics, periods and underscores; cannot start with zero.
        one pre_shared_key / set_pre_shared_key / with_pre_shared_key: String = "PreSharedKey";
        copy phase1_lifetime_seconds / set_phase1_lifetime_seconds / with_phase1_lifetime_seconds: i32 = "Phase1LifetimeSeconds";
        copy phase2_lifetime_seconds / set_phase2_lifetime_seconds / with_phase2_lifetime_seconds: i32 = "Phase2LifetimeSeconds";
        copy rekey_margin_time_seconds / set_rekey_margin_time_seconds / with_rekey_margin_time_seconds: i32 = "RekeyMarginTimeSeconds";
        copy rekey_fuzz_percentage / set_rekey_fuzz_percentage / with_rekey_fuzz_percentage: i32 = "RekeyFuzzPercentage";
        copy replay_window_size / set_replay_window_size / with_replay_window_size: i32 = "ReplayWindowSize";
        copy dpd_timeout_seconds / set_dpd_timeout_seconds / with_dpd_timeout_seconds: i32 = "DPDTimeoutSeconds";
        many phase1_encryption_algorithms / set_phase1_encryption_algorithms / with_phase1_encryption_algorithms: Phase1EncryptionAlgorithmsRequestListValue = "Phase1EncryptionAlgorithms";
        many phase2_encryption_algorithms / set_phase2_encryption_algorithms / with_phase2_encryption_algorithms: Phase2EncryptionAlgorithmsRequestListValue = "Phase2EncryptionAlgorithms";
        many phase1_integrity_algorithms / set_phase1_integrity_algorithms / with_phase1_integrity_algorithms: Phase1IntegrityAlgorithmsRequestListValue = "Phase1IntegrityAlgorithms";
        many phase2_integrity_algorithms / set_phase2_integrity_algorithms / with_phase2_integrity_algorithms: Phase2IntegrityAlgorithmsRequestListValue = "Phase2IntegrityAlgorithms";
        many phase1_dh_group_numbers / set_phase1_dh_group_numbers / with_phase1_dh_group_numbers: Phase1DHGroupNumbersRequestListValue = "Phase1DHGroupNumbers";
        many phase2_dh_group_numbers / set_phase2_dh_group_numbers / with_phase2_dh_group_numbers: Phase2DHGroupNumbersRequestListValue = "Phase2DHGroupNumbers";
        many ike_versions / set_ike_versions / with_ike_versions: IKEVersionsRequestListValue = "IKEVersions";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn build_tunnel_options() {
        let options = VpnTunnelOptionsSpecification::new()
            .with_tunnel_inside_cidr("169.254.10.0/30")
            .with_dpd_timeout_seconds(30)
            .with_phase1_dh_group_numbers([2, 14])
            .with_ike_versions(["ikev2"]);
        assert_eq!(
            options.to_string(),
            "{TunnelInsideCidr: 169.254.10.0/30, DPDTimeoutSeconds: 30, \
             Phase1DHGroupNumbers: [{Value: 2}, {Value: 14}], IKEVersions: [{Value: ikev2}]}"
        );
        assert_eq!(
            options.to_json().unwrap(),
            r#"{"TunnelInsideCidr":"169.254.10.0/30","DPDTimeoutSeconds":30,"Phase1DHGroupNumbers":[{"Value":2},{"Value":14}],"IKEVersions":[{"Value":"ikev2"}]}"#
        );
    }

    #[test]
    fn list_values_accumulate_across_calls() {
        let options = VpnTunnelOptionsSpecification::new()
            .with_phase2_encryption_algorithms(["AES128"])
            .with_phase2_encryption_algorithms(["AES256"]);
        let values: Vec<_> = options
            .phase2_encryption_algorithms()
            .unwrap()
            .iter()
            .filter_map(Phase2EncryptionAlgorithmsRequestListValue::value)
            .collect();
        assert_eq!(values, ["AES128", "AES256"]);
    }

    #[test]
    fn cleared_list_is_absent() {
        let mut options = VpnTunnelOptionsSpecification::new().with_ike_versions(["ikev1"]);
        options.set_ike_versions(Some(vec![]));
        assert!(options.ike_versions().is_none());
        assert_eq!(options, VpnTunnelOptionsSpecification::new());
    }
}
