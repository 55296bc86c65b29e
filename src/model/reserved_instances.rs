use super::Tag;
use crate::attribute::Timestamp;
use crate::types::*;

ec2_model! {
    pub struct RecurringCharge {
        copy amount / set_amount / with_amount: f64 = "Amount";
        one frequency / set_frequency / with_frequency: RecurringChargeFrequency = "Frequency";
    }
}

ec2_model! {
    /// A purchased Reserved Instance.
    pub struct ReservedInstances {
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        /// Term in seconds.
        copy duration / set_duration / with_duration: i64 = "Duration";
        copy end / set_end / with_end: Timestamp = "End";
        copy fixed_price / set_fixed_price / with_fixed_price: f32 = "FixedPrice";
        copy instance_count / set_instance_count / with_instance_count: i32 = "InstanceCount";
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        one product_description / set_product_description / with_product_description: RiProductDescription = "ProductDescription";
        one reserved_instances_id / set_reserved_instances_id / with_reserved_instances_id: String = "ReservedInstancesId";
        copy start / set_start / with_start: Timestamp = "Start";
        one state / set_state / with_state: ReservedInstanceState = "State";
        copy usage_price / set_usage_price / with_usage_price: f32 = "UsagePrice";
        one currency_code / set_currency_code / with_currency_code: CurrencyCodeValues = "CurrencyCode";
        one instance_tenancy / set_instance_tenancy / with_instance_tenancy: Tenancy = "InstanceTenancy";
        one offering_class / set_offering_class / with_offering_class: OfferingClassType = "OfferingClass";
        one offering_type / set_offering_type / with_offering_type: OfferingTypeValues = "OfferingType";
        many recurring_charges / set_recurring_charges / with_recurring_charges: RecurringCharge = "RecurringCharges";
        one scope / set_scope / with_scope: Scope = "Scope";
        many tags / set_tags / with_tags: Tag = "Tags";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parse_cli_reserved_instances_succeeds() {
        let json = r#"{
            "Duration": 31536000,
            "End": "2020-01-01T00:00:00Z",
            "FixedPrice": 0.0,
            "InstanceCount": 2,
            "InstanceType": "m5.large",
            "ProductDescription": "Linux/UNIX (Amazon VPC)",
            "ReservedInstancesId": "af9f760e-6f91-4559-85f7-4980eexample",
            "Start": "2019-01-01T00:00:00Z",
            "State": "active",
            "UsagePrice": 0.0,
            "CurrencyCode": "USD",
            "InstanceTenancy": "default",
            "OfferingClass": "standard",
            "OfferingType": "No Upfront",
            "RecurringCharges": [{ "Amount": 0.058, "Frequency": "Hourly" }],
            "Scope": "Region"
        }"#;
        match ReservedInstances::from_json(json) {
            Ok(ri) => {
                assert_eq!(ri.duration(), Some(31_536_000));
                assert_eq!(ri.start(), Some(Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap()));
                assert_eq!(ri.offering_type(), Some(&OfferingTypeValues::NoUpfront));
                assert_eq!(ri.product_description(), Some(&RiProductDescription::LinuxUnixAmazonVpc));
                assert_eq!(ri.scope(), Some(&Scope::Region));
                let charge = &ri.recurring_charges().unwrap()[0];
                assert_eq!(charge.amount(), Some(0.058));
                assert_eq!(charge.frequency(), Some(&RecurringChargeFrequency::Hourly));
            }
            Err(err) => panic!("{err:#}"),
        }
    }

    #[test]
    fn signed_zero_prices_are_equal() {
        let a = ReservedInstances::new().with_fixed_price(0.0);
        let b = ReservedInstances::new().with_fixed_price(-0.0);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn display_prices_and_dates() {
        let ri = ReservedInstances::new()
            .with_usage_price(0.5)
            .with_end(Utc.with_ymd_and_hms(2021, 6, 30, 12, 0, 0).unwrap());
        assert_eq!(ri.to_string(), "{End: 2021-06-30T12:00:00Z, UsagePrice: 0.5}");
    }
}
