//! Parameters of the `Describe*` actions.
//!
//! `max_results` bounds one page (EC2 caps it per action, 5 to 1000 for most);
//! `next_token` carries the token returned by the previous page.

use super::Filter;
use crate::types::*;

ec2_model! {
    pub struct DescribeImagesRequest {
        /// Images with explicit launch permissions for these accounts (`self`, `all` or an account id).
        many executable_users / set_executable_users / with_executable_users: String = "ExecutableUsers";
        many filters / set_filters / with_filters: Filter = "Filters";
        /// Defaults to every image you have launch permissions for.
        many image_ids / set_image_ids / with_image_ids: String = "ImageIds";
        /// Account ids, `self`, `amazon` or `aws-marketplace`.
        many owners / set_owners / with_owners: String = "Owners";
        /// Check permissions without making the call.
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
    }
}

ec2_request!(DescribeImagesRequest => "DescribeImages");

ec2_model! {
    pub struct DescribeInstancesRequest {
        many filters / set_filters / with_filters: Filter = "Filters";
        many instance_ids / set_instance_ids / with_instance_ids: String = "InstanceIds";
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
        /// Cannot be combined with `instance_ids`.
        copy max_results / set_max_results / with_max_results: i32 = "MaxResults";
        one next_token / set_next_token / with_next_token: String = "NextToken";
    }
}

ec2_request!(DescribeInstancesRequest => "DescribeInstances", paginated);

ec2_model! {
    pub struct DescribeInstanceTypesRequest {
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
        many instance_types / set_instance_types / with_instance_types: InstanceType = "InstanceTypes";
        many filters / set_filters / with_filters: Filter = "Filters";
        copy max_results / set_max_results / with_max_results: i32 = "MaxResults";
        one next_token / set_next_token / with_next_token: String = "NextToken";
    }
}

ec2_request!(DescribeInstanceTypesRequest => "DescribeInstanceTypes", paginated);

ec2_model! {
    pub struct DescribeNetworkInterfacesRequest {
        many filters / set_filters / with_filters: Filter = "Filters";
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
        many network_interface_ids / set_network_interface_ids / with_network_interface_ids: String = "NetworkInterfaceIds";
        one next_token / set_next_token / with_next_token: String = "NextToken";
        copy max_results / set_max_results / with_max_results: i32 = "MaxResults";
    }
}

ec2_request!(DescribeNetworkInterfacesRequest => "DescribeNetworkInterfaces", paginated);

ec2_model! {
    pub struct DescribeReservedInstancesOfferingsRequest {
        one availability_zone / set_availability_zone / with_availability_zone: String = "AvailabilityZone";
        many filters / set_filters / with_filters: Filter = "Filters";
        /// Include Reserved Instance Marketplace offerings.
        copy include_marketplace / set_include_marketplace / with_include_marketplace: bool = "IncludeMarketplace";
        one instance_type / set_instance_type / with_instance_type: InstanceType = "InstanceType";
        /// Seconds; defaults to 94608000 (3 years).
        copy max_duration / set_max_duration / with_max_duration: i64 = "MaxDuration";
        /// Defaults to 20.
        copy max_instance_count / set_max_instance_count / with_max_instance_count: i32 = "MaxInstanceCount";
        /// Seconds; defaults to 2592000 (1 month).
        copy min_duration / set_min_duration / with_min_duration: i64 = "MinDuration";
        one offering_class / set_offering_class / with_offering_class: OfferingClassType = "OfferingClass";
        one product_description / set_product_description / with_product_description: RiProductDescription = "ProductDescription";
        many reserved_instances_offering_ids / set_reserved_instances_offering_ids / with_reserved_instances_offering_ids: String = "ReservedInstancesOfferingIds";
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
        one instance_tenancy / set_instance_tenancy / with_instance_tenancy: Tenancy = "InstanceTenancy";
        copy max_results / set_max_results / with_max_results: i32 = "MaxResults";
        one next_token / set_next_token / with_next_token: String = "NextToken";
        one offering_type / set_offering_type / with_offering_type: OfferingTypeValues = "OfferingType";
    }
}

ec2_request!(DescribeReservedInstancesOfferingsRequest => "DescribeReservedInstancesOfferings", paginated);

ec2_model! {
    pub struct DescribeSecurityGroupsRequest {
        many filters / set_filters / with_filters: Filter = "Filters";
        many group_ids / set_group_ids / with_group_ids: String = "GroupIds";
        /// Default VPC only; use a `group-name` filter elsewhere.
        many group_names / set_group_names / with_group_names: String = "GroupNames";
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
        one next_token / set_next_token / with_next_token: String = "NextToken";
        copy max_results / set_max_results / with_max_results: i32 = "MaxResults";
    }
}

ec2_request!(DescribeSecurityGroupsRequest => "DescribeSecurityGroups", paginated);

ec2_model! {
    pub struct DescribeCapacityReservationsRequest {
        many capacity_reservation_ids / set_capacity_reservation_ids / with_capacity_reservation_ids: String = "CapacityReservationIds";
        one next_token / set_next_token / with_next_token: String = "NextToken";
        copy max_results / set_max_results / with_max_results: i32 = "MaxResults";
        many filters / set_filters / with_filters: Filter = "Filters";
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
    }
}

ec2_request!(DescribeCapacityReservationsRequest => "DescribeCapacityReservations", paginated);

ec2_model! {
    pub struct DescribeRouteTablesRequest {
        many filters / set_filters / with_filters: Filter = "Filters";
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
        many route_table_ids / set_route_table_ids / with_route_table_ids: String = "RouteTableIds";
        one next_token / set_next_token / with_next_token: String = "NextToken";
        copy max_results / set_max_results / with_max_results: i32 = "MaxResults";
    }
}

ec2_request!(DescribeRouteTablesRequest => "DescribeRouteTables", paginated);

ec2_model! {
    pub struct DescribeSpotInstanceRequestsRequest {
        many filters / set_filters / with_filters: Filter = "Filters";
        copy dry_run / set_dry_run / with_dry_run: bool = "DryRun";
        many spot_instance_request_ids / set_spot_instance_request_ids / with_spot_instance_request_ids: String = "SpotInstanceRequestIds";
        one next_token / set_next_token / with_next_token: String = "NextToken";
        copy max_results / set_max_results / with_max_results: i32 = "MaxResults";
    }
}

ec2_request!(DescribeSpotInstanceRequestsRequest => "DescribeSpotInstanceRequests", paginated);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn describe_images_builder() {
        let request = DescribeImagesRequest::new()
            .with_image_ids(["ami-1", "ami-2"])
            .with_dry_run(true);
        assert_eq!(request.image_ids().unwrap(), ["ami-1", "ami-2"]);
        assert_eq!(request.dry_run(), Some(true));
        assert!(request.filters().is_none());

        let shown = request.to_string();
        assert!(shown.contains("ImageIds:"));
        assert!(shown.contains("DryRun:"));
        assert!(!shown.contains("Filters:"));
        assert_eq!(shown, "{ImageIds: [ami-1, ami-2], DryRun: true}");
    }

    #[test]
    fn repeated_builders_accumulate() {
        let request = DescribeInstancesRequest::new()
            .with_filters([("instance-state-name", ["running"])])
            .with_filters([("tag:env", ["prod", "staging"])])
            .with_instance_ids(["i-1"])
            .with_instance_ids(Vec::<String>::new());
        let names: Vec<_> = request.filters().unwrap().iter().filter_map(Filter::name).collect();
        assert_eq!(names, ["instance-state-name", "tag:env"]);
        assert_eq!(request.instance_ids().unwrap(), ["i-1"]);
    }

    #[test]
    fn empty_builder_input_creates_an_empty_list() {
        let request = DescribeImagesRequest::new().with_owners(Vec::<&str>::new());
        assert_eq!(request.owners().map(<[String]>::len), Some(0));
        assert_ne!(request, DescribeImagesRequest::new());
        assert_eq!(request.to_string(), "{Owners: []}");
    }

    #[test]
    fn setters_replace_and_clear() {
        let mut request = DescribeSecurityGroupsRequest::new().with_group_ids(["sg-1", "sg-2"]);
        request.set_group_ids(Some(vec!["sg-3".to_string()]));
        assert_eq!(request.group_ids().unwrap(), ["sg-3"]);
        request.set_group_ids(None);
        assert!(request.group_ids().is_none());
        request.set_dry_run(Some(false));
        request.set_dry_run(Some(false));
        assert_eq!(request.dry_run(), Some(false));
    }

    fn walk_pages<R: Paginated>(request: &mut R, mut pages: Vec<Option<&str>>) -> usize {
        let mut calls = 0;
        loop {
            calls += 1;
            let next = pages.remove(0).map(str::to_string);
            if next.is_none() {
                return calls;
            }
            request.set_next_token(next);
        }
    }

    #[test]
    fn pagination_is_generic() {
        let mut request = DescribeInstancesRequest::new().with_max_results(5);
        assert_eq!(Paginated::max_results(&request), Some(5));
        assert_eq!(walk_pages(&mut request, vec![Some("t1"), Some("t2"), None]), 3);
        assert_eq!(Paginated::next_token(&request), Some("t2"));

        let mut routes = DescribeRouteTablesRequest::new();
        assert_eq!(walk_pages(&mut routes, vec![None]), 1);
        assert!(routes.next_token().is_none());
    }

    #[test]
    fn actions() {
        assert_eq!(DescribeImagesRequest::ACTION, "DescribeImages");
        assert_eq!(DescribeSpotInstanceRequestsRequest::ACTION, "DescribeSpotInstanceRequests");
        assert_eq!(DescribeInstanceTypesRequest::NAME, "DescribeInstanceTypesRequest");
    }

    #[test]
    fn offerings_request_json() {
        let request = DescribeReservedInstancesOfferingsRequest::new()
            .with_instance_type(InstanceType::M5Large)
            .with_offering_class("convertible")
            .with_max_duration(31_536_000)
            .with_include_marketplace(false);
        match request.to_json() {
            Ok(json) => assert_eq!(
                json,
                r#"{"IncludeMarketplace":false,"InstanceType":"m5.large","MaxDuration":31536000,"OfferingClass":"convertible"}"#
            ),
            Err(err) => panic!("{err:#}"),
        }
    }

    #[test]
    fn instance_types_request_from_cli_input() {
        let json = r#"{"InstanceTypes": ["t2.micro", "c5.metal"], "MaxResults": 20}"#;
        match DescribeInstanceTypesRequest::from_reader(json.as_bytes()) {
            Ok(request) => {
                assert_eq!(
                    request.instance_types().unwrap(),
                    [InstanceType::T2Micro, InstanceType::C5Metal]
                );
                assert_eq!(request.max_results(), Some(20));
            }
            Err(err) => panic!("{err:#}"),
        }
    }
}
