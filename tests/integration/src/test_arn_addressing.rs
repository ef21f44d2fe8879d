//! Bucket-field discrimination and passthrough behavior.
//!
//! The rewrite layer must only ever touch requests whose bucket field is a
//! multi-region access point ARN; everything else passes through untouched.

#[cfg(test)]
mod tests {
    use arnpoint_arn::ResourceArn;
    use arnpoint_core::ArnAddressing;

    use crate::{MRAP_ARN, base_config, list_request};

    #[test]
    fn test_should_pass_plain_bucket_names_through() {
        let mut req = list_request("my-bucket");
        let before = req.uri.clone();

        let outcome = req.apply_arn_addressing(&base_config()).unwrap();

        assert_eq!(outcome, ArnAddressing::PlainBucket);
        assert_eq!(req.uri, before);
    }

    #[test]
    fn test_should_not_mistake_arn_like_bucket_names_for_arns() {
        // Only the exact `arn:` prefix marks an ARN.
        let mut req = list_request("arnold-bucket");

        let outcome = req.apply_arn_addressing(&base_config()).unwrap();

        assert_eq!(outcome, ArnAddressing::PlainBucket);
    }

    #[test]
    fn test_should_defer_single_region_access_point_arns() {
        let mut req = list_request("arn:aws:s3:us-west-2:123456789012:accesspoint:myendpoint");
        let before = req.uri.clone();

        let outcome = req.apply_arn_addressing(&base_config()).unwrap();

        let ArnAddressing::Deferred(arn) = outcome else {
            panic!("expected a deferred ARN, got {outcome:?}");
        };
        assert_eq!(arn.region(), "us-west-2");
        assert_eq!(arn.resource_name(), "myendpoint");
        assert_eq!(req.uri, before);
    }

    #[test]
    fn test_should_hand_back_the_parsed_arn_on_deferral() {
        let bucket = "arn:aws:s3:eu-central-1:123456789012:accesspoint:myendpoint";
        let mut req = list_request(bucket);

        let outcome = req.apply_arn_addressing(&base_config()).unwrap();

        let expected = ResourceArn::parse(bucket).unwrap();
        assert_eq!(outcome, ArnAddressing::Deferred(expected));
    }

    #[test]
    fn test_should_defer_outposts_arns() {
        let mut req = list_request(
            "arn:aws:s3-outposts:us-west-2:123456789012:outpost/op-01624:accesspoint/my-ap",
        );

        let outcome = req.apply_arn_addressing(&base_config()).unwrap();

        assert!(matches!(outcome, ArnAddressing::Deferred(_)));
    }

    #[test]
    fn test_should_preserve_operation_path_and_query() {
        let mut req = list_request(MRAP_ARN);
        let query = req.uri.query().map(ToOwned::to_owned);

        req.apply_arn_addressing(&base_config()).unwrap();

        assert_eq!(req.uri.query().map(ToOwned::to_owned), query);
        assert_eq!(req.uri.path(), "/");
    }

    #[test]
    fn test_should_produce_identical_outcomes_on_repeated_application() {
        let mut req = list_request(MRAP_ARN);

        let first = req.apply_arn_addressing(&base_config()).unwrap();
        let second = req.apply_arn_addressing(&base_config()).unwrap();

        assert_eq!(first, second);
    }
}
