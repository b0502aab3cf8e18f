//! # Validator Lookup Tests
//!
//! Plain-presence lookups and assertions for every resource kind.
//!
//! These tests verify:
//! - `get_*` returns the first record or `None`
//! - `assert_*_exists` agrees with `get_*` for plain-presence kinds
//! - Service errors are indistinguishable from empty results
//! - Transport errors reach the caller instead of reading as absence
//! - Every lookup is a single describe call

mod common;

use aws_sdk_ec2::types::{
    DhcpOptions, InternetGateway, NetworkAcl, SecurityGroup, Subnet, SubnetState, Vpc,
    VpcEndpoint, VpcState,
};
use common::FakeEc2;
use ec2_e2e_validator::prelude::*;

fn populated() -> FakeEc2 {
    let mut fake = FakeEc2::new();
    fake.dhcp_options
        .push(DhcpOptions::builder().dhcp_options_id("dopt-1").build());
    fake.internet_gateways
        .push(InternetGateway::builder().internet_gateway_id("igw-1").build());
    fake.network_acls
        .push(NetworkAcl::builder().network_acl_id("acl-1").build());
    fake.security_groups.push(
        SecurityGroup::builder()
            .group_id("sg-1")
            .group_name("e2e")
            .build(),
    );
    fake.subnets.push(
        Subnet::builder()
            .subnet_id("subnet-1")
            .state(SubnetState::Available)
            .build(),
    );
    fake.vpcs.push(
        Vpc::builder()
            .vpc_id("vpc-1")
            .cidr_block("10.0.0.0/16")
            .state(VpcState::Available)
            .build(),
    );
    fake.vpc_endpoints
        .push(VpcEndpoint::builder().vpc_endpoint_id("vpce-1").build());
    fake
}

/// (kind, existing id) pairs with plain presence semantics
const PLAIN_KINDS: [(ResourceKind, &str); 7] = [
    (ResourceKind::DhcpOptions, "dopt-1"),
    (ResourceKind::InternetGateway, "igw-1"),
    (ResourceKind::NetworkAcl, "acl-1"),
    (ResourceKind::SecurityGroup, "sg-1"),
    (ResourceKind::Subnet, "subnet-1"),
    (ResourceKind::Vpc, "vpc-1"),
    (ResourceKind::VpcEndpoint, "vpce-1"),
];

#[tokio::test]
async fn test_get_returns_matching_record() {
    let validator = Ec2Validator::new(populated());

    let vpc = validator.get_vpc("vpc-1").await.unwrap().unwrap();
    assert_eq!(vpc.vpc_id(), Some("vpc-1"));
    assert_eq!(vpc.cidr_block(), Some("10.0.0.0/16"));

    let sg = validator.get_security_group("sg-1").await.unwrap().unwrap();
    assert_eq!(sg.group_name(), Some("e2e"));
}

#[tokio::test]
async fn test_get_unknown_id_is_none() {
    let validator = Ec2Validator::new(populated());

    assert!(validator.get_dhcp_options("dopt-missing").await.unwrap().is_none());
    assert!(validator.get_internet_gateway("igw-missing").await.unwrap().is_none());
    assert!(validator.get_network_acl("acl-missing").await.unwrap().is_none());
    assert!(validator.get_security_group("sg-missing").await.unwrap().is_none());
    assert!(validator.get_subnet("subnet-missing").await.unwrap().is_none());
    assert!(validator.get_vpc("vpc-missing").await.unwrap().is_none());
    assert!(validator.get_vpc_endpoint("vpce-missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_first_record_is_returned_when_api_returns_several() {
    let mut fake = FakeEc2::new();
    fake.vpcs.push(
        Vpc::builder()
            .vpc_id("vpc-dup")
            .cidr_block("10.0.0.0/16")
            .build(),
    );
    fake.vpcs.push(
        Vpc::builder()
            .vpc_id("vpc-dup")
            .cidr_block("10.1.0.0/16")
            .build(),
    );
    let validator = Ec2Validator::new(fake);

    let vpc = validator.get_vpc("vpc-dup").await.unwrap().unwrap();
    assert_eq!(vpc.cidr_block(), Some("10.0.0.0/16"));
}

#[tokio::test]
async fn test_assert_agrees_with_get_for_plain_kinds() {
    let validator = Ec2Validator::new(populated());

    for (kind, id) in PLAIN_KINDS {
        assert!(
            validator.get(kind, id).await.unwrap().is_some(),
            "{kind} {id} should be found"
        );
        validator.assert_exists(kind, id, true).await.unwrap();
        validator.assert_exists(kind, "missing", false).await.unwrap();

        let err = validator.assert_exists(kind, id, false).await.unwrap_err();
        assert_eq!(
            err,
            ValidationError::ExistenceMismatch {
                kind,
                id: id.to_string(),
                expected: false,
                found: true,
            }
        );

        let err = validator
            .assert_exists(kind, "missing", true)
            .await
            .unwrap_err();
        assert!(
            matches!(err, ValidationError::ExistenceMismatch { found: false, .. }),
            "{kind}: unexpected error {err}"
        );
    }
}

#[tokio::test]
async fn test_per_kind_assertions() {
    let validator = Ec2Validator::new(populated());

    validator
        .assert_dhcp_options_exists("dopt-1", true)
        .await
        .unwrap();
    validator
        .assert_internet_gateway_exists("igw-1", true)
        .await
        .unwrap();
    validator
        .assert_network_acl_exists("acl-1", true)
        .await
        .unwrap();
    validator
        .assert_security_group_exists("sg-1", true)
        .await
        .unwrap();
    validator
        .assert_subnet_exists("subnet-1", true)
        .await
        .unwrap();
    validator.assert_vpc_exists("vpc-1", true).await.unwrap();
    validator
        .assert_vpc_endpoint_exists("vpce-1", true)
        .await
        .unwrap();

    validator
        .assert_vpc_exists("vpc-deleted", false)
        .await
        .unwrap();
    assert!(validator
        .assert_subnet_exists("subnet-1", false)
        .await
        .is_err());
}

#[tokio::test]
async fn test_query_error_is_identical_to_empty_result() {
    let fake = populated().reject("vpc-1").reject("sg-1");
    let validator = Ec2Validator::new(fake);

    // Rejected ids exist in the fixtures; the error still reads as absence.
    assert_eq!(validator.get_vpc("vpc-1").await, Ok(None));
    assert_eq!(
        validator.get_vpc("vpc-1").await,
        validator.get_vpc("vpc-missing").await
    );
    assert!(validator.get_security_group("sg-1").await.unwrap().is_none());

    validator.assert_vpc_exists("vpc-1", false).await.unwrap();
    let err = validator.assert_vpc_exists("vpc-1", true).await.unwrap_err();
    assert!(matches!(
        err,
        ValidationError::ExistenceMismatch {
            expected: true,
            found: false,
            ..
        }
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_not_absence() {
    let fake = FakeEc2::new().unreachable("vpc-1").unreachable("subnet-1");
    let validator = Ec2Validator::new(fake);

    let err = validator.assert_vpc_exists("vpc-1", false).await.unwrap_err();
    assert!(
        matches!(err, ValidationError::Query(QueryError::Transport(_))),
        "unexpected error {err}"
    );
    assert!(matches!(
        validator.get_vpc("vpc-1").await,
        Err(ValidationError::Query(_))
    ));
    assert!(matches!(
        validator.exists(ResourceKind::Subnet, "subnet-1").await,
        Err(ValidationError::Query(_))
    ));
    assert!(matches!(
        validator.assert_exists(ResourceKind::Subnet, "subnet-1", false).await,
        Err(ValidationError::Query(_))
    ));
}

#[tokio::test]
async fn test_each_lookup_is_a_single_call() {
    let validator = Ec2Validator::new(populated().reject("subnet-bad"));

    let _ = validator.get_subnet("subnet-1").await;
    assert_eq!(validator.client().calls(), 1);

    // Errors are not retried.
    let _ = validator.get_subnet("subnet-bad").await;
    assert_eq!(validator.client().calls(), 2);

    let _ = validator.assert_subnet_exists("subnet-1", true).await;
    assert_eq!(validator.client().calls(), 3);
}

#[tokio::test]
async fn test_generic_get_wraps_record_of_requested_kind() {
    let validator = Ec2Validator::new(populated());

    for (kind, id) in PLAIN_KINDS {
        let record = validator.get(kind, id).await.unwrap().unwrap();
        assert_eq!(record.kind(), kind);
        assert_eq!(record.id(), Some(id));
    }

    let vpc = validator
        .get(ResourceKind::Vpc, "vpc-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(vpc.state(), Some("available"));
}

#[test]
fn test_validation_error_messages() {
    let err = ValidationError::ExistenceMismatch {
        kind: ResourceKind::Subnet,
        id: "subnet-1".to_string(),
        expected: true,
        found: false,
    };
    assert_eq!(
        err.to_string(),
        "subnet subnet-1: expected exists=true, found exists=false"
    );

    let err = ValidationError::RouteTableNotFound {
        route_table_id: "rtb-1".to_string(),
    };
    assert_eq!(err.to_string(), "route table rtb-1 not found");

    let err = ValidationError::from(QueryError::Transport("connection refused".to_string()));
    assert_eq!(
        err.to_string(),
        "EC2 query failed: request failed: connection refused"
    );
}
