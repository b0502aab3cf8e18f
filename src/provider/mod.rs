//! # Provider Modules
//!
//! The remote-query seam the validator sits on.
//!
//! `Ec2Api` exposes one describe-style call per resource kind, each filtered
//! by a single identifier. `aws::AwsEc2Client` implements it over the AWS SDK;
//! tests substitute an in-memory implementation.

use async_trait::async_trait;
use aws_sdk_ec2::types::{
    DhcpOptions, InternetGateway, NatGateway, NetworkAcl, RouteTable, SecurityGroup, Subnet,
    TransitGateway, Vpc, VpcEndpoint,
};
use thiserror::Error;

pub mod aws;

/// Error reported by the remote API
///
/// The validator treats `Service` errors (unknown or malformed identifiers,
/// rejected requests) as "not found". `Transport` errors mean EC2 was never
/// reached and are passed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The service answered with an error (e.g. `InvalidVpcID.NotFound`)
    #[error("{code}: {message}")]
    Service { code: String, message: String },
    /// The request never produced a service response
    #[error("request failed: {0}")]
    Transport(String),
}

impl QueryError {
    /// Build a service error from its code and message
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Whether EC2 answered and rejected the request
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Whether the service reported the identifier as unknown
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Service { code, .. } if code.ends_with(".NotFound"))
    }
}

/// Describe-style queries against EC2
///
/// Each call returns every record the API matched for the given identifier;
/// callers decide what to do with zero or several records.
#[async_trait]
pub trait Ec2Api: Send + Sync {
    async fn describe_dhcp_options(&self, dhcp_options_id: &str)
        -> Result<Vec<DhcpOptions>, QueryError>;

    async fn describe_internet_gateways(
        &self,
        internet_gateway_id: &str,
    ) -> Result<Vec<InternetGateway>, QueryError>;

    async fn describe_nat_gateways(&self, nat_gateway_id: &str)
        -> Result<Vec<NatGateway>, QueryError>;

    async fn describe_network_acls(&self, network_acl_id: &str)
        -> Result<Vec<NetworkAcl>, QueryError>;

    async fn describe_route_tables(&self, route_table_id: &str)
        -> Result<Vec<RouteTable>, QueryError>;

    /// Route tables with an association to the given subnet (first page only)
    async fn describe_route_tables_for_subnet(
        &self,
        subnet_id: &str,
    ) -> Result<Vec<RouteTable>, QueryError>;

    async fn describe_security_groups(&self, group_id: &str)
        -> Result<Vec<SecurityGroup>, QueryError>;

    async fn describe_subnets(&self, subnet_id: &str) -> Result<Vec<Subnet>, QueryError>;

    async fn describe_transit_gateways(
        &self,
        transit_gateway_id: &str,
    ) -> Result<Vec<TransitGateway>, QueryError>;

    async fn describe_vpcs(&self, vpc_id: &str) -> Result<Vec<Vpc>, QueryError>;

    async fn describe_vpc_endpoints(&self, vpc_endpoint_id: &str)
        -> Result<Vec<VpcEndpoint>, QueryError>;
}
