//! Common test utilities for validator integration tests
//!
//! Provides an in-memory `Ec2Api` that answers describe calls from fixtures,
//! can be told to reject specific identifiers or fail to reach EC2 for them,
//! and counts calls.

#![allow(dead_code, reason = "Each test binary uses a different subset of helpers")]

use async_trait::async_trait;
use aws_sdk_ec2::types::{
    DhcpOptions, InternetGateway, NatGateway, NatGatewayState, NetworkAcl, Route, RouteOrigin,
    RouteTable, RouteTableAssociation, SecurityGroup, Subnet, TransitGateway,
    TransitGatewayState, Vpc, VpcEndpoint,
};
use ec2_e2e_validator::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory EC2
#[derive(Debug, Default)]
pub struct FakeEc2 {
    pub dhcp_options: Vec<DhcpOptions>,
    pub internet_gateways: Vec<InternetGateway>,
    pub nat_gateways: Vec<NatGateway>,
    pub network_acls: Vec<NetworkAcl>,
    pub route_tables: Vec<RouteTable>,
    pub security_groups: Vec<SecurityGroup>,
    pub subnets: Vec<Subnet>,
    pub transit_gateways: Vec<TransitGateway>,
    pub vpcs: Vec<Vpc>,
    pub vpc_endpoints: Vec<VpcEndpoint>,
    /// Identifiers the fake rejects with a service error
    pub rejected_ids: HashSet<String>,
    /// Identifiers whose describe calls fail before reaching the service
    pub unreachable_ids: HashSet<String>,
    calls: AtomicUsize,
}

impl FakeEc2 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every describe call for `id` with an `InvalidParameterValue` error
    pub fn reject(mut self, id: &str) -> Self {
        self.rejected_ids.insert(id.to_string());
        self
    }

    /// Fail every describe call for `id` with a transport error
    pub fn unreachable(mut self, id: &str) -> Self {
        self.unreachable_ids.insert(id.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Count the call and fail it if `id` is rejected or unreachable
    fn answer(&self, id: &str) -> Result<(), QueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable_ids.contains(id) {
            return Err(QueryError::Transport(
                "dispatch failure: connection refused".to_string(),
            ));
        }
        if self.rejected_ids.contains(id) {
            return Err(QueryError::service(
                "InvalidParameterValue",
                format!("Value ({id}) for parameter id is invalid"),
            ));
        }
        Ok(())
    }

    fn describe<T: Clone>(
        &self,
        records: &[T],
        id: &str,
        id_of: impl Fn(&T) -> Option<&str>,
    ) -> Result<Vec<T>, QueryError> {
        self.answer(id)?;
        Ok(records
            .iter()
            .filter(|&r| id_of(r) == Some(id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Ec2Api for FakeEc2 {
    async fn describe_dhcp_options(&self, id: &str) -> Result<Vec<DhcpOptions>, QueryError> {
        self.describe(&self.dhcp_options, id, DhcpOptions::dhcp_options_id)
    }

    async fn describe_internet_gateways(
        &self,
        id: &str,
    ) -> Result<Vec<InternetGateway>, QueryError> {
        self.describe(
            &self.internet_gateways,
            id,
            InternetGateway::internet_gateway_id,
        )
    }

    async fn describe_nat_gateways(&self, id: &str) -> Result<Vec<NatGateway>, QueryError> {
        self.describe(&self.nat_gateways, id, NatGateway::nat_gateway_id)
    }

    async fn describe_network_acls(&self, id: &str) -> Result<Vec<NetworkAcl>, QueryError> {
        self.describe(&self.network_acls, id, NetworkAcl::network_acl_id)
    }

    async fn describe_route_tables(&self, id: &str) -> Result<Vec<RouteTable>, QueryError> {
        self.describe(&self.route_tables, id, RouteTable::route_table_id)
    }

    async fn describe_route_tables_for_subnet(
        &self,
        subnet_id: &str,
    ) -> Result<Vec<RouteTable>, QueryError> {
        self.answer(subnet_id)?;
        Ok(self
            .route_tables
            .iter()
            .filter(|rt| {
                rt.associations()
                    .iter()
                    .any(|a| a.subnet_id() == Some(subnet_id))
            })
            .cloned()
            .collect())
    }

    async fn describe_security_groups(&self, id: &str) -> Result<Vec<SecurityGroup>, QueryError> {
        self.describe(&self.security_groups, id, SecurityGroup::group_id)
    }

    async fn describe_subnets(&self, id: &str) -> Result<Vec<Subnet>, QueryError> {
        self.describe(&self.subnets, id, Subnet::subnet_id)
    }

    async fn describe_transit_gateways(
        &self,
        id: &str,
    ) -> Result<Vec<TransitGateway>, QueryError> {
        self.describe(&self.transit_gateways, id, TransitGateway::transit_gateway_id)
    }

    async fn describe_vpcs(&self, id: &str) -> Result<Vec<Vpc>, QueryError> {
        self.describe(&self.vpcs, id, Vpc::vpc_id)
    }

    async fn describe_vpc_endpoints(&self, id: &str) -> Result<Vec<VpcEndpoint>, QueryError> {
        self.describe(&self.vpc_endpoints, id, VpcEndpoint::vpc_endpoint_id)
    }
}

pub fn nat_gateway(id: &str, state: NatGatewayState) -> NatGateway {
    NatGateway::builder()
        .nat_gateway_id(id)
        .state(state)
        .build()
}

pub fn transit_gateway(id: &str, state: TransitGatewayState) -> TransitGateway {
    TransitGateway::builder()
        .transit_gateway_id(id)
        .state(state)
        .build()
}

pub fn route(gateway_id: &str, origin: RouteOrigin) -> Route {
    Route::builder()
        .destination_cidr_block("0.0.0.0/0")
        .gateway_id(gateway_id)
        .origin(origin)
        .build()
}

pub fn association(route_table_id: &str, subnet_id: &str) -> RouteTableAssociation {
    RouteTableAssociation::builder()
        .route_table_association_id(format!("rtbassoc-{route_table_id}-{subnet_id}"))
        .route_table_id(route_table_id)
        .subnet_id(subnet_id)
        .build()
}

pub fn route_table(
    id: &str,
    routes: Vec<Route>,
    associations: Vec<RouteTableAssociation>,
) -> RouteTable {
    RouteTable::builder()
        .route_table_id(id)
        .set_routes(Some(routes))
        .set_associations(Some(associations))
        .build()
}
