//! # Resource Kinds
//!
//! The EC2 resource kinds the validator can look up, and a record type that
//! holds one described resource of any kind.

use aws_sdk_ec2::types::{
    DhcpOptions, InternetGateway, NatGateway, NetworkAcl, RouteTable, SecurityGroup, Subnet,
    TransitGateway, Vpc, VpcEndpoint,
};
use serde::Serialize;
use std::fmt;

/// EC2 resource kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    DhcpOptions,
    InternetGateway,
    NatGateway,
    NetworkAcl,
    RouteTable,
    SecurityGroup,
    Subnet,
    TransitGateway,
    Vpc,
    VpcEndpoint,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 10] = [
        ResourceKind::DhcpOptions,
        ResourceKind::InternetGateway,
        ResourceKind::NatGateway,
        ResourceKind::NetworkAcl,
        ResourceKind::RouteTable,
        ResourceKind::SecurityGroup,
        ResourceKind::Subnet,
        ResourceKind::TransitGateway,
        ResourceKind::Vpc,
        ResourceKind::VpcEndpoint,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::DhcpOptions => "dhcp_options",
            ResourceKind::InternetGateway => "internet_gateway",
            ResourceKind::NatGateway => "nat_gateway",
            ResourceKind::NetworkAcl => "network_acl",
            ResourceKind::RouteTable => "route_table",
            ResourceKind::SecurityGroup => "security_group",
            ResourceKind::Subnet => "subnet",
            ResourceKind::TransitGateway => "transit_gateway",
            ResourceKind::Vpc => "vpc",
            ResourceKind::VpcEndpoint => "vpc_endpoint",
        }
    }

    /// Whether EC2 keeps reporting this kind in a `deleting`/`deleted` state
    /// after deletion, so presence alone does not mean it exists
    #[must_use]
    pub fn has_deletion_states(&self) -> bool {
        matches!(self, ResourceKind::NatGateway | ResourceKind::TransitGateway)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One described resource
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    DhcpOptions(DhcpOptions),
    InternetGateway(InternetGateway),
    NatGateway(NatGateway),
    NetworkAcl(NetworkAcl),
    RouteTable(RouteTable),
    SecurityGroup(SecurityGroup),
    Subnet(Subnet),
    TransitGateway(TransitGateway),
    Vpc(Vpc),
    VpcEndpoint(VpcEndpoint),
}

impl Record {
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Record::DhcpOptions(_) => ResourceKind::DhcpOptions,
            Record::InternetGateway(_) => ResourceKind::InternetGateway,
            Record::NatGateway(_) => ResourceKind::NatGateway,
            Record::NetworkAcl(_) => ResourceKind::NetworkAcl,
            Record::RouteTable(_) => ResourceKind::RouteTable,
            Record::SecurityGroup(_) => ResourceKind::SecurityGroup,
            Record::Subnet(_) => ResourceKind::Subnet,
            Record::TransitGateway(_) => ResourceKind::TransitGateway,
            Record::Vpc(_) => ResourceKind::Vpc,
            Record::VpcEndpoint(_) => ResourceKind::VpcEndpoint,
        }
    }

    /// Identifier EC2 assigned to the resource
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Record::DhcpOptions(r) => r.dhcp_options_id(),
            Record::InternetGateway(r) => r.internet_gateway_id(),
            Record::NatGateway(r) => r.nat_gateway_id(),
            Record::NetworkAcl(r) => r.network_acl_id(),
            Record::RouteTable(r) => r.route_table_id(),
            Record::SecurityGroup(r) => r.group_id(),
            Record::Subnet(r) => r.subnet_id(),
            Record::TransitGateway(r) => r.transit_gateway_id(),
            Record::Vpc(r) => r.vpc_id(),
            Record::VpcEndpoint(r) => r.vpc_endpoint_id(),
        }
    }

    /// Lifecycle state, for kinds that report one
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        match self {
            Record::NatGateway(r) => r.state().map(|s| s.as_str()),
            Record::Subnet(r) => r.state().map(|s| s.as_str()),
            Record::TransitGateway(r) => r.state().map(|s| s.as_str()),
            Record::Vpc(r) => r.state().map(|s| s.as_str()),
            Record::VpcEndpoint(r) => r.state().map(|s| s.as_str()),
            Record::DhcpOptions(_)
            | Record::InternetGateway(_)
            | Record::NetworkAcl(_)
            | Record::RouteTable(_)
            | Record::SecurityGroup(_) => None,
        }
    }
}
