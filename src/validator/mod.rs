//! # EC2 Validator
//!
//! Lookup and existence assertions for EC2 resources.
//!
//! Each `get_*` issues one describe call filtered by a single identifier and
//! returns the first record, or `None` when the result is empty *or EC2
//! rejected the request*. The two cases are indistinguishable: a malformed or
//! unknown identifier both mean "not there" to an e2e test. A request that
//! never reached EC2 is different and comes back as [`ValidationError::Query`].
//!
//! Each `assert_*_exists` runs the same query and fails with a
//! [`ValidationError`] when observed existence differs from the expectation.
//!
//! NAT and transit gateways linger in `deleting`/`deleted` states after
//! deletion, so their existence checks also look at the state (see
//! `gateways`). Route checks live in `routes`.
//!
//! No call is retried and nothing is cached. The validator holds nothing but
//! the client; sharing it across tasks is safe whenever the client is.

mod error;
mod gateways;
mod kind;
mod lookup;
mod routes;

pub use error::ValidationError;
pub use gateways::is_live_state;
pub use kind::{Record, ResourceKind};
pub use lookup::Lookup;
pub use routes::has_route;

use crate::provider::Ec2Api;
use aws_sdk_ec2::types::{
    DhcpOptions, InternetGateway, NetworkAcl, SecurityGroup, Subnet, Vpc, VpcEndpoint,
};
use lookup::lookup;
use tracing::{debug, warn};

/// Lookup and assertion facade over an [`Ec2Api`] client
#[derive(Debug, Clone)]
pub struct Ec2Validator<C> {
    client: C,
}

impl<C: Ec2Api> Ec2Validator<C> {
    #[must_use]
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The wrapped client
    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Describe a resource of any kind
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<Option<Record>, ValidationError> {
        let record = match kind {
            ResourceKind::DhcpOptions => self.get_dhcp_options(id).await?.map(Record::DhcpOptions),
            ResourceKind::InternetGateway => self
                .get_internet_gateway(id)
                .await?
                .map(Record::InternetGateway),
            ResourceKind::NatGateway => self.get_nat_gateway(id).await?.map(Record::NatGateway),
            ResourceKind::NetworkAcl => self.get_network_acl(id).await?.map(Record::NetworkAcl),
            ResourceKind::RouteTable => self.get_route_table(id).await?.map(Record::RouteTable),
            ResourceKind::SecurityGroup => {
                self.get_security_group(id).await?.map(Record::SecurityGroup)
            }
            ResourceKind::Subnet => self.get_subnet(id).await?.map(Record::Subnet),
            ResourceKind::TransitGateway => self
                .get_transit_gateway(id)
                .await?
                .map(Record::TransitGateway),
            ResourceKind::Vpc => self.get_vpc(id).await?.map(Record::Vpc),
            ResourceKind::VpcEndpoint => self.get_vpc_endpoint(id).await?.map(Record::VpcEndpoint),
        };
        Ok(record)
    }

    /// Whether a resource of any kind exists
    ///
    /// Plain presence for most kinds; NAT and transit gateways must also not
    /// be in a deletion state.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn exists(&self, kind: ResourceKind, id: &str) -> Result<bool, ValidationError> {
        match kind {
            ResourceKind::NatGateway => self.nat_gateway_exists(id).await,
            ResourceKind::TransitGateway => self.transit_gateway_exists(id).await,
            _ => Ok(self.get(kind, id).await?.is_some()),
        }
    }

    /// Assert existence of a resource of any kind
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] when observed existence
    /// differs from `expect_exists`, or [`ValidationError::Query`] when EC2
    /// could not be reached.
    pub async fn assert_exists(
        &self,
        kind: ResourceKind,
        id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        let found = self.exists(kind, id).await?;
        check_existence(kind, id, found, expect_exists)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_dhcp_options(
        &self,
        dhcp_options_id: &str,
    ) -> Result<Option<DhcpOptions>, ValidationError> {
        lookup(
            ResourceKind::DhcpOptions,
            dhcp_options_id,
            self.client.describe_dhcp_options(dhcp_options_id),
        )
        .await
        .map_err(ValidationError::from)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_dhcp_options_exists(
        &self,
        dhcp_options_id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        self.assert_exists(ResourceKind::DhcpOptions, dhcp_options_id, expect_exists)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_internet_gateway(
        &self,
        internet_gateway_id: &str,
    ) -> Result<Option<InternetGateway>, ValidationError> {
        lookup(
            ResourceKind::InternetGateway,
            internet_gateway_id,
            self.client.describe_internet_gateways(internet_gateway_id),
        )
        .await
        .map_err(ValidationError::from)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_internet_gateway_exists(
        &self,
        internet_gateway_id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        self.assert_exists(
            ResourceKind::InternetGateway,
            internet_gateway_id,
            expect_exists,
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_network_acl(
        &self,
        network_acl_id: &str,
    ) -> Result<Option<NetworkAcl>, ValidationError> {
        lookup(
            ResourceKind::NetworkAcl,
            network_acl_id,
            self.client.describe_network_acls(network_acl_id),
        )
        .await
        .map_err(ValidationError::from)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_network_acl_exists(
        &self,
        network_acl_id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        self.assert_exists(ResourceKind::NetworkAcl, network_acl_id, expect_exists)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_security_group(
        &self,
        group_id: &str,
    ) -> Result<Option<SecurityGroup>, ValidationError> {
        lookup(
            ResourceKind::SecurityGroup,
            group_id,
            self.client.describe_security_groups(group_id),
        )
        .await
        .map_err(ValidationError::from)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_security_group_exists(
        &self,
        group_id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        self.assert_exists(ResourceKind::SecurityGroup, group_id, expect_exists)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_subnet(
        &self,
        subnet_id: &str,
    ) -> Result<Option<Subnet>, ValidationError> {
        lookup(
            ResourceKind::Subnet,
            subnet_id,
            self.client.describe_subnets(subnet_id),
        )
        .await
        .map_err(ValidationError::from)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_subnet_exists(
        &self,
        subnet_id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        self.assert_exists(ResourceKind::Subnet, subnet_id, expect_exists)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_vpc(
        &self,
        vpc_id: &str,
    ) -> Result<Option<Vpc>, ValidationError> {
        lookup(ResourceKind::Vpc, vpc_id, self.client.describe_vpcs(vpc_id))
            .await
            .map_err(ValidationError::from)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_vpc_exists(
        &self,
        vpc_id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        self.assert_exists(ResourceKind::Vpc, vpc_id, expect_exists)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_vpc_endpoint(
        &self,
        vpc_endpoint_id: &str,
    ) -> Result<Option<VpcEndpoint>, ValidationError> {
        lookup(
            ResourceKind::VpcEndpoint,
            vpc_endpoint_id,
            self.client.describe_vpc_endpoints(vpc_endpoint_id),
        )
        .await
        .map_err(ValidationError::from)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_vpc_endpoint_exists(
        &self,
        vpc_endpoint_id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        self.assert_exists(ResourceKind::VpcEndpoint, vpc_endpoint_id, expect_exists)
            .await
    }
}

/// Compare observed existence with the expectation
pub(crate) fn check_existence(
    kind: ResourceKind,
    id: &str,
    found: bool,
    expected: bool,
) -> Result<(), ValidationError> {
    if found == expected {
        debug!(kind = kind.as_str(), id = id, exists = found, "Existence check passed");
        return Ok(());
    }

    warn!(
        kind = kind.as_str(),
        id = id,
        expected = expected,
        found = found,
        "Existence check failed for {} {}",
        kind,
        id
    );
    Err(ValidationError::ExistenceMismatch {
        kind,
        id: id.to_string(),
        expected,
        found,
    })
}
