//! # NAT and Transit Gateways
//!
//! EC2 keeps describing a NAT or transit gateway for a while after deletion
//! was requested, with its state set to `deleting` and then `deleted`.
//! Existence for these kinds therefore means: present and not in one of
//! those states. `get_*` still returns such records untouched.

use super::{check_existence, lookup, Ec2Validator, ResourceKind, ValidationError};
use crate::constants::TERMINAL_GATEWAY_STATES;
use crate::provider::Ec2Api;
use aws_sdk_ec2::types::{NatGateway, TransitGateway};

/// Whether a gateway in `state` still counts as existing
///
/// A record without a state counts as existing.
#[must_use]
pub fn is_live_state(state: Option<&str>) -> bool {
    !state.is_some_and(|s| TERMINAL_GATEWAY_STATES.contains(&s))
}

impl<C: Ec2Api> Ec2Validator<C> {
    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_nat_gateway(
        &self,
        nat_gateway_id: &str,
    ) -> Result<Option<NatGateway>, ValidationError> {
        let ngw = lookup(
            ResourceKind::NatGateway,
            nat_gateway_id,
            self.client.describe_nat_gateways(nat_gateway_id),
        )
        .await?;
        Ok(ngw)
    }

    /// Present and not `deleting`/`deleted`
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn nat_gateway_exists(&self, nat_gateway_id: &str) -> Result<bool, ValidationError> {
        let ngw = self.get_nat_gateway(nat_gateway_id).await?;
        Ok(ngw.is_some_and(|ngw| is_live_state(ngw.state().map(|s| s.as_str()))))
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_nat_gateway_exists(
        &self,
        nat_gateway_id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        let found = self.nat_gateway_exists(nat_gateway_id).await?;
        check_existence(ResourceKind::NatGateway, nat_gateway_id, found, expect_exists)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_transit_gateway(
        &self,
        transit_gateway_id: &str,
    ) -> Result<Option<TransitGateway>, ValidationError> {
        let tgw = lookup(
            ResourceKind::TransitGateway,
            transit_gateway_id,
            self.client.describe_transit_gateways(transit_gateway_id),
        )
        .await?;
        Ok(tgw)
    }

    /// Present and not `deleting`/`deleted`
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn transit_gateway_exists(
        &self,
        transit_gateway_id: &str,
    ) -> Result<bool, ValidationError> {
        let tgw = self.get_transit_gateway(transit_gateway_id).await?;
        Ok(tgw.is_some_and(|tgw| is_live_state(tgw.state().map(|s| s.as_str()))))
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_transit_gateway_exists(
        &self,
        transit_gateway_id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        let found = self.transit_gateway_exists(transit_gateway_id).await?;
        check_existence(
            ResourceKind::TransitGateway,
            transit_gateway_id,
            found,
            expect_exists,
        )
    }
}
