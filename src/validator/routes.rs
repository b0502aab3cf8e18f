//! # Route Tables
//!
//! Route table lookups, route presence checks and association lookups.

use super::{check_existence, lookup, Ec2Validator, ResourceKind, ValidationError};
use crate::constants::FILTER_ASSOCIATION_SUBNET_ID;
use crate::provider::Ec2Api;
use aws_sdk_ec2::types::{RouteTable, RouteTableAssociation};
use std::collections::BTreeSet;
use tracing::{debug, debug_span, warn, Instrument};

/// Whether the route table has a route to `gateway_id` created by `origin`
///
/// `origin` is the EC2 wire name, e.g. `CreateRoute`, `CreateRouteTable` or
/// `EnableVgwRoutePropagation`. Both fields must match exactly.
#[must_use]
pub fn has_route(route_table: &RouteTable, gateway_id: &str, origin: &str) -> bool {
    route_table.routes().iter().any(|route| {
        route.gateway_id() == Some(gateway_id)
            && route.origin().map(|o| o.as_str()) == Some(origin)
    })
}

impl<C: Ec2Api> Ec2Validator<C> {
    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_route_table(
        &self,
        route_table_id: &str,
    ) -> Result<Option<RouteTable>, ValidationError> {
        let route_table = lookup(
            ResourceKind::RouteTable,
            route_table_id,
            self.client.describe_route_tables(route_table_id),
        )
        .await?;
        Ok(route_table)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ExistenceMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_route_table_exists(
        &self,
        route_table_id: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        let found = self.get_route_table(route_table_id).await?.is_some();
        check_existence(ResourceKind::RouteTable, route_table_id, found, expect_exists)
    }

    /// Whether the route table exists and holds a matching route
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn route_exists(
        &self,
        route_table_id: &str,
        gateway_id: &str,
        origin: &str,
    ) -> Result<bool, ValidationError> {
        let route_table = self.get_route_table(route_table_id).await?;
        Ok(route_table.is_some_and(|rt| has_route(&rt, gateway_id, origin)))
    }

    /// Assert presence of a route to `gateway_id` with the given `origin`
    ///
    /// A missing route table means the route does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RouteMismatch`] on mismatch and
    /// [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn assert_route(
        &self,
        route_table_id: &str,
        gateway_id: &str,
        origin: &str,
        expect_exists: bool,
    ) -> Result<(), ValidationError> {
        let found = self.route_exists(route_table_id, gateway_id, origin).await?;
        if found == expect_exists {
            return Ok(());
        }

        warn!(
            route_table_id = route_table_id,
            gateway_id = gateway_id,
            origin = origin,
            expected = expect_exists,
            found = found,
            "Route check failed for route table {}",
            route_table_id
        );
        Err(ValidationError::RouteMismatch {
            route_table_id: route_table_id.to_string(),
            gateway_id: gateway_id.to_string(),
            origin: origin.to_string(),
            expected: expect_exists,
            found,
        })
    }

    /// Find the association between a route table and a subnet
    ///
    /// Unlike the other lookups, an unknown route table is an error here
    /// rather than `None`: there is no association list to scan.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RouteTableNotFound`] when EC2 has no such
    /// route table or rejects the id, and [`ValidationError::Query`] when EC2
    /// could not be reached.
    pub async fn get_route_table_association(
        &self,
        route_table_id: &str,
        subnet_id: &str,
    ) -> Result<Option<RouteTableAssociation>, ValidationError> {
        let route_table = self.get_route_table(route_table_id).await?.ok_or_else(|| {
            ValidationError::RouteTableNotFound {
                route_table_id: route_table_id.to_string(),
            }
        })?;

        Ok(find_subnet_association(&route_table, subnet_id).cloned())
    }

    /// Associations of every route table attached to `subnet_id`
    ///
    /// Only the first page of results is read. A rejected query yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Query`] when EC2 could not be reached.
    pub async fn get_subnet_route_table_associations(
        &self,
        subnet_id: &str,
    ) -> Result<Vec<RouteTableAssociation>, ValidationError> {
        let span = debug_span!(
            "ec2.describe",
            kind = ResourceKind::RouteTable.as_str(),
            filter = FILTER_ASSOCIATION_SUBNET_ID,
            id = subnet_id
        );

        match self
            .client
            .describe_route_tables_for_subnet(subnet_id)
            .instrument(span)
            .await
        {
            Ok(route_tables) => Ok(route_tables
                .iter()
                // The filter should guarantee a match; tables without one are skipped.
                .filter_map(|rt| find_subnet_association(rt, subnet_id).cloned())
                .collect()),
            Err(e) if e.is_client_error() => {
                debug!(
                    error = %e,
                    "Describe route tables for subnet {} rejected, treating as none",
                    subnet_id
                );
                Ok(Vec::new())
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "Describe route tables for subnet {} failed",
                    subnet_id
                );
                Err(e.into())
            }
        }
    }

    /// Assert the subnet is associated with exactly the given route tables
    ///
    /// Order does not matter.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AssociationMismatch`] listing missing and
    /// unexpected route table ids, or [`ValidationError::Query`] when EC2
    /// could not be reached.
    pub async fn assert_subnet_route_tables<S: AsRef<str>>(
        &self,
        subnet_id: &str,
        expected_route_table_ids: &[S],
    ) -> Result<(), ValidationError> {
        let actual: BTreeSet<String> = self
            .get_subnet_route_table_associations(subnet_id)
            .await?
            .iter()
            .filter_map(RouteTableAssociation::route_table_id)
            .map(ToString::to_string)
            .collect();
        let expected: BTreeSet<String> = expected_route_table_ids
            .iter()
            .map(|id| id.as_ref().to_string())
            .collect();

        let missing: Vec<String> = expected.difference(&actual).cloned().collect();
        let unexpected: Vec<String> = actual.difference(&expected).cloned().collect();

        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }

        warn!(
            subnet_id = subnet_id,
            "Route table associations differ for subnet {}: missing={:?}, unexpected={:?}",
            subnet_id,
            missing,
            unexpected
        );
        Err(ValidationError::AssociationMismatch {
            subnet_id: subnet_id.to_string(),
            missing,
            unexpected,
        })
    }
}

fn find_subnet_association<'a>(
    route_table: &'a RouteTable,
    subnet_id: &str,
) -> Option<&'a RouteTableAssociation> {
    route_table
        .associations()
        .iter()
        .find(|assoc| assoc.subnet_id() == Some(subnet_id))
}
