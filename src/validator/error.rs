//! # Validation Errors

use crate::provider::QueryError;
use crate::validator::ResourceKind;
use thiserror::Error;

/// Failure of a validator assertion or lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{kind} {id}: expected exists={expected}, found exists={found}")]
    ExistenceMismatch {
        kind: ResourceKind,
        id: String,
        expected: bool,
        found: bool,
    },

    #[error(
        "route table {route_table_id}: route via {gateway_id} with origin {origin}: \
         expected exists={expected}, found exists={found}"
    )]
    RouteMismatch {
        route_table_id: String,
        gateway_id: String,
        origin: String,
        expected: bool,
        found: bool,
    },

    /// The route table whose associations were requested could not be described
    #[error("route table {route_table_id} not found")]
    RouteTableNotFound { route_table_id: String },

    #[error(
        "subnet {subnet_id}: route table associations differ \
         (missing: {missing:?}, unexpected: {unexpected:?})"
    )]
    AssociationMismatch {
        subnet_id: String,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    /// EC2 could not be reached, so existence is unknown
    #[error("EC2 query failed: {0}")]
    Query(#[from] QueryError),
}
