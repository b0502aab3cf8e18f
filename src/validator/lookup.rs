//! # Lookup Outcomes
//!
//! Every describe call ends in one of three outcomes. Presence checks
//! collapse `NotFound` and client-reported `QueryError`s into absence; a
//! transport failure is not an answer from EC2 and is handed back instead.

use crate::provider::QueryError;
use crate::validator::ResourceKind;
use std::future::Future;
use tracing::{debug, debug_span, warn, Instrument};

/// Outcome of a single describe-style query
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// The API returned at least one record; this is the first
    Found(T),
    /// The API returned an empty result collection
    NotFound,
    /// The API call failed
    QueryError(QueryError),
}

impl<T> Lookup<T> {
    /// Build an outcome from a describe response, keeping the first record
    pub fn from_describe(result: Result<Vec<T>, QueryError>) -> Self {
        match result {
            Ok(records) => records.into_iter().next().map_or(Self::NotFound, Self::Found),
            Err(e) => Self::QueryError(e),
        }
    }

    /// Collapse into an optional record
    ///
    /// Client errors read as `None`, exactly like an empty result.
    ///
    /// # Errors
    ///
    /// Returns the `QueryError` when EC2 was never reached.
    pub fn into_result(self) -> Result<Option<T>, QueryError> {
        match self {
            Self::Found(record) => Ok(Some(record)),
            Self::NotFound => Ok(None),
            Self::QueryError(e) if e.is_client_error() => Ok(None),
            Self::QueryError(e) => Err(e),
        }
    }
}

/// Run one describe query inside a span and log how it ended
pub(crate) async fn lookup<T, Fut>(
    kind: ResourceKind,
    id: &str,
    query: Fut,
) -> Result<Option<T>, QueryError>
where
    Fut: Future<Output = Result<Vec<T>, QueryError>>,
{
    let span = debug_span!("ec2.describe", kind = kind.as_str(), id = id);

    async move {
        let outcome = Lookup::from_describe(query.await);
        match &outcome {
            Lookup::Found(_) => debug!("Found {} {}", kind, id),
            Lookup::NotFound => debug!("{} {} not found", kind, id),
            Lookup::QueryError(e) if e.is_not_found() => {
                debug!("{} {} not found: {}", kind, id, e);
            }
            Lookup::QueryError(e) if e.is_client_error() => {
                debug!(error = %e, "Describe {} {} rejected, treating as not found", kind, id);
            }
            Lookup::QueryError(e) => warn!(error = %e, "Describe {} {} failed", kind, id),
        }
        outcome.into_result()
    }
    .instrument(span)
    .await
}
