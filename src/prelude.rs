//! # Prelude
//!
//! Commonly used types for e2e tests.
//!
//! ```rust
//! use ec2_e2e_validator::prelude::*;
//! ```

pub use crate::config::ValidatorConfig;
pub use crate::provider::aws::AwsEc2Client;
pub use crate::provider::{Ec2Api, QueryError};
pub use crate::validator::{
    Ec2Validator, Lookup, Record, ResourceKind, ValidationError,
};
