//! EC2 E2E Validator Library
//!
//! Lookup and existence assertions over the EC2 API, used by the end-to-end
//! tests of the EC2 resource controller to check what actually exists in the
//! account after the controller has reconciled a resource.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ec2_e2e_validator::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ValidatorConfig::from_env();
//! let validator = Ec2Validator::new(AwsEc2Client::new(&config).await?);
//!
//! validator.assert_vpc_exists("vpc-0123456789abcdef0", true).await?;
//! validator
//!     .assert_route("rtb-1", "igw-1", "CreateRoute", true)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod observability;
pub mod prelude;
pub mod provider;
pub mod validator;
