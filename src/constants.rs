//! # Constants
//!
//! Shared constants used throughout the validator.
//!
//! Defaults can be overridden via environment variables where applicable.

/// Default AWS region when `AWS_REGION` is not set
pub const DEFAULT_REGION: &str = "us-west-2";

/// Default log level when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Environment variable holding the AWS region
pub const ENV_REGION: &str = "AWS_REGION";

/// Environment variable holding an optional EC2 endpoint override
/// (LocalStack or another EC2-compatible mock)
pub const ENV_ENDPOINT_URL: &str = "EC2_ENDPOINT_URL";

/// Environment variable holding the log level
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Environment variable enabling ANSI colors in log output
pub const ENV_LOG_ENABLE_COLOR: &str = "LOG_ENABLE_COLOR";

/// States in which EC2 still reports a NAT or transit gateway that is going
/// away. A record in one of these states does not count as existing.
pub const TERMINAL_GATEWAY_STATES: [&str; 2] = ["deleting", "deleted"];

/// Describe filter selecting route tables by associated subnet
pub const FILTER_ASSOCIATION_SUBNET_ID: &str = "association.subnet-id";
