//! # AWS EC2 Client
//!
//! `Ec2Api` implementation backed by the official AWS SDK.
//!
//! Credentials come from the SDK's default provider chain (environment,
//! profile, IRSA web identity, instance metadata); nothing here touches them.

use crate::config::ValidatorConfig;
use anyhow::{bail, Result};
use aws_config::SdkConfig;
use aws_sdk_ec2::Client as Ec2Client;
use tracing::info;

mod operations;

/// EC2 client used by the validator
pub struct AwsEc2Client {
    client: Ec2Client,
    region: String,
}

impl std::fmt::Debug for AwsEc2Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsEc2Client")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl AwsEc2Client {
    /// Create a new EC2 client from validator configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint override is not an http(s) URL.
    pub async fn new(config: &ValidatorConfig) -> Result<Self> {
        if let Some(endpoint) = &config.endpoint_url {
            validate_endpoint(endpoint)?;
        }
        let sdk_config = Self::load_sdk_config(config).await;
        Ok(Self::from_sdk_config(&sdk_config, &config.region))
    }

    /// Wrap an already loaded SDK config
    #[must_use]
    pub fn from_sdk_config(sdk_config: &SdkConfig, region: &str) -> Self {
        Self {
            client: Ec2Client::new(sdk_config),
            region: region.to_string(),
        }
    }

    /// Region this client talks to
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    async fn load_sdk_config(config: &ValidatorConfig) -> SdkConfig {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            info!(
                region = config.region,
                endpoint = endpoint,
                "Overriding EC2 endpoint: region={}, endpoint={}",
                config.region,
                endpoint
            );
            loader = loader.endpoint_url(endpoint);
        }

        loader.load().await
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        bail!("EC2 endpoint '{endpoint}' must be an http:// or https:// URL");
    }
    Ok(())
}
