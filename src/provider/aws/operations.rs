//! # AWS EC2 Operations
//!
//! Implements `Ec2Api` with one SDK describe call per method.

use crate::constants::FILTER_ASSOCIATION_SUBNET_ID;
use crate::provider::{Ec2Api, QueryError};
use async_trait::async_trait;
use aws_sdk_ec2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ec2::types::{
    DhcpOptions, Filter, InternetGateway, NatGateway, NetworkAcl, RouteTable, SecurityGroup,
    Subnet, TransitGateway, Vpc, VpcEndpoint,
};

use super::AwsEc2Client;

/// Convert an SDK error into the validator's single error kind
fn query_error<E, R>(err: SdkError<E, R>) -> QueryError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    if let Some(service_err) = err.as_service_error() {
        return QueryError::service(
            service_err.code().unwrap_or("Unknown"),
            service_err.message().unwrap_or_default(),
        );
    }
    QueryError::Transport(DisplayErrorContext(&err).to_string())
}

#[async_trait]
impl Ec2Api for AwsEc2Client {
    async fn describe_dhcp_options(
        &self,
        dhcp_options_id: &str,
    ) -> Result<Vec<DhcpOptions>, QueryError> {
        let output = self
            .client
            .describe_dhcp_options()
            .dhcp_options_ids(dhcp_options_id)
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.dhcp_options.unwrap_or_default())
    }

    async fn describe_internet_gateways(
        &self,
        internet_gateway_id: &str,
    ) -> Result<Vec<InternetGateway>, QueryError> {
        let output = self
            .client
            .describe_internet_gateways()
            .internet_gateway_ids(internet_gateway_id)
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.internet_gateways.unwrap_or_default())
    }

    async fn describe_nat_gateways(
        &self,
        nat_gateway_id: &str,
    ) -> Result<Vec<NatGateway>, QueryError> {
        let output = self
            .client
            .describe_nat_gateways()
            .nat_gateway_ids(nat_gateway_id)
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.nat_gateways.unwrap_or_default())
    }

    async fn describe_network_acls(
        &self,
        network_acl_id: &str,
    ) -> Result<Vec<NetworkAcl>, QueryError> {
        let output = self
            .client
            .describe_network_acls()
            .network_acl_ids(network_acl_id)
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.network_acls.unwrap_or_default())
    }

    async fn describe_route_tables(
        &self,
        route_table_id: &str,
    ) -> Result<Vec<RouteTable>, QueryError> {
        let output = self
            .client
            .describe_route_tables()
            .route_table_ids(route_table_id)
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.route_tables.unwrap_or_default())
    }

    async fn describe_route_tables_for_subnet(
        &self,
        subnet_id: &str,
    ) -> Result<Vec<RouteTable>, QueryError> {
        let output = self
            .client
            .describe_route_tables()
            .filters(
                Filter::builder()
                    .name(FILTER_ASSOCIATION_SUBNET_ID)
                    .values(subnet_id)
                    .build(),
            )
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.route_tables.unwrap_or_default())
    }

    async fn describe_security_groups(
        &self,
        group_id: &str,
    ) -> Result<Vec<SecurityGroup>, QueryError> {
        let output = self
            .client
            .describe_security_groups()
            .group_ids(group_id)
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.security_groups.unwrap_or_default())
    }

    async fn describe_subnets(&self, subnet_id: &str) -> Result<Vec<Subnet>, QueryError> {
        let output = self
            .client
            .describe_subnets()
            .subnet_ids(subnet_id)
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.subnets.unwrap_or_default())
    }

    async fn describe_transit_gateways(
        &self,
        transit_gateway_id: &str,
    ) -> Result<Vec<TransitGateway>, QueryError> {
        let output = self
            .client
            .describe_transit_gateways()
            .transit_gateway_ids(transit_gateway_id)
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.transit_gateways.unwrap_or_default())
    }

    async fn describe_vpcs(&self, vpc_id: &str) -> Result<Vec<Vpc>, QueryError> {
        let output = self
            .client
            .describe_vpcs()
            .vpc_ids(vpc_id)
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.vpcs.unwrap_or_default())
    }

    async fn describe_vpc_endpoints(
        &self,
        vpc_endpoint_id: &str,
    ) -> Result<Vec<VpcEndpoint>, QueryError> {
        let output = self
            .client
            .describe_vpc_endpoints()
            .vpc_endpoint_ids(vpc_endpoint_id)
            .send()
            .await
            .map_err(query_error)?;
        Ok(output.vpc_endpoints.unwrap_or_default())
    }
}
