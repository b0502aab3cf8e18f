//! # EC2CTL CLI
//!
//! Command-line access to the validator's lookups and assertions, for poking
//! at an account while debugging an e2e run.
//!
//! ## Usage
//!
//! ```bash
//! # Describe a resource
//! ec2ctl get vpc vpc-0123456789abcdef0
//!
//! # Assert a NAT gateway is gone (deleting/deleted counts as gone)
//! ec2ctl assert nat-gateway nat-0123456789abcdef0 --absent
//!
//! # Assert a route exists
//! ec2ctl route rtb-1 igw-1 CreateRoute
//!
//! # Show the association between a route table and a subnet, as JSON
//! ec2ctl association rtb-1 subnet-1 --output json
//!
//! # Assert a subnet is associated with exactly these route tables
//! ec2ctl subnet-route-tables subnet-1 rtb-1 rtb-2
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ec2_e2e_validator::observability::init_tracing;
use ec2_e2e_validator::prelude::*;

mod check;
mod get;

/// EC2 e2e validator CLI
#[derive(Parser)]
#[command(name = "ec2ctl")]
#[command(
    about = "Look up and assert EC2 resources",
    long_about = None,
    after_help = "\
Examples:
  ec2ctl get subnet subnet-1
  ec2ctl assert tgw tgw-1 --absent
  ec2ctl route rtb-1 igw-1 CreateRoute --output json
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// AWS region (defaults to AWS_REGION, then us-west-2)
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// EC2 endpoint override (defaults to EC2_ENDPOINT_URL)
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a resource and print it
    Get {
        #[arg(value_enum, value_name = "KIND")]
        kind: KindArg,

        #[arg(value_name = "ID")]
        id: String,
    },
    /// Assert a resource exists (or, with --absent, does not)
    Assert {
        #[arg(value_enum, value_name = "KIND")]
        kind: KindArg,

        #[arg(value_name = "ID")]
        id: String,

        /// Expect the resource not to exist
        #[arg(long)]
        absent: bool,
    },
    /// Assert a route table holds a route to a gateway with a given origin
    Route {
        #[arg(value_name = "ROUTE_TABLE_ID")]
        route_table_id: String,

        #[arg(value_name = "GATEWAY_ID")]
        gateway_id: String,

        /// Route origin, e.g. CreateRoute, CreateRouteTable, EnableVgwRoutePropagation
        #[arg(value_name = "ORIGIN")]
        origin: String,

        /// Expect the route not to exist
        #[arg(long)]
        absent: bool,
    },
    /// Print the association between a route table and a subnet
    Association {
        #[arg(value_name = "ROUTE_TABLE_ID")]
        route_table_id: String,

        #[arg(value_name = "SUBNET_ID")]
        subnet_id: String,
    },
    /// List a subnet's route table associations, or assert them when ids are given
    #[command(name = "subnet-route-tables")]
    SubnetRouteTables {
        #[arg(value_name = "SUBNET_ID")]
        subnet_id: String,

        /// Route tables the subnet must be associated with (exactly)
        #[arg(value_name = "ROUTE_TABLE_ID")]
        route_table_ids: Vec<String>,
    },
}

/// Resource kinds accepted on the command line
#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    #[value(name = "dhcp-options", alias = "dopt")]
    DhcpOptions,
    #[value(name = "internet-gateway", alias = "igw")]
    InternetGateway,
    #[value(name = "nat-gateway", alias = "nat")]
    NatGateway,
    #[value(name = "network-acl", alias = "acl")]
    NetworkAcl,
    #[value(name = "route-table", alias = "rtb")]
    RouteTable,
    #[value(name = "security-group", alias = "sg")]
    SecurityGroup,
    #[value(name = "subnet")]
    Subnet,
    #[value(name = "transit-gateway", alias = "tgw")]
    TransitGateway,
    #[value(name = "vpc")]
    Vpc,
    #[value(name = "vpc-endpoint", alias = "vpce")]
    VpcEndpoint,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::DhcpOptions => ResourceKind::DhcpOptions,
            KindArg::InternetGateway => ResourceKind::InternetGateway,
            KindArg::NatGateway => ResourceKind::NatGateway,
            KindArg::NetworkAcl => ResourceKind::NetworkAcl,
            KindArg::RouteTable => ResourceKind::RouteTable,
            KindArg::SecurityGroup => ResourceKind::SecurityGroup,
            KindArg::Subnet => ResourceKind::Subnet,
            KindArg::TransitGateway => ResourceKind::TransitGateway,
            KindArg::Vpc => ResourceKind::Vpc,
            KindArg::VpcEndpoint => ResourceKind::VpcEndpoint,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ValidatorConfig::from_env()
        .with_region(cli.region)
        .with_endpoint_url(cli.endpoint_url);

    init_tracing(&config);

    let client = AwsEc2Client::new(&config)
        .await
        .context("Failed to create EC2 client")?;
    tracing::debug!("Using EC2 client in region {}", client.region());
    let validator = Ec2Validator::new(client);

    match cli.command {
        Commands::Get { kind, id } => {
            get::get_command(&validator, kind.into(), &id, cli.output).await
        }
        Commands::Assert { kind, id, absent } => {
            check::assert_command(&validator, kind.into(), &id, !absent, cli.output).await
        }
        Commands::Route {
            route_table_id,
            gateway_id,
            origin,
            absent,
        } => {
            check::route_command(
                &validator,
                &route_table_id,
                &gateway_id,
                &origin,
                !absent,
                cli.output,
            )
            .await
        }
        Commands::Association {
            route_table_id,
            subnet_id,
        } => {
            get::association_command(&validator, &route_table_id, &subnet_id, cli.output).await
        }
        Commands::SubnetRouteTables {
            subnet_id,
            route_table_ids,
        } => {
            if route_table_ids.is_empty() {
                get::subnet_route_tables_command(&validator, &subnet_id, cli.output).await
            } else {
                check::subnet_route_tables_command(
                    &validator,
                    &subnet_id,
                    &route_table_ids,
                    cli.output,
                )
                .await
            }
        }
    }
}
