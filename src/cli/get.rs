//! # Get Commands
//!
//! Commands that describe resources and print what EC2 returned.

use crate::OutputFormat;
use anyhow::{Context, Result};
use aws_sdk_ec2::types::RouteTableAssociation;
use ec2_e2e_validator::prelude::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GetReport {
    kind: ResourceKind,
    id: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
}

#[derive(Debug, Serialize)]
struct AssociationReport {
    route_table_id: Option<String>,
    subnet_id: Option<String>,
    association_id: Option<String>,
    main: Option<bool>,
}

impl From<&RouteTableAssociation> for AssociationReport {
    fn from(assoc: &RouteTableAssociation) -> Self {
        Self {
            route_table_id: assoc.route_table_id().map(ToString::to_string),
            subnet_id: assoc.subnet_id().map(ToString::to_string),
            association_id: assoc.route_table_association_id().map(ToString::to_string),
            main: assoc.main(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SubnetRouteTablesReport {
    subnet_id: String,
    associations: Vec<AssociationReport>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}

/// Describe a resource of any kind
pub async fn get_command<C: Ec2Api>(
    validator: &Ec2Validator<C>,
    kind: ResourceKind,
    id: &str,
    output: OutputFormat,
) -> Result<()> {
    let record = validator
        .get(kind, id)
        .await
        .with_context(|| format!("Failed to describe {kind} '{id}'"))?;

    if output == OutputFormat::Json {
        return print_json(&GetReport {
            kind,
            id: id.to_string(),
            found: record.is_some(),
            state: record.as_ref().and_then(Record::state).map(ToString::to_string),
        });
    }

    match record {
        Some(record) => {
            if let Some(state) = record.state() {
                println!("{kind} {id} ({state})");
            } else {
                println!("{kind} {id}");
            }
            println!("{record:#?}");
        }
        None => println!("{kind} {id} not found"),
    }
    Ok(())
}

/// Print the association between a route table and a subnet
pub async fn association_command<C: Ec2Api>(
    validator: &Ec2Validator<C>,
    route_table_id: &str,
    subnet_id: &str,
    output: OutputFormat,
) -> Result<()> {
    let association = validator
        .get_route_table_association(route_table_id, subnet_id)
        .await
        .with_context(|| format!("Failed to look up associations of '{route_table_id}'"))?;

    if output == OutputFormat::Json {
        return print_json(&association.as_ref().map(AssociationReport::from));
    }

    match association {
        Some(assoc) => println!("{assoc:#?}"),
        None => println!("route table {route_table_id} has no association with {subnet_id}"),
    }
    Ok(())
}

/// List the route tables a subnet is associated with
pub async fn subnet_route_tables_command<C: Ec2Api>(
    validator: &Ec2Validator<C>,
    subnet_id: &str,
    output: OutputFormat,
) -> Result<()> {
    let associations = validator
        .get_subnet_route_table_associations(subnet_id)
        .await
        .with_context(|| format!("Failed to list route tables of '{subnet_id}'"))?;

    if output == OutputFormat::Json {
        return print_json(&SubnetRouteTablesReport {
            subnet_id: subnet_id.to_string(),
            associations: associations.iter().map(AssociationReport::from).collect(),
        });
    }

    if associations.is_empty() {
        println!("subnet {subnet_id} has no route table associations");
        return Ok(());
    }

    for assoc in associations {
        println!(
            "{}  {}",
            assoc.route_table_id().unwrap_or("<unknown>"),
            assoc.route_table_association_id().unwrap_or("<unknown>")
        );
    }
    Ok(())
}
