//! # Check Commands
//!
//! Commands that run an assertion, print a report and fail the process on
//! mismatch.

use crate::OutputFormat;
use anyhow::{Context, Result};
use ec2_e2e_validator::prelude::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CheckReport {
    check: &'static str,
    target: String,
    expected: bool,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckReport {
    fn print(&self, output: OutputFormat) -> Result<()> {
        match output {
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(self).context("Failed to serialize report")?;
                println!("{json}");
            }
            OutputFormat::Text => {
                let mark = if self.passed { "✅" } else { "❌" };
                println!("{mark} {} {}", self.check, self.target);
                if let Some(error) = &self.error {
                    println!("   {error}");
                }
            }
        }
        Ok(())
    }
}

fn report(
    check: &'static str,
    target: String,
    expected: bool,
    result: Result<(), ValidationError>,
) -> (CheckReport, Result<(), ValidationError>) {
    let report = CheckReport {
        check,
        target,
        expected,
        passed: result.is_ok(),
        error: result.as_ref().err().map(ToString::to_string),
    };
    (report, result)
}

/// Assert existence of a resource of any kind
pub async fn assert_command<C: Ec2Api>(
    validator: &Ec2Validator<C>,
    kind: ResourceKind,
    id: &str,
    expect_exists: bool,
    output: OutputFormat,
) -> Result<()> {
    let result = validator.assert_exists(kind, id, expect_exists).await;
    let (report, result) = report("exists", format!("{kind} {id}"), expect_exists, result);
    report.print(output)?;
    Ok(result?)
}

/// Assert presence of a route
pub async fn route_command<C: Ec2Api>(
    validator: &Ec2Validator<C>,
    route_table_id: &str,
    gateway_id: &str,
    origin: &str,
    expect_exists: bool,
    output: OutputFormat,
) -> Result<()> {
    let result = validator
        .assert_route(route_table_id, gateway_id, origin, expect_exists)
        .await;
    let (report, result) = report(
        "route",
        format!("{route_table_id} -> {gateway_id} ({origin})"),
        expect_exists,
        result,
    );
    report.print(output)?;
    Ok(result?)
}

/// Assert a subnet's route table associations
pub async fn subnet_route_tables_command<C: Ec2Api>(
    validator: &Ec2Validator<C>,
    subnet_id: &str,
    route_table_ids: &[String],
    output: OutputFormat,
) -> Result<()> {
    let result = validator
        .assert_subnet_route_tables(subnet_id, route_table_ids)
        .await;
    let (report, result) = report(
        "subnet-route-tables",
        format!("{subnet_id} -> [{}]", route_table_ids.join(", ")),
        true,
        result,
    );
    report.print(output)?;
    Ok(result?)
}
