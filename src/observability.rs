//! # Observability
//!
//! Tracing subscriber setup shared by the CLI and test harnesses.

use crate::config::ValidatorConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the configured log level applies to
/// this crate only. Calling this more than once is harmless: the second
/// subscriber is rejected and the first one stays in place.
pub fn init_tracing(config: &ValidatorConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.log_enable_color)
        .try_init()
    {
        tracing::debug!("Tracing subscriber already initialized: {}", e);
    }
}

fn default_directive(log_level: &str) -> String {
    format!("ec2_e2e_validator={},ec2ctl={}", log_level.to_lowercase(), log_level.to_lowercase())
}
