//! Console tracing for the crm CLI
//!
//! `RUST_LOG` wins when set; otherwise the server, the CLI and the HTTP
//! trace layer log at `info`, or `debug` with `--debug`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Crates whose events are shown by default.
const LOG_TARGETS: [&str; 3] = ["crm", "crm_server", "tower_http"];

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log our own crates at debug level
    pub debug: bool,
}

/// Filter directives for the given settings and `RUST_LOG` value.
fn filter_directives(config: &TracingConfig, rust_log: Option<&str>) -> String {
    if let Some(directives) = rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        return directives.to_owned();
    }

    let level = if config.debug { "debug" } else { "info" };
    let mut directives = vec!["warn".to_owned()];
    directives.extend(LOG_TARGETS.iter().map(|target| format!("{}={}", target, level)));
    directives.join(",")
}

/// Initialize tracing with compact console output
pub fn init(config: &TracingConfig) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::try_new(filter_directives(config, rust_log.as_deref()))
        .or_else(|_| EnvFilter::try_new(filter_directives(config, None)))
        .map_err(|err| anyhow!(err))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
