//! Diagnostics for the `venn` binary.
//!
//! Events go to stderr in compact form without timestamps, so they can sit
//! beside the evaluation status printed on stdout. The configured level only
//! applies to the `venn` crates; everything else stays at `warn`.

use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, LogLevel};

/// Crates whose events follow the configured level.
const VENN_TARGETS: [&str; 2] = ["venn_expr", "venn_cli"];

fn directives(level: LogLevel) -> String {
    let level = level.as_filter_str();
    VENN_TARGETS
        .iter()
        .fold(String::from("warn"), |mut acc, target| {
            acc.push(',');
            acc.push_str(target);
            acc.push('=');
            acc.push_str(level);
            acc
        })
}

/// Install the global subscriber for `config.log_level`.
///
/// The level comes from `--log-level`, then `VENN_LOG_LEVEL`, then the
/// default. Later calls are no-ops.
pub fn init_logging(config: &CliConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives(config.log_level)))
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
