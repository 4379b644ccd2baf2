//! Console logging for the storefront binary
//!
//! `RUST_LOG` wins when set (it may come from the env file). Otherwise the
//! service crates and the request trace layer log at `info`, or `debug` with
//! `--debug`, and everything else stays at `warn`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is absent or unparsable
fn default_directives(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("warn,storefront={level},storefront_server={level},tower_http={level}")
}

fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(debug)))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(debug: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
