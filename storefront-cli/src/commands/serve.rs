//! HTTP server command for the product catalog
//!
//! Initializes the database, then serves `/products` until shutdown.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use storefront_server::http::server::DEFAULT_PORT;
use storefront_server::{run_server, AppState, PgProductStore, ServerConfig};

use super::init_db::open_database;

/// Environment variable consulted when `--port` is not given
pub const SERVER_PORT: &str = "SERVER_PORT";

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on (default: $SERVER_PORT, then 8080)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

/// Pick the listen port: flag, then `SERVER_PORT`, then 8080.
///
/// An empty `SERVER_PORT` counts as unset.
pub fn resolve_port(flag: Option<u16>, env_value: Option<String>) -> Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }

    match env_value.as_deref().map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("invalid {}: '{}'", SERVER_PORT, raw)),
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let port = resolve_port(args.port, std::env::var(SERVER_PORT).ok())?;

    let pool = open_database().await?;
    let store = Arc::new(PgProductStore::new(pool.clone()));

    // Blocks until shutdown
    let result = run_server(AppState::new(store), ServerConfig::with_port(port))
        .await
        .context("server error");

    pool.close().await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        assert_eq!(resolve_port(Some(9000), Some("7000".into())).unwrap(), 9000);
    }

    #[test]
    fn env_used_without_flag() {
        assert_eq!(resolve_port(None, Some("7000".into())).unwrap(), 7000);
    }

    #[test]
    fn falls_back_to_8080() {
        assert_eq!(resolve_port(None, None).unwrap(), 8080);
        assert_eq!(resolve_port(None, Some(String::new())).unwrap(), 8080);
    }

    #[test]
    fn garbage_env_port_is_an_error() {
        let err = resolve_port(None, Some("eighty".into())).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
    }
}
