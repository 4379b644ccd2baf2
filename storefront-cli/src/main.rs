//! storefront CLI - product catalog HTTP service
//!
//! Entry point for the `storefront` binary:
//! - `serve` (default): initialize the database and serve `/products`
//! - `init-db`: initialize the database and exit
//!
//! Startup is strictly sequential. Any failure before the listener is up
//! terminates the process with a non-zero exit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::serve::ServeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    author,
    version,
    about = "Product catalog HTTP service backed by PostgreSQL",
    long_about = "Serves GET/POST /products over a single PostgreSQL table. Database settings \
                  come from DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME and DB_SSL_MODE, \
                  read after loading the environment file."
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Environment file loaded before configuration is read
    #[arg(long, global = true, default_value = ".env")]
    env_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Create the products table if needed, then exit
    InitDb,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Loaded before tracing so RUST_LOG may come from the file.
    // dotenvy never overrides variables already set in the process.
    dotenvy::from_path(&cli.env_file).with_context(|| {
        format!(
            "error loading environment file {}",
            cli.env_file.display()
        )
    })?;

    tracing_setup::init(cli.debug)?;
    tracing::debug!(path = %cli.env_file.display(), "environment file loaded");

    match cli.command.unwrap_or_else(|| Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::InitDb => commands::run_init_db().await,
    }
}
