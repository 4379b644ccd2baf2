//! Database initialization shared by `serve` and `init-db`
//!
//! Connects with the bounded pool, pings, and ensures the products table.
//! Every step is fatal on failure.

use anyhow::{Context, Result};
use storefront_server::db::{create_pool, ensure_products_table, PgPool, PoolSettings};
use storefront_server::DbConfig;

/// Read `DB_*` configuration, open the pool, and bootstrap the schema.
pub async fn open_database() -> Result<PgPool> {
    let config = DbConfig::from_env().context("error loading database configuration")?;
    tracing::debug!(?config, "database configuration loaded");

    let pool = create_pool(config.connect_options(), PoolSettings::default())
        .await
        .context("error initializing database")?;
    tracing::info!(host = %config.host, port = config.port, db = %config.dbname, "database connected");

    ensure_products_table(&pool)
        .await
        .context("error creating product table")?;

    Ok(pool)
}

/// Run the `init-db` command: initialize and exit without serving
pub async fn run_init_db() -> Result<()> {
    let pool = open_database().await?;
    pool.close().await;

    tracing::info!("database initialized");
    Ok(())
}
