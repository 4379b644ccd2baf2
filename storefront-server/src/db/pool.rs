//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and a reachability
//! check before the pool is handed out.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool};

use super::DbError;

/// Time allowed for the initial connect + ping
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool limits
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    /// Ceiling on simultaneously open connections
    pub max_connections: u32,
    /// Connections older than this are closed and replaced
    pub max_lifetime: Duration,
    /// Bound on connect + ping at startup
    pub connect_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 25,
            max_lifetime: Duration::from_secs(5 * 60),
            connect_timeout: CONNECT_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool and verify the server answers.
///
/// Idle connections are kept up to `max_connections`; only `max_lifetime`
/// retires them.
///
/// # Errors
///
/// Returns an error if the connection or ping fails, or if both together
/// take longer than `settings.connect_timeout`.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(config.connect_options(), PoolSettings::default()).await?;
/// ```
pub async fn create_pool(
    options: PgConnectOptions,
    settings: PoolSettings,
) -> Result<PgPool, DbError> {
    let connect = async {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .max_lifetime(settings.max_lifetime)
            .idle_timeout(None::<Duration>)
            .acquire_timeout(settings.connect_timeout)
            .connect_with(options)
            .await
            .map_err(DbError::Connect)?;

        let mut conn = pool.acquire().await.map_err(DbError::Ping)?;
        conn.ping().await.map_err(DbError::Ping)?;
        drop(conn);

        Ok(pool)
    };

    tokio::time::timeout(settings.connect_timeout, connect)
        .await
        .map_err(|_| DbError::Timeout {
            operation: "database connect",
            after: settings.connect_timeout,
        })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = PoolSettings::default();
        assert_eq!(settings.max_connections, 25);
        assert_eq!(settings.max_lifetime, Duration::from_secs(300));
        assert_eq!(settings.connect_timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn unreachable_server_fails_fast() {
        // Port 1 on loopback refuses connections.
        let options = PgConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .username("nobody")
            .database("nothing");
        let settings = PoolSettings {
            connect_timeout: Duration::from_secs(2),
            ..PoolSettings::default()
        };

        let result = create_pool(options, settings).await;
        assert!(result.is_err());
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p storefront-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let options: PgConnectOptions = url.parse().expect("invalid DATABASE_URL");
        let pool = create_pool(options, PoolSettings::default())
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
