//! Database configuration loaded from `DB_*` environment variables
//!
//! Read once at startup and never mutated afterwards.

use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_SSL_MODE: &str = "DB_SSL_MODE";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid {var} '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Connection parameters for the products database
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub ssl_mode: PgSslMode,
}

impl DbConfig {
    /// Read the configuration from the process environment.
    ///
    /// Call after the `.env` file has been loaded so its values are visible.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    ///
    /// `DB_PASSWORD` may be empty (trust/peer auth); every other variable
    /// must be present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));

        let port_raw = require(DB_PORT)?;
        let port = port_raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
            var: DB_PORT,
            value: port_raw.clone(),
            reason: e.to_string(),
        })?;

        let ssl_raw = require(DB_SSL_MODE)?;
        let ssl_mode = ssl_raw
            .trim()
            .parse::<PgSslMode>()
            .map_err(|e| ConfigError::Invalid {
                var: DB_SSL_MODE,
                value: ssl_raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            host: require(DB_HOST)?,
            port,
            user: require(DB_USER)?,
            password: lookup(DB_PASSWORD).unwrap_or_default(),
            dbname: require(DB_NAME)?,
            ssl_mode,
        })
    }

    /// Build sqlx connect options from this configuration
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.dbname)
            .ssl_mode(self.ssl_mode);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

// Password stays out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("dbname", &self.dbname)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}
