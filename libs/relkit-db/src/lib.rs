//! Persistence plumbing shared by the relkit example modules.
//!
//! The examples only call into sea-orm; this crate carries the pieces every
//! module needs and none should re-implement:
//! - DSN engine detection and feature-gated pool construction
//!   (`SQLite`, `PostgreSQL`, `MySQL`) wrapped into a sea-orm
//!   [`DatabaseConnection`]
//! - the [`StoreError`] taxonomy shared by every controller operation
//! - the generic [`EntityController`] transaction wrapper

#![cfg_attr(
    not(any(feature = "pg", feature = "mysql", feature = "sqlite")),
    allow(unused_imports, unused_variables, dead_code)
)]

mod controller;
mod error;

pub use controller::{EntityController, PkValue};
pub use error::StoreError;

pub use sea_orm::DatabaseConnection;

use std::time::Duration;

use thiserror::Error;

#[cfg(feature = "mysql")]
use sea_orm::SqlxMySqlConnector;
#[cfg(feature = "pg")]
use sea_orm::SqlxPostgresConnector;
#[cfg(feature = "sqlite")]
use sea_orm::SqlxSqliteConnector;
#[cfg(feature = "mysql")]
use sea_orm::sqlx::mysql::MySqlPoolOptions;
#[cfg(feature = "pg")]
use sea_orm::sqlx::postgres::PgPoolOptions;
#[cfg(feature = "sqlite")]
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Errors raised while bootstrapping a connection.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("unknown DSN: {0}")]
    UnknownDsn(String),

    #[error("feature not enabled: {0}")]
    FeatureDisabled(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(any(feature = "pg", feature = "mysql", feature = "sqlite"))]
    #[error(transparent)]
    Sqlx(#[from] sea_orm::sqlx::Error),
}

/// Supported engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbEngine {
    Postgres,
    MySql,
    Sqlite,
}

impl DbEngine {
    /// Sniff the engine from a DSN scheme.
    ///
    /// # Errors
    /// Returns [`ConnectError::UnknownDsn`] for an unrecognized scheme.
    pub fn detect(dsn: &str) -> Result<Self, ConnectError> {
        // Trim only leading spaces/newlines to be forgiving with env files.
        let s = dsn.trim_start();

        if s.starts_with("postgres://") || s.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else if s.starts_with("mysql://") {
            Ok(Self::MySql)
        } else if s.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            Err(ConnectError::UnknownDsn(dsn.to_owned()))
        }
    }
}

/// Connection options.
/// Covers the common sqlx pool knobs; each driver applies the subset it supports.
#[derive(Clone, Debug)]
pub struct ConnectOpts {
    /// Maximum number of connections in the pool.
    pub max_conns: u32,
    /// Timeout to acquire a connection from the pool.
    pub acquire_timeout: Duration,
    /// For `SQLite` file DSNs, create parent directories if missing.
    pub create_sqlite_dirs: bool,
}

impl Default for ConnectOpts {
    fn default() -> Self {
        Self {
            max_conns: 10,
            acquire_timeout: Duration::from_secs(30),
            create_sqlite_dirs: true,
        }
    }
}

/// True for any of the sqlx spellings of an in-memory `SQLite` database.
#[cfg(feature = "sqlite")]
fn is_memory_dsn(dsn: &str) -> bool {
    dsn.contains(":memory:") || dsn.contains("mode=memory")
}

/// Strip the scheme and create the parent directory of a `SQLite` file DSN.
#[cfg(feature = "sqlite")]
fn prepare_sqlite_path(dsn: &str) -> Result<(), ConnectError> {
    let path = dsn
        .trim_start()
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Connect and wrap the pool into a sea-orm [`DatabaseConnection`].
///
/// # Errors
/// Returns an error if the DSN is invalid, the driver feature is disabled, or
/// the connection fails.
pub async fn connect(dsn: &str, opts: ConnectOpts) -> Result<DatabaseConnection, ConnectError> {
    match DbEngine::detect(dsn)? {
        #[cfg(feature = "pg")]
        DbEngine::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(opts.max_conns)
                .acquire_timeout(opts.acquire_timeout)
                .connect(dsn)
                .await?;
            Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
        }
        #[cfg(not(feature = "pg"))]
        DbEngine::Postgres => Err(ConnectError::FeatureDisabled("pg")),
        #[cfg(feature = "mysql")]
        DbEngine::MySql => {
            let pool = MySqlPoolOptions::new()
                .max_connections(opts.max_conns)
                .acquire_timeout(opts.acquire_timeout)
                .connect(dsn)
                .await?;
            Ok(SqlxMySqlConnector::from_sqlx_mysql_pool(pool))
        }
        #[cfg(not(feature = "mysql"))]
        DbEngine::MySql => Err(ConnectError::FeatureDisabled("mysql")),
        #[cfg(feature = "sqlite")]
        DbEngine::Sqlite => {
            use std::str::FromStr;

            let memory = is_memory_dsn(dsn);
            if !memory && opts.create_sqlite_dirs {
                prepare_sqlite_path(dsn)?;
            }

            let mut pool_opts = SqlitePoolOptions::new().acquire_timeout(opts.acquire_timeout);
            if memory {
                // An in-memory database lives and dies with its connection, so
                // the pool must hold exactly one and never recycle it.
                pool_opts = pool_opts
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None);
            } else {
                pool_opts = pool_opts.max_connections(opts.max_conns);
            }

            let connect_opts = SqliteConnectOptions::from_str(dsn)?.create_if_missing(true);
            let pool = pool_opts.connect_with(connect_opts).await?;
            Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
        }
        #[cfg(not(feature = "sqlite"))]
        DbEngine::Sqlite => Err(ConnectError::FeatureDisabled("sqlite")),
    }
}
