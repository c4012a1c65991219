//! # Persistence Layer
//!
//! SQLite storage for users, people, planets and favorites.
//!
//! The pool is the only shared state. Handlers never touch it directly:
//! they receive a connection acquired for the request and pass it to the
//! functions in [`queries`], which each run a single statement.

pub mod models;
pub mod password;
pub mod queries;
pub mod seed;

use std::str::FromStr;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;

pub use models::{Favorite, FavoriteTarget, Person, Planet, User, DEFAULT_USER_ID};
pub use seed::{SeedDocument, SeedError, SeedReport};

const SCHEMA: &str = include_str!("schema.sql");

/// Handle to the relational store
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to a SQLite database, creating the file if it is missing,
    /// and make sure every table exists.
    pub async fn connect(url: &str) -> sqlx::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.bootstrap().await?;
        Ok(db)
    }

    /// Private in-memory database.
    ///
    /// Every SQLite memory connection is its own database, so the pool is
    /// pinned to one connection that never expires.
    pub async fn in_memory() -> sqlx::Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.bootstrap().await?;
        Ok(db)
    }

    /// Acquire a connection for the duration of one unit of work.
    /// It goes back to the pool when dropped.
    pub async fn acquire(&self) -> sqlx::Result<PoolConnection<Sqlite>> {
        self.pool.acquire().await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn bootstrap(&self) -> sqlx::Result<()> {
        for statement in SCHEMA.split(';') {
            let stmt = statement.trim();
            if !stmt.is_empty() {
                sqlx::query(stmt).execute(&self.pool).await?;
            }
        }
        tracing::debug!("schema bootstrap complete");
        Ok(())
    }
}
