//! Persistence layer for monster families and monsters.
//!
//! Owns the Postgres pool, the startup schema initializer, the row models,
//! and the repositories that issue the parameterized statements. Handlers
//! reach all of this through [`store::BestiaryStore`].

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool for the given connection options.
///
/// Connections are opened on first use, so this succeeds even when the
/// database is unreachable. Callers queue on acquisition once
/// `max_connections` are checked out.
pub fn create_pool(options: PgConnectOptions, max_connections: u32) -> DbPool {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options)
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
