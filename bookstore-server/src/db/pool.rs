//! Database connection pool management
//!
//! One pool per process, created at startup and handed down through
//! [`AppState`](crate::http::server::AppState); there is no global
//! handle and no teardown logic beyond process exit.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept small; every request issues a single independent statement.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create the PostgreSQL connection pool and verify it is reachable.
///
/// The liveness check runs before the pool is returned: a process that
/// cannot reach the store must not begin serving requests.
///
/// # Errors
///
/// Returns an error if the connection or the liveness check fails; no
/// usable handle exists in that case.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect(database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
