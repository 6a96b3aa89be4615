//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Maximum connections for the pool. `acquire` waits once all are in use.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Upper bound on waiting for a connection, including the startup connect.
/// sqlx keeps retrying refused connections until this expires.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Create a PostgreSQL connection pool.
///
/// Connects eagerly, so an unreachable database fails here, within
/// `DEFAULT_ACQUIRE_TIMEOUT`, rather than on the first request.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/cats").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .acquire_timeout(DEFAULT_ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn unreachable_database_fails_fast() {
        let started = Instant::now();
        let result = create_pool("postgres://postgres:pw@127.0.0.1:1/cats").await;

        assert!(result.is_err());
        assert!(started.elapsed() < DEFAULT_ACQUIRE_TIMEOUT + Duration::from_secs(5));
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p restexample-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
