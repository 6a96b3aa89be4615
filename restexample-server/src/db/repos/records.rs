//! Record repository
//!
//! One statement per operation against the `records` table:
//! - list/get: SELECT
//! - create: INSERT ... RETURNING id
//! - replace/delete: UPDATE/DELETE with zero affected rows as not found

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use crate::db::store::{DbError, RecordStore};
use crate::models::{Record, RecordId, RecordPayload};

/// Record repository backed by PostgreSQL
#[derive(Clone)]
pub struct RecordRepo {
    pool: PgPool,
}

impl RecordRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check out one connection. It goes back to the pool when dropped, so
    /// every early return releases it.
    async fn acquire(&self) -> Result<PoolConnection<Postgres>, DbError> {
        self.pool.acquire().await.map_err(DbError::Acquire)
    }
}

#[async_trait]
impl RecordStore for RecordRepo {
    async fn list(&self) -> Result<Vec<Record>, DbError> {
        let mut conn = self.acquire().await?;

        sqlx::query_as::<_, Record>("SELECT id, name, type FROM records")
            .fetch_all(&mut *conn)
            .await
            .map_err(DbError::statement("SELECT"))
    }

    async fn get(&self, id: RecordId) -> Result<Record, DbError> {
        let mut conn = self.acquire().await?;

        sqlx::query_as::<_, Record>("SELECT id, name, type FROM records WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&mut *conn)
            .await
            .map_err(DbError::statement("SELECT"))?
            .ok_or_else(|| DbError::record_not_found(id))
    }

    async fn create(&self, payload: RecordPayload) -> Result<i64, DbError> {
        let mut conn = self.acquire().await?;

        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO records (name, type) VALUES ($1, $2) RETURNING id")
                .bind(payload.name)
                .bind(payload.kind)
                .fetch_one(&mut *conn)
                .await
                .map_err(DbError::statement("INSERT"))?;

        Ok(id)
    }

    async fn replace(&self, id: RecordId, payload: RecordPayload) -> Result<(), DbError> {
        let mut conn = self.acquire().await?;

        let result = sqlx::query("UPDATE records SET name = $2, type = $3 WHERE id = $1")
            .bind(id.get())
            .bind(payload.name)
            .bind(payload.kind)
            .execute(&mut *conn)
            .await
            .map_err(DbError::statement("UPDATE"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::record_not_found(id));
        }
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<(), DbError> {
        let mut conn = self.acquire().await?;

        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id.get())
            .execute(&mut *conn)
            .await
            .map_err(DbError::statement("DELETE"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::record_not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p restexample-server -- --ignored

    async fn repo() -> RecordRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        sqlx::query(include_str!("../../../sql/schema.sql"))
            .execute(&pool)
            .await
            .expect("schema setup failed");
        RecordRepo::new(pool)
    }

    fn id(raw: i64) -> RecordId {
        RecordId::parse(&raw.to_string()).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn crud_round_trip() {
        let repo = repo().await;

        let new_id = repo.create(RecordPayload::new("A", "B")).await.unwrap();
        let record = repo.get(id(new_id)).await.unwrap();
        assert_eq!(record.name, "A");
        assert_eq!(record.kind, "B");

        repo.replace(id(new_id), RecordPayload::new("AAA", "BBB"))
            .await
            .unwrap();
        let record = repo.get(id(new_id)).await.unwrap();
        assert_eq!(record.name, "AAA");
        assert_eq!(record.kind, "BBB");

        let all = repo.list().await.unwrap();
        assert!(all.iter().any(|r| r.id == new_id));

        repo.delete(id(new_id)).await.unwrap();
        assert!(matches!(
            repo.delete(id(new_id)).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(
            repo.get(id(new_id)).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_ids_are_not_found() {
        let repo = repo().await;
        let missing = id(i64::MAX);

        assert!(matches!(repo.get(missing).await, Err(DbError::NotFound { .. })));
        assert!(matches!(
            repo.replace(missing, RecordPayload::new("x", "y")).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(repo.delete(missing).await, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connections_are_released() {
        let repo = repo().await;
        let missing = id(i64::MAX);

        // More failing calls than the pool has connections
        for _ in 0..25 {
            let _ = repo.get(missing).await;
        }
        assert!(repo.pool.size() <= 10);
        repo.list().await.expect("pool exhausted by leaked connections");
    }
}
