//! Storage seam used by the HTTP handlers

use async_trait::async_trait;

use crate::models::{Record, RecordId, RecordPayload};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("unable to acquire a database connection: {0}")]
    Acquire(#[source] sqlx::Error),

    #[error("unable to {op}: {source}")]
    Statement {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn statement(op: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Statement { op, source }
    }

    pub(crate) fn record_not_found(id: RecordId) -> Self {
        Self::NotFound {
            resource: "record",
            id: id.to_string(),
        }
    }
}

/// Record persistence, one statement per call (testable)
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records. An empty table is an empty vector.
    async fn list(&self) -> Result<Vec<Record>, DbError>;

    /// A single record by id.
    async fn get(&self, id: RecordId) -> Result<Record, DbError>;

    /// Insert a record and return the id storage generated for it.
    async fn create(&self, payload: RecordPayload) -> Result<i64, DbError>;

    /// Overwrite name and type of an existing record.
    async fn replace(&self, id: RecordId, payload: RecordPayload) -> Result<(), DbError>;

    /// Remove a record.
    async fn delete(&self, id: RecordId) -> Result<(), DbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DbError::record_not_found(RecordId::parse("7").unwrap());
        assert_eq!(err.to_string(), "not found: record '7'");

        let err = DbError::statement("DELETE")(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("unable to DELETE: "));

        let err = DbError::Acquire(sqlx::Error::PoolTimedOut);
        assert!(err
            .to_string()
            .starts_with("unable to acquire a database connection: "));
    }
}
