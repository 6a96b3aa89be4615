//! Startup error types for restexample-server
//!
//! Request-time failures never reach this type; they are answered inside the
//! handler through [`crate::http::ApiError`]. Configuration failures happen
//! before [`crate::serve`] is called and surface as [`crate::ConfigError`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_wraps_cause() {
        let err: Error = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, Error::Database(_)));
        assert!(err
            .to_string()
            .starts_with("unable to connect to database: "));
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
