//! Validation error types

use std::fmt;

/// Client input that could not be turned into a domain value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Path id is not a non-negative integer in storage range
    InvalidId { value: String },

    /// Request body is not a valid record payload
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { value } => write!(f, "invalid record id: '{}'", value),
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidId { value: "abc".into() };
        assert_eq!(err.to_string(), "invalid record id: 'abc'");

        let err = ValidationError::MalformedBody {
            reason: "missing field `name`".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed request body: missing field `name`"
        );
    }
}
