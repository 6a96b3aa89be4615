//! Record entity and the request/response shapes built around it

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// A row of the `records` table.
///
/// Serializes as `{"id": 1, "name": "A", "type": "B"}`, fields in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Record {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Body accepted by create and replace.
///
/// `name` and `type` are required and unknown fields are rejected. An `id`
/// is tolerated so a fetched record can be sent back as-is, but it never
/// reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, rename = "id")]
    _id: Option<i64>,
}

impl RecordPayload {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            _id: None,
        }
    }

    /// Decode a payload from raw body bytes.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|e| ValidationError::MalformedBody {
            reason: e.to_string(),
        })
    }

    /// Build the stored record for a given id.
    pub fn into_record(self, id: RecordId) -> Record {
        Record {
            id: id.get(),
            name: self.name,
            kind: self.kind,
        }
    }
}

/// Validated record id taken from a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(i64);

impl RecordId {
    /// Parse a path segment into an id.
    ///
    /// # Rules
    /// - ASCII digits only (no sign, no whitespace)
    /// - Must fit the storage id type
    ///
    /// # Example
    /// ```
    /// use restexample_server::models::RecordId;
    ///
    /// assert_eq!(RecordId::parse("42").unwrap().get(), 42);
    /// assert!(RecordId::parse("-1").is_err());
    /// assert!(RecordId::parse("abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidId { value: s.to_owned() };

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        s.parse::<i64>().map(Self).map_err(|_| invalid())
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Create response: the generated id as a decimal string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Created {
    pub id: String,
}

impl From<i64> for Created {
    fn from(id: i64) -> Self {
        Self { id: id.to_string() }
    }
}
