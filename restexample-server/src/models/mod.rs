//! Domain models with validation at construction
//!
//! Client input is parsed into these types before any storage access.
//! Invalid input returns ValidationError, not panic.

pub mod record;
pub mod validation;

pub use record::{Created, Record, RecordId, RecordPayload};
pub use validation::ValidationError;
