//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Explicit acquire of one pooled connection per call
//! - Parameters are always bound, never interpolated

pub mod records;

pub use records::RecordRepo;
