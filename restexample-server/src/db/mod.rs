//! Database layer - connection pool, store trait and repositories
//!
//! # Design Principles
//!
//! - One pooled connection per operation, released on every exit path
//! - One statement per operation, no multi-statement transactions
//! - Zero affected rows on a keyed operation is `DbError::NotFound`

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::create_pool;
pub use repos::RecordRepo;
pub use store::{DbError, RecordStore};
