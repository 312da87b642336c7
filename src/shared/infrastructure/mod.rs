//! Shared infrastructure concerns
//!
//! Connection pooling and migrations used by every repository.
pub mod database;

// Re-exports for convenience
pub use database::{Database, DbConnection, DbPool, PoolStatus, MIGRATIONS};
