//! Database layer - connection pool, schema and repositories
//!
//! - Connection pool (max 5 connections), location passed in explicitly
//! - Schema created and seeded idempotently on startup
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Transactions for multi-step operations

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool, DEFAULT_DATABASE_URL};
pub use repos::*;
pub use schema::{init_schema, SEED_CUSTOMERS};
