//! Repository implementations for database access
//!
//! Repositories borrow the pool and rely on table constraints for
//! uniqueness rather than checking before writing.

pub mod customers;

pub use customers::{CustomerRepo, DbError};
