//! Domain models with validation at construction
//!
//! Customer input is validated when the draft or patch is built.
//! Invalid input returns ValidationError, not panic.

pub mod customer;
pub mod validation;

pub use customer::{Customer, CustomerPatch, NewCustomer};
pub use validation::ValidationError;
