//! Customer repository
//!
//! Single-statement CRUD against the `customers` table:
//! - create: INSERT ... RETURNING, duplicate email classified from the constraint
//! - update: COALESCE each supplied field onto the stored row in one statement
//! - delete: zero affected rows means not found

use sqlx::SqlitePool;

use crate::models::{Customer, CustomerPatch, NewCustomer};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("duplicate value for {field}")]
    Duplicate { field: &'static str },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return Self::Duplicate {
                    field: unique_field(db.message()),
                };
            }
        }
        Self::Sqlx(e)
    }
}

/// SQLite reports "UNIQUE constraint failed: customers.email".
fn unique_field(message: &str) -> &'static str {
    if message.contains("customers.email") {
        "email"
    } else {
        "record"
    }
}

const RESOURCE: &str = "Customer";

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a customer and return it with its assigned id.
    ///
    /// No check-then-insert: a taken email comes back from the UNIQUE
    /// constraint as `DbError::Duplicate` and nothing is written.
    pub async fn create(&self, customer: NewCustomer) -> Result<Customer, DbError> {
        let created: Customer = sqlx::query_as(
            r#"
            INSERT INTO customers (name, email, status)
            VALUES (?, ?, ?)
            RETURNING id, name, email, status
            "#,
        )
        .bind(customer.name())
        .bind(customer.email())
        .bind(customer.status())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = created.id, "customer created");
        Ok(created)
    }

    /// List customers in id order, optionally only those with an exact status.
    ///
    /// An empty status string is treated the same as no filter.
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Customer>, DbError> {
        let customers: Vec<Customer> = match status.filter(|s| !s.is_empty()) {
            Some(status) => {
                sqlx::query_as(
                    "SELECT id, name, email, status FROM customers WHERE status = ? ORDER BY id",
                )
                .bind(status)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT id, name, email, status FROM customers ORDER BY id")
                    .fetch_all(self.pool)
                    .await?
            }
        };

        Ok(customers)
    }

    /// Get a single customer by id.
    pub async fn get(&self, id: i64) -> Result<Customer, DbError> {
        sqlx::query_as("SELECT id, name, email, status FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Overlay `patch` on the stored customer and write every field back.
    ///
    /// One autocommit statement: each column takes the supplied value or
    /// keeps its own, so no other writer can slip between a read and the
    /// write. A missing id matches no row and nothing is inserted. Moving
    /// onto another customer's email fails with `DbError::Duplicate` and
    /// leaves the row unchanged. An empty patch writes nothing.
    pub async fn update(&self, id: i64, patch: CustomerPatch) -> Result<Customer, DbError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let updated: Customer = sqlx::query_as(
            r#"
            UPDATE customers
            SET name = COALESCE(?, name),
                email = COALESCE(?, email),
                status = COALESCE(?, status)
            WHERE id = ?
            RETURNING id, name, email, status
            "#,
        )
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.status)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        tracing::debug!(id, "customer updated");
        Ok(updated)
    }

    /// Delete a customer. Deleting a missing id is a no-op reported as not found.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(id, "customer deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    }
}
