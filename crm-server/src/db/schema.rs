//! Customers table creation and first-run seeding

use sqlx::SqlitePool;

use super::DbError;

/// Rows inserted into an empty store: (name, email, status).
pub const SEED_CUSTOMERS: [(&str, &str, &str); 3] = [
    ("Hozaifa", "20hozaifa02@gmail.com", "lead"),
    ("Fariha", "fariha.fhf@gmail.com", "active"),
    ("Hossain", "hozaifah626@gmail.com", "lead"),
];

/// Ensure the customers table exists and seed it when empty.
///
/// Safe to call on every start. Returns how many seed rows were inserted,
/// which is zero whenever the table already held data.
pub async fn init_schema(pool: &SqlitePool) -> Result<usize, DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            status TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    let mut tx = pool.begin().await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        tracing::debug!(count, "customers table already populated");
        return Ok(0);
    }

    for (name, email, status) in SEED_CUSTOMERS {
        sqlx::query("INSERT INTO customers (name, email, status) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(status)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::info!(rows = SEED_CUSTOMERS.len(), "Seeded customers table");
    Ok(SEED_CUSTOMERS.len())
}
