//! crm-server: HTTP server for agency customer records
//!
//! Maps create/list/get/update/delete requests onto a single SQLite
//! `customers` table and translates store failures into JSON errors.

pub mod db;
pub mod http;
pub mod models;

use anyhow::{Context, Result};

pub use db::{create_pool, init_schema, CustomerRepo, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use models::{Customer, CustomerPatch, NewCustomer, ValidationError};

/// Open the store named by `config`, make sure the schema and seed rows
/// exist, then serve until shutdown.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let pool = create_pool(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    init_schema(&pool)
        .await
        .context("Failed to initialize customers table")?;

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
