//! Create and seed the customers table without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use crm_server::db::{create_pool, init_schema, DEFAULT_DATABASE_URL};

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Store location: sqlite:// URL or a file path
    #[arg(long, env = "CRM_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    let seeded = init_schema(&pool)
        .await
        .context("Failed to initialize customers table")?;
    pool.close().await;

    if seeded > 0 {
        println!("✅ Created {} and seeded {} customers", args.database_url, seeded);
    } else {
        println!("✅ {} already initialized", args.database_url);
    }

    Ok(())
}
