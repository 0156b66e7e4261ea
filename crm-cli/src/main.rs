//! crm CLI - agency customer records service
//!
//! - `serve`: run the customer HTTP API
//! - `init-db`: create and seed the customers table only

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "crm",
    author,
    version,
    about = "Agency CRM - create, read, update and delete customer records over HTTP"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the customer HTTP API
    Serve(commands::serve::ServeArgs),
    /// Create the customers table and seed it if empty
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; values may come from the real environment
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::InitDb(args) => commands::run_init_db(args).await,
    }
}
