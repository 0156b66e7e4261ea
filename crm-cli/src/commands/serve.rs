//! HTTP server command for the customer API

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;

use crm_server::db::DEFAULT_DATABASE_URL;
use crm_server::ServerConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CRM_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Store location: sqlite:// URL, sqlite::memory:, or a file path
    #[arg(long, env = "CRM_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind_addr: args.bind,
            database_url: args.database_url,
            cors_permissive: args.cors_permissive,
        }
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting crm server on {}", args.bind);
    crm_server::serve(ServerConfig::from(args)).await
}
