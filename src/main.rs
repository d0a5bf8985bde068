mod catalog_initialization;
mod web_initialization;

extern crate dotenv;

use crate::catalog_initialization::initialize_stream_resolver;
use crate::web_initialization::initialize_web_server;
use anyhow::Result;
use dotenv::dotenv;
use streamscout_common::environment::variables::LOG_FILTER;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Read the filter from the environment, defaulting to warnings and above.
    let filter = EnvFilter::try_from_env(LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Initializing Streamscout...");
    let resolver = initialize_stream_resolver()?;

    info!("Starting up web server...");
    let http_server = initialize_web_server(resolver)?;

    info!("Streamscout started!");
    http_server.await?;

    info!("Shutting Streamscout down.");
    Ok(())
}
