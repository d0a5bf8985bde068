use crate::catalog_initialization::AppStreamResolver;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use streamscout_catalog_client::{HttpCatalogClient, TmdbMetadataResolver};
use streamscout_common::environment::variables::{WEB_HOST, WEB_PORT};
use streamscout_common::environment::{get_env_var_or, get_parsed_env_var};
use streamscout_stream_api::{stream_config, StreamscoutRootSpan};
use tracing::info;
use tracing_actix_web::TracingLogger;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 7000;

pub fn initialize_web_server(resolver: AppStreamResolver) -> Result<Server> {
    let resolver = web::Data::new(resolver);
    let host = get_env_var_or(WEB_HOST, DEFAULT_HOST);
    let port = get_parsed_env_var(WEB_PORT, DEFAULT_PORT)?;

    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<StreamscoutRootSpan>::new())
            .app_data(resolver.clone())
            .configure(stream_config::<TmdbMetadataResolver, HttpCatalogClient>)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("Could not bind the web server to {}:{}.", host, port))?
    .run();

    info!("Listening on {}:{}.", host, port);
    Ok(http_server)
}
