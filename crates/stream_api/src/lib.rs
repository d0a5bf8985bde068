//! Stremio addon endpoints: the manifest and the stream index.

use crate::extractors::stream_request_extractor::StreamRequest;
use crate::models::{AddonManifest, StreamResponse};
use actix_web::{middleware, web, HttpResponse};
use streamscout_catalog_client::{CatalogClient, MetadataResolver};
use tracing::debug;
use tracing_actix_web::RootSpan;

mod extractors;
mod facades;
pub mod models;
mod streamscout_api_error;
mod streamscout_root_span;

pub use facades::StreamResolver;
pub use streamscout_api_error::StreamApiError;
pub use streamscout_root_span::StreamscoutRootSpan;

/// Configure the addon endpoints. Expects a `web::Data<StreamResolver<M, C>>` in the app data.
pub fn stream_config<M, C>(cfg: &mut web::ServiceConfig)
where
    M: MetadataResolver + 'static,
    C: CatalogClient + 'static,
{
    cfg.service(
        web::scope("")
            .wrap(middleware::DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            .route("/manifest.json", web::get().to(manifest))
            .route("/stream/{type}/{id}.json", web::get().to(stream_index::<M, C>)),
    );
}

async fn manifest() -> HttpResponse {
    HttpResponse::Ok().json(AddonManifest::default())
}

async fn stream_index<M, C>(
    root_span: RootSpan,
    request: StreamRequest,
    resolver: web::Data<StreamResolver<M, C>>,
) -> HttpResponse
where
    M: MetadataResolver + 'static,
    C: CatalogClient + 'static,
{
    let media_type: &str = request.media_type.as_ref();
    root_span.record("media_type", &media_type);
    root_span.record("media_id", &request.raw_id.as_str());

    let streams = match &request.media_id {
        Some(id) => {
            resolver
                .resolve_streams(id, request.media_type, request.season, request.episode)
                .await
        }
        None => {
            debug!("Unrecognized id; returning no streams.");
            vec![]
        }
    };

    root_span.record("stream_count", &(streams.len() as u64));
    HttpResponse::Ok().json(StreamResponse::from(streams))
}
