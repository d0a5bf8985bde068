//! Clients for the services the stream resolver depends on: the content catalog (search and
//! play info) and the metadata provider that turns an external id into a canonical title.

mod client;
mod error;
pub mod models;
mod tmdb;

use async_trait::async_trait;
use streamscout_matching::{CandidateRecord, Episode, MediaType, RawStream};

pub use client::{CatalogClientSettings, HttpCatalogClient, DEFAULT_CATALOG_BASE_URL};
pub use error::{CatalogError, MetadataError};
pub use models::{MediaId, ResolvedMetadata};
pub use tmdb::{TmdbMetadataResolver, TmdbSettings, DEFAULT_TMDB_BASE_URL};

/// The content catalog that is searched for candidates and asked for their streams.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search the catalog by title. An empty list is a valid answer.
    async fn search(&self, keyword: &str) -> Result<Vec<CandidateRecord>, CatalogError>;

    /// Retrieve the raw streams of a catalog subject, or of one of its episodes.
    async fn streams(
        &self,
        subject_id: &str,
        episode: Option<Episode>,
    ) -> Result<Vec<RawStream>, CatalogError>;
}

/// Resolves an external identifier to the canonical title of the work.
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    /// `Ok(None)` when the provider does not know the identifier.
    async fn resolve(
        &self,
        id: &MediaId,
        media_type: MediaType,
    ) -> Result<Option<ResolvedMetadata>, MetadataError>;
}
