mod configuration;

use crate::models::tmdb_responses::{DetailsResponse, FindResponse};
use crate::models::{MediaId, ResolvedMetadata};
use crate::{MetadataError, MetadataResolver};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use streamscout_matching::MediaType;
use tracing::{debug, instrument, warn};

pub use configuration::{TmdbSettings, DEFAULT_TMDB_BASE_URL};

/// [MetadataResolver] backed by the TMDB v3 API.
#[derive(Clone)]
pub struct TmdbMetadataResolver {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbMetadataResolver {
    pub fn new(settings: TmdbSettings) -> Result<Self, MetadataError> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(TmdbMetadataResolver {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
        })
    }

    /// `Ok(None)` on a 404.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, MetadataError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => Ok(Some(response.json::<T>().await?)),
            s => Err(MetadataError::Status(s.as_u16())),
        }
    }

    /// Translate an IMDb id into a TMDB id. Results of the requested type are preferred; the
    /// other list is consulted when they are absent.
    async fn find_by_imdb(
        &self,
        imdb_id: &str,
        media_type: MediaType,
    ) -> Result<Option<(String, MediaType)>, MetadataError> {
        let found: FindResponse = match self
            .get(
                &format!("/find/{}", imdb_id),
                &[("external_source", "imdb_id")],
            )
            .await?
        {
            Some(found) => found,
            None => return Ok(None),
        };
        let movie = found
            .movie_results
            .first()
            .map(|r| (r.id.to_string(), MediaType::Movie));
        let series = found
            .tv_results
            .first()
            .map(|r| (r.id.to_string(), MediaType::Series));
        Ok(match media_type {
            MediaType::Movie => movie.or(series),
            MediaType::Series => series.or(movie),
        })
    }

    async fn details(
        &self,
        tmdb_id: &str,
        media_type: MediaType,
    ) -> Result<Option<ResolvedMetadata>, MetadataError> {
        let path = match media_type {
            MediaType::Movie => format!("/movie/{}", tmdb_id),
            MediaType::Series => format!("/tv/{}", tmdb_id),
        };
        let details: DetailsResponse = match self.get(&path, &[]).await? {
            Some(d) => d,
            None => return Ok(None),
        };
        let (title, date) = match media_type {
            MediaType::Movie => (details.title, details.release_date),
            MediaType::Series => (details.name, details.first_air_date),
        };
        let title = match title.filter(|t| !t.trim().is_empty()) {
            Some(t) => t,
            None => {
                warn!(tmdb_id, "TMDB details carry no title.");
                return Ok(None);
            }
        };
        let year = date
            .map(|d| d.chars().take(4).collect::<String>())
            .unwrap_or_default();
        Ok(Some(ResolvedMetadata {
            title,
            year,
            media_type,
        }))
    }
}

#[async_trait]
impl MetadataResolver for TmdbMetadataResolver {
    #[instrument(skip(self), fields(media_id = %id))]
    async fn resolve(
        &self,
        id: &MediaId,
        media_type: MediaType,
    ) -> Result<Option<ResolvedMetadata>, MetadataError> {
        let (tmdb_id, media_type) = match id {
            MediaId::Imdb(imdb_id) => match self.find_by_imdb(imdb_id, media_type).await? {
                Some(found) => found,
                None => {
                    debug!("TMDB does not know this IMDb id.");
                    return Ok(None);
                }
            },
            MediaId::Tmdb(tmdb_id) => (tmdb_id.clone(), media_type),
        };
        self.details(&tmdb_id, media_type).await
    }
}
