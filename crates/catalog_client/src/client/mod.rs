mod configuration;

use crate::models::catalog_responses::{CatalogEnvelope, PlayInfoData, SearchData};
use crate::{CatalogClient, CatalogError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::json;
use streamscout_common::signing::{self, sign_request};
use streamscout_matching::{CandidateRecord, Episode, RawStream};
use tracing::{debug, instrument};
use url::Url;

pub use configuration::{CatalogClientSettings, DEFAULT_CATALOG_BASE_URL};
pub(crate) use configuration::DEFAULT_TIMEOUT_SECS;

const USER_AGENT: &str =
    "com.community.mbox.in/50020042 (Linux; Android 16; sdk_gphone64_x86_64; Cronet/133.0.6876.3)";
const CLIENT_INFO: &str = r#"{"package_name":"com.community.mbox.in"}"#;
const SEARCH_PAGE_SIZE: u32 = 10;

/// [CatalogClient] backed by the catalog's signed HTTP API.
#[derive(Clone)]
pub struct HttpCatalogClient {
    http_client: reqwest::Client,
    base_url: String,
    primary_key: Option<String>,
}

impl HttpCatalogClient {
    pub fn new(settings: CatalogClientSettings) -> Result<Self, CatalogError> {
        let CatalogClientSettings {
            base_url,
            primary_key,
            timeout,
        } = settings;
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(HttpCatalogClient {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            primary_key,
        })
    }

    /// Sign and send a request, then decode the `data` member of the response envelope.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<Option<T>, CatalogError> {
        let key = self
            .primary_key
            .as_deref()
            .ok_or(CatalogError::MissingPrimaryKey)?;
        let body = body.unwrap_or_default();
        let signature = sign_request(key, url.as_str(), method.as_str(), &body)?;

        let mut request = self
            .http_client
            .request(method, url)
            .header(ACCEPT, signing::ACCEPT)
            .header(CONTENT_TYPE, signing::CONTENT_TYPE)
            .header("x-client-info", CLIENT_INFO)
            .header("x-client-token", signature.client_token)
            .header("x-tr-signature", signature.tr_signature)
            .header("x-client-status", "0");
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }
        let envelope = response.json::<CatalogEnvelope<T>>().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    #[instrument(skip(self))]
    async fn search(&self, keyword: &str) -> Result<Vec<CandidateRecord>, CatalogError> {
        let url = Url::parse(&format!("{}/subject-api/search/v2", self.base_url))?;
        let body = json!({
            "page": 1,
            "perPage": SEARCH_PAGE_SIZE,
            "keyword": keyword,
        })
        .to_string();

        let data: Option<SearchData> = self.send(Method::POST, url, Some(body)).await?;
        let candidates = data.map(|d| d.into_candidates()).unwrap_or_default();
        debug!("Catalog returned {} candidates.", candidates.len());
        Ok(candidates)
    }

    #[instrument(skip(self))]
    async fn streams(
        &self,
        subject_id: &str,
        episode: Option<Episode>,
    ) -> Result<Vec<RawStream>, CatalogError> {
        let mut params = vec![("subjectId", subject_id.to_string())];
        if let Some(Episode { season, episode }) = episode {
            params.push(("se", season.to_string()));
            params.push(("ep", episode.to_string()));
        }
        let url = Url::parse_with_params(
            &format!("{}/subject-api/play-info", self.base_url),
            &params,
        )?;

        let data: Option<PlayInfoData> = self.send(Method::GET, url, None).await?;
        let streams = data.map(|d| d.into_streams()).unwrap_or_default();
        debug!("Catalog returned {} streams.", streams.len());
        Ok(streams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::time::Duration;

    // "secret-key"
    const KEY: &str = "c2VjcmV0LWtleQ==";

    fn client_for(base_url: &str, primary_key: Option<&str>) -> HttpCatalogClient {
        HttpCatalogClient::new(CatalogClientSettings {
            base_url: String::from(base_url),
            primary_key: primary_key.map(String::from),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[actix_rt::test]
    async fn search_posts_signed_keyword_and_flattens_subjects() {
        // Arrange
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/subject-api/search/v2")
            .match_header("x-tr-signature", Matcher::Regex(r"^[0-9]+\|2\|.+$".into()))
            .match_header("x-client-token", Matcher::Regex(r"^[0-9]+,[0-9a-f]{32}$".into()))
            .match_header("x-client-status", "0")
            .match_body(Matcher::PartialJsonString(
                r#"{"page":1,"perPage":10,"keyword":"Inception"}"#.into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"code":0,"data":{"results":[
                    {"subjects":[{"subjectId":"1","title":"Inception"}]},
                    {"subjects":[{"subjectId":"2","title":"Inception 2"}]}
                ]}}"#,
            )
            .create_async()
            .await;
        let client = client_for(&server.url(), Some(KEY));

        // Act
        let actual = client.search("Inception").await.unwrap();

        // Assert
        mock.assert_async().await;
        let titles: Vec<&str> = actual.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(vec!["Inception", "Inception 2"], titles);
    }

    #[actix_rt::test]
    async fn streams_requests_season_and_episode() {
        // Arrange
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/subject-api/play-info")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("subjectId".into(), "42".into()),
                Matcher::UrlEncoded("se".into(), "1".into()),
                Matcher::UrlEncoded("ep".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"data":{"playInfo":{"streams":[{"url":"https://cdn/a.mp4","resolutions":"1080"}]}}}"#,
            )
            .create_async()
            .await;
        let client = client_for(&server.url(), Some(KEY));

        // Act
        let actual = client
            .streams(
                "42",
                Some(Episode {
                    season: 1,
                    episode: 2,
                }),
            )
            .await
            .unwrap();

        // Assert
        mock.assert_async().await;
        assert_eq!(1, actual.len());
        assert_eq!("https://cdn/a.mp4", actual[0].url);
    }

    #[actix_rt::test]
    async fn streams_sends_only_subject_id_for_movies() {
        // Arrange
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/subject-api/play-info")
            .match_query(Matcher::Exact("subjectId=42".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":{}}"#)
            .create_async()
            .await;
        let client = client_for(&server.url(), Some(KEY));

        // Act
        let actual = client.streams("42", None).await.unwrap();

        // Assert
        mock.assert_async().await;
        assert!(actual.is_empty());
    }

    #[actix_rt::test]
    async fn search_returns_status_error_given_server_error() {
        // Arrange
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/subject-api/search/v2")
            .with_status(503)
            .create_async()
            .await;
        let client = client_for(&server.url(), Some(KEY));

        // Act
        let actual = client.search("Inception").await;

        // Assert
        assert!(matches!(actual, Err(CatalogError::Status(503))));
    }

    #[actix_rt::test]
    async fn search_fails_without_primary_key() {
        let client = client_for("http://127.0.0.1:1", None);

        let actual = client.search("Inception").await;

        assert!(matches!(actual, Err(CatalogError::MissingPrimaryKey)));
    }
}
