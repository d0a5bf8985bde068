use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use streamscout_catalog_client::{
    CatalogClient, CatalogError, MediaId, MetadataError, MetadataResolver, ResolvedMetadata,
};
use streamscout_matching::{
    CandidateRecord, Episode, MediaType, RawStream, RelevanceClassifier, StreamNormalizer,
};
use streamscout_stream_api::StreamResolver;
use tokio::sync::RwLock;

/// Fake implementation of [MetadataResolver] that always answers with the same title.
pub struct FakeMetadataResolver {
    metadata: Option<ResolvedMetadata>,
    fails: bool,
}

impl FakeMetadataResolver {
    pub fn with_title(title: &str, year: &str, media_type: MediaType) -> Self {
        FakeMetadataResolver {
            metadata: Some(ResolvedMetadata {
                title: String::from(title),
                year: String::from(year),
                media_type,
            }),
            fails: false,
        }
    }

    pub fn not_found() -> Self {
        FakeMetadataResolver {
            metadata: None,
            fails: false,
        }
    }

    pub fn failing() -> Self {
        FakeMetadataResolver {
            metadata: None,
            fails: true,
        }
    }
}

#[async_trait]
impl MetadataResolver for FakeMetadataResolver {
    async fn resolve(
        &self,
        _id: &MediaId,
        _media_type: MediaType,
    ) -> Result<Option<ResolvedMetadata>, MetadataError> {
        if self.fails {
            return Err(MetadataError::Status(503));
        }
        Ok(self.metadata.clone())
    }
}

/// Fake implementation of [CatalogClient] that serves canned candidates and streams and
/// captures every stream lookup made against it.
#[derive(Clone)]
pub struct SpyCatalogClient {
    candidates: Vec<CandidateRecord>,
    streams: HashMap<String, Vec<RawStream>>,
    failing_subjects: Vec<String>,
    search_fails: bool,
    pub lookups: Arc<RwLock<Vec<(String, Option<Episode>)>>>,
}

impl SpyCatalogClient {
    pub fn new() -> Self {
        SpyCatalogClient {
            candidates: vec![],
            streams: HashMap::new(),
            failing_subjects: vec![],
            search_fails: false,
            lookups: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_candidate(mut self, subject_id: &str, title: &str, urls: &[&str]) -> Self {
        self.candidates.push(CandidateRecord::new(subject_id, title));
        self.streams.insert(
            String::from(subject_id),
            urls.iter().map(|url| raw_stream(url, "1080", &[])).collect(),
        );
        self
    }

    pub fn with_streams(mut self, subject_id: &str, streams: Vec<RawStream>) -> Self {
        self.streams.insert(String::from(subject_id), streams);
        self
    }

    pub fn with_failing_lookup(mut self, subject_id: &str) -> Self {
        self.failing_subjects.push(String::from(subject_id));
        self
    }

    pub fn with_failing_search(mut self) -> Self {
        self.search_fails = true;
        self
    }
}

#[async_trait]
impl CatalogClient for SpyCatalogClient {
    async fn search(&self, _keyword: &str) -> Result<Vec<CandidateRecord>, CatalogError> {
        if self.search_fails {
            return Err(CatalogError::Status(500));
        }
        Ok(self.candidates.clone())
    }

    async fn streams(
        &self,
        subject_id: &str,
        episode: Option<Episode>,
    ) -> Result<Vec<RawStream>, CatalogError> {
        let mut lookups = self.lookups.write().await;
        lookups.push((String::from(subject_id), episode));

        if self.failing_subjects.iter().any(|s| s == subject_id) {
            return Err(CatalogError::Status(502));
        }
        Ok(self.streams.get(subject_id).cloned().unwrap_or_default())
    }
}

pub fn raw_stream(url: &str, resolution: &str, audio_tracks: &[&str]) -> RawStream {
    RawStream {
        url: String::from(url),
        resolution: Some(json!(resolution)),
        audio_tracks: audio_tracks.iter().map(|t| String::from(*t)).collect(),
        ..RawStream::default()
    }
}

pub fn resolver(
    metadata: FakeMetadataResolver,
    catalog: SpyCatalogClient,
) -> StreamResolver<FakeMetadataResolver, SpyCatalogClient> {
    StreamResolver::new(
        metadata,
        catalog,
        RelevanceClassifier::default(),
        StreamNormalizer::default(),
    )
}
