//! The stream resolution pipeline: canonical title, catalog search, relevance, ranking, stream
//! lookups and normalization.

use futures::future::join_all;
use streamscout_catalog_client::{CatalogClient, MediaId, MetadataResolver};
use streamscout_matching::{
    rank_candidates, CanonicalQuery, MediaType, RelevanceClassifier, ScoredCandidate,
    StreamDescriptor, StreamNormalizer,
};
use tracing::{debug, info, instrument, warn};

/// Resolves stream requests against a metadata provider and a catalog.
pub struct StreamResolver<M: MetadataResolver, C: CatalogClient> {
    metadata: M,
    catalog: C,
    classifier: RelevanceClassifier,
    normalizer: StreamNormalizer,
}

impl<M: MetadataResolver, C: CatalogClient> StreamResolver<M, C> {
    pub fn new(
        metadata: M,
        catalog: C,
        classifier: RelevanceClassifier,
        normalizer: StreamNormalizer,
    ) -> Self {
        StreamResolver {
            metadata,
            catalog,
            classifier,
            normalizer,
        }
    }

    /// Find the streams for a work. Never fails; every upstream problem is logged and yields
    /// fewer (or no) streams.
    #[instrument(skip(self), fields(media_id = %id))]
    pub async fn resolve_streams(
        &self,
        id: &MediaId,
        media_type: MediaType,
        season: Option<u32>,
        episode: Option<u32>,
    ) -> Vec<StreamDescriptor> {
        let metadata = match self.metadata.resolve(id, media_type).await {
            Ok(Some(m)) => m,
            Ok(None) => {
                info!("No canonical title found.");
                return vec![];
            }
            Err(e) => {
                warn!("Metadata lookup failed: {}", e);
                return vec![];
            }
        };
        debug!(
            title = %metadata.title,
            year = %metadata.year,
            resolved_type = ?metadata.media_type,
            "Resolved canonical title."
        );

        let query = CanonicalQuery {
            title: metadata.title,
            year: metadata.year,
            media_type,
            season,
            episode,
        };
        self.resolve_query(&query).await
    }

    /// Everything after the canonical title is known.
    pub async fn resolve_query(&self, query: &CanonicalQuery) -> Vec<StreamDescriptor> {
        if query.title.trim().is_empty() {
            debug!("Empty canonical title; nothing to search for.");
            return vec![];
        }
        let episode = query.episode();
        if query.media_type == MediaType::Series && episode.is_none() {
            info!("Series request without season and episode; no lookups issued.");
            return vec![];
        }

        let candidates = match self.catalog.search(&query.title).await {
            Ok(c) => c,
            Err(e) => {
                warn!("Catalog search failed: {}", e);
                return vec![];
            }
        };
        debug!("Catalog search returned {} candidates.", candidates.len());

        let scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|record| self.classifier.score_candidate(&query.title, record))
            .collect();
        let ranked = rank_candidates(scored);
        info!("{} relevant candidates.", ranked.len());

        let lookups = ranked
            .iter()
            .map(|c| self.catalog.streams(&c.record.subject_id, episode));
        let results = join_all(lookups).await;

        ranked
            .iter()
            .zip(results)
            .flat_map(|(candidate, result)| {
                let streams = match result {
                    Ok(s) => s,
                    Err(e) => {
                        warn!(
                            subject_id = %candidate.record.subject_id,
                            "Stream lookup failed: {}", e
                        );
                        vec![]
                    }
                };
                self.normalizer.normalize_all(&streams, &candidate.record)
            })
            .collect()
    }
}
