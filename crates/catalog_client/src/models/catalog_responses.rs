//! Response bodies of the catalog API. Every level is optional; a missing level means "nothing".

use serde::Deserialize;
use serde_json::Value;
use streamscout_matching::{CandidateRecord, RawStream};
use tracing::debug;

#[derive(Deserialize, Debug)]
pub struct CatalogEnvelope<T> {
    /// Missing or `null` when the catalog has nothing to say.
    pub data: Option<T>,
}

#[derive(Deserialize, Debug)]
pub struct SearchData {
    #[serde(default)]
    pub results: Option<Vec<SearchResultGroup>>,
}

#[derive(Deserialize, Debug)]
pub struct SearchResultGroup {
    #[serde(default)]
    pub subjects: Option<Vec<Value>>,
}

impl SearchData {
    /// The subjects of every result group, in order. Subjects that cannot be read as a
    /// [CandidateRecord] (no `subjectId`, for one) are skipped.
    pub fn into_candidates(self) -> Vec<CandidateRecord> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .flat_map(|group| group.subjects.unwrap_or_default())
            .filter_map(|subject| match serde_json::from_value(subject) {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    debug!("Skipping unreadable search result: {}", e);
                    None
                }
            })
            .collect()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayInfoData {
    #[serde(default)]
    pub streams: Option<Vec<RawStream>>,
    #[serde(default)]
    pub play_info: Option<PlayInfo>,
}

#[derive(Deserialize, Debug)]
pub struct PlayInfo {
    #[serde(default)]
    pub streams: Option<Vec<RawStream>>,
}

impl PlayInfoData {
    /// `streams`, or `playInfo.streams` when the former is missing or empty.
    pub fn into_streams(self) -> Vec<RawStream> {
        match self.streams {
            Some(streams) if !streams.is_empty() => streams,
            _ => self
                .play_info
                .and_then(|p| p.streams)
                .unwrap_or_default(),
        }
    }
}
