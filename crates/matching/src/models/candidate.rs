use crate::models::lenient;
use crate::models::RelevanceVerdict;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A search result returned by the catalog. It may or may not be the requested work.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub subject_id: String,
    #[serde(default, deserialize_with = "lenient::null_as_empty")]
    pub title: String,
    /// Every other field of the search result, kept untouched.
    #[serde(flatten)]
    pub raw_fields: Map<String, Value>,
}

impl CandidateRecord {
    pub fn new(subject_id: &str, title: &str) -> Self {
        CandidateRecord {
            subject_id: String::from(subject_id),
            title: String::from(title),
            raw_fields: Map::new(),
        }
    }
}

/// A [CandidateRecord] paired with the verdict computed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub record: CandidateRecord,
    pub verdict: RelevanceVerdict,
}
