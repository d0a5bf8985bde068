//! Title matching and stream normalization.
//!
//! Decides which catalog search results are the same work as a canonical title, ranks them, and
//! turns their raw stream records into display-ready [StreamDescriptor]s. Everything in this crate
//! is a pure function of its inputs.

pub mod models;
pub mod ranker;
pub mod relevance;
pub mod similarity;
pub mod stream_normalizer;
pub mod title_normalizer;

pub use models::{
    CandidateRecord, CanonicalQuery, Confidence, Episode, MediaType, RawStream, RelevanceVerdict,
    ScoredCandidate, StreamDescriptor,
};
pub use ranker::rank_candidates;
pub use relevance::{KeywordTable, RelevanceClassifier};
pub use similarity::similarity;
pub use stream_normalizer::StreamNormalizer;
pub use title_normalizer::normalize_title;
