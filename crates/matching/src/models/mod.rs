//! Request-scoped value types passed between the matching stages.

mod candidate;
mod canonical_query;
pub(crate) mod lenient;
mod raw_stream;
mod relevance_verdict;
mod stream_descriptor;

pub use candidate::{CandidateRecord, ScoredCandidate};
pub use canonical_query::{CanonicalQuery, Episode, MediaType};
pub use raw_stream::{parse_resolutions, RawStream};
pub use relevance_verdict::{Confidence, RelevanceVerdict};
pub use stream_descriptor::StreamDescriptor;
