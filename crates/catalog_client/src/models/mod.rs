//! Identifiers, resolved metadata and the wire formats of the catalog and TMDB APIs.

pub(crate) mod catalog_responses;
mod media_id;
mod resolved_metadata;
pub(crate) mod tmdb_responses;

pub use media_id::MediaId;
pub use resolved_metadata::ResolvedMetadata;
