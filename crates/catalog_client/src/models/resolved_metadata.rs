use streamscout_matching::MediaType;

/// The canonical description of a work, as reported by the metadata provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMetadata {
    pub title: String,
    /// Four digit year, or empty.
    pub year: String,
    pub media_type: MediaType,
}
