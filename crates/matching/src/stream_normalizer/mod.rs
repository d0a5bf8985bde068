//! Converts raw catalog streams into display-ready [StreamDescriptor]s.

pub mod language;
pub mod quality;

use crate::models::{CandidateRecord, RawStream, StreamDescriptor};
pub use language::detect_language;
pub use quality::{format_quality, quality_candidates, select_quality, stream_quality};

/// Label used in display names when none is configured.
pub const DEFAULT_SOURCE_NAME: &str = "Source";

/// Builds [StreamDescriptor]s, prefixing display names with a source label.
#[derive(Debug, Clone)]
pub struct StreamNormalizer {
    source_name: String,
}

impl StreamNormalizer {
    pub fn new(source_name: &str) -> Self {
        StreamNormalizer {
            source_name: String::from(source_name),
        }
    }

    /// Describe one raw stream of `candidate`.
    ///
    /// Never fails: missing quality falls back to `Unknown`, missing language is left out, and
    /// the URL is copied as-is even when empty.
    pub fn normalize(&self, stream: &RawStream, candidate: &CandidateRecord) -> StreamDescriptor {
        let quality = stream_quality(stream);
        let language = detect_language(&stream.audio_tracks, &candidate.title);

        let display_name = match language {
            Some(language) => format!("{} - {} | {}", self.source_name, quality, language),
            None => format!("{} - {}", self.source_name, quality),
        };

        let mut title = format!("{} - {}", candidate.title, quality);
        if !stream.audio_tracks.is_empty() {
            title.push_str(" (");
            title.push_str(&stream.audio_tracks.join(", "));
            title.push(')');
        }

        StreamDescriptor {
            display_name,
            title,
            url: stream.url.clone(),
            not_web_ready: false,
        }
    }

    /// Describe every stream of `candidate`, keeping their order.
    pub fn normalize_all(
        &self,
        streams: &[RawStream],
        candidate: &CandidateRecord,
    ) -> Vec<StreamDescriptor> {
        streams
            .iter()
            .map(|stream| self.normalize(stream, candidate))
            .collect()
    }
}

impl Default for StreamNormalizer {
    fn default() -> Self {
        StreamNormalizer::new(DEFAULT_SOURCE_NAME)
    }
}
