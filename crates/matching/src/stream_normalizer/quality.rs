//! Quality label extraction from the many fields providers use for it.

use crate::models::lenient::truthy_text;
use crate::models::RawStream;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

pub const UNKNOWN_QUALITY: &str = "Unknown";

lazy_static! {
    static ref BARE_HEIGHT: Regex = Regex::new(r"^([0-9]{3,4})$").unwrap();
    static ref WIDTH_BY_HEIGHT: Regex = Regex::new(r"^[0-9]+x([0-9]{3,4})$").unwrap();
}

/// Every quality-like value of the stream, in priority order and without duplicates.
///
/// Labelled fields come first (`quality`, `definition`, `label`, `videoQuality`, `profile`),
/// then the resolutions, then `"{width}x{height}"` when both are known.
pub fn quality_candidates(stream: &RawStream) -> Vec<String> {
    let labelled = [
        &stream.quality,
        &stream.definition,
        &stream.label,
        &stream.video_quality,
        &stream.profile,
    ];

    labelled
        .into_iter()
        .filter_map(|field| field.as_ref().and_then(truthy_text))
        .chain(stream.resolution_list())
        .chain(stream.dimensions())
        .unique()
        .collect()
}

/// The first candidate that looks like a resolution (`p` or `x`), else the first candidate.
pub fn select_quality(candidates: &[String]) -> Option<&str> {
    candidates
        .iter()
        .find(|q| q.contains('p') || q.contains('x'))
        .or_else(|| candidates.first())
        .map(String::as_str)
}

/// Format a raw quality label for display.
///
/// `"720"` becomes `"720p"` and `"1920x1080"` becomes `"1080p"`. Labels already containing a
/// `p`, and anything unrecognized, are returned unchanged. Empty labels become `"Unknown"`.
pub fn format_quality(raw: &str) -> String {
    if raw.is_empty() {
        return String::from(UNKNOWN_QUALITY);
    }
    if raw.contains('p') {
        return String::from(raw);
    }
    if BARE_HEIGHT.is_match(raw) {
        return format!("{}p", raw);
    }
    if let Some(captures) = WIDTH_BY_HEIGHT.captures(raw) {
        return format!("{}p", &captures[1]);
    }
    String::from(raw)
}

/// Pick and format the display quality of a stream.
pub fn stream_quality(stream: &RawStream) -> String {
    let candidates = quality_candidates(stream);
    format_quality(select_quality(&candidates).unwrap_or(UNKNOWN_QUALITY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_quality_appends_p_to_bare_height() {
        assert_eq!("720p", format_quality("720"));
        assert_eq!("2160p", format_quality("2160"));
    }

    #[test]
    fn format_quality_converts_dimensions_to_height() {
        assert_eq!("1080p", format_quality("1920x1080"));
    }

    #[test]
    fn format_quality_keeps_unrecognized_labels() {
        assert_eq!("4k", format_quality("4k"));
        assert_eq!("HD", format_quality("HD"));
        assert_eq!("72", format_quality("72"));
        assert_eq!("1080p", format_quality("1080p"));
    }

    #[test]
    fn format_quality_returns_unknown_given_empty_label() {
        assert_eq!("Unknown", format_quality(""));
    }

    #[test]
    fn quality_candidates_orders_labelled_fields_before_resolutions() {
        // Arrange
        let stream: RawStream = serde_json::from_value(json!({
            "profile": "HD",
            "quality": "",
            "definition": "1080",
            "resolutions": "480, 1080",
            "width": 1920,
            "height": 1080
        }))
        .unwrap();

        // Act
        let actual = quality_candidates(&stream);

        // Assert
        assert_eq!(vec!["1080", "HD", "480", "1920x1080"], actual);
    }

    #[test]
    fn select_quality_prefers_resolution_like_candidates() {
        let candidates = vec![String::from("HD"), String::from("1280x720")];

        assert_eq!(Some("1280x720"), select_quality(&candidates));
    }

    #[test]
    fn select_quality_falls_back_to_first_candidate() {
        let candidates = vec![String::from("HD"), String::from("SD")];

        assert_eq!(Some("HD"), select_quality(&candidates));
    }

    #[test]
    fn stream_quality_returns_unknown_given_no_candidates() {
        let actual = stream_quality(&RawStream::default());

        assert_eq!("Unknown", actual);
    }

    #[test]
    fn stream_quality_uses_dimensions_over_bare_resolution() {
        let stream: RawStream = serde_json::from_value(json!({
            "resolutions": ["1080"],
            "width": 3840,
            "height": 2160
        }))
        .unwrap();

        assert_eq!("2160p", stream_quality(&stream));
    }
}
