use crate::models::lenient::{self, is_truthy, to_text, truthy_text};
use serde::Deserialize;
use serde_json::Value;

/// An unprocessed playable source as returned by the catalog's play-info endpoint.
///
/// Providers disagree on field names and types, so every quality-ish field is kept as a raw
/// [Value] and interpreted later by the stream normalizer. Unknown fields are ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawStream {
    #[serde(default, deserialize_with = "lenient::null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub resolutions: Option<Value>,
    #[serde(default)]
    pub resolution: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub audio_tracks: Vec<String>,
    #[serde(default)]
    pub quality: Option<Value>,
    #[serde(default)]
    pub definition: Option<Value>,
    #[serde(default)]
    pub label: Option<Value>,
    #[serde(default)]
    pub video_quality: Option<Value>,
    #[serde(default)]
    pub profile: Option<Value>,
    #[serde(default)]
    pub width: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    /// Some providers nest `width`/`height` under `video` instead.
    #[serde(default)]
    pub video: Option<Value>,
}

impl RawStream {
    /// The resolutions advertised by this stream as a list.
    ///
    /// A `resolutions` array is used as-is and a `resolutions` string is split on commas. Without
    /// either, a singular `resolution` (string or array) is used. Otherwise the list is empty.
    pub fn resolution_list(&self) -> Vec<String> {
        match &self.resolutions {
            Some(Value::Array(items)) => items.iter().map(to_text).collect(),
            Some(Value::String(s)) => parse_resolutions(s),
            _ => match &self.resolution {
                Some(Value::Array(items)) => items.iter().map(to_text).collect(),
                Some(v) if is_truthy(v) => vec![to_text(v)],
                _ => vec![],
            },
        }
    }

    /// `"{width}x{height}"` when both dimensions are known, looking at the top-level fields first
    /// and at `video` second.
    pub fn dimensions(&self) -> Option<String> {
        let width = self.dimension(&self.width, "width")?;
        let height = self.dimension(&self.height, "height")?;
        Some(format!("{}x{}", width, height))
    }

    fn dimension(&self, top_level: &Option<Value>, key: &str) -> Option<String> {
        top_level
            .as_ref()
            .and_then(truthy_text)
            .or_else(|| self.video.as_ref()?.get(key).and_then(truthy_text))
    }
}

/// Split a comma-separated list of resolutions, trimming each entry and dropping empty ones.
pub fn parse_resolutions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
