use serde::Serialize;
use streamscout_matching::StreamDescriptor;

/// Body of `/stream/{type}/{id}.json`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StreamResponse {
    pub streams: Vec<StremioStream>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StremioStream {
    pub name: String,
    pub title: String,
    pub url: String,
    pub behavior_hints: BehaviorHints,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorHints {
    pub not_web_ready: bool,
}

impl From<StreamDescriptor> for StremioStream {
    fn from(descriptor: StreamDescriptor) -> Self {
        StremioStream {
            name: descriptor.display_name,
            title: descriptor.title,
            url: descriptor.url,
            behavior_hints: BehaviorHints {
                not_web_ready: descriptor.not_web_ready,
            },
        }
    }
}

impl From<Vec<StreamDescriptor>> for StreamResponse {
    fn from(descriptors: Vec<StreamDescriptor>) -> Self {
        StreamResponse {
            streams: descriptors.into_iter().map(StremioStream::from).collect(),
        }
    }
}
