use serde::Serialize;

/// A display-ready playable stream. Built once per raw stream and never modified afterwards.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescriptor {
    pub display_name: String,
    pub title: String,
    pub url: String,
    pub not_web_ready: bool,
}
