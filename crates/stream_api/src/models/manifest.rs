use serde::Serialize;

const ADDON_ID: &str = "community.streamscout.stream";
const ADDON_NAME: &str = "Streamscout";
const ADDON_DESCRIPTION: &str = "Finds catalog streams for movies and series by title.";

/// The addon manifest served at `/manifest.json`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddonManifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub resources: Vec<String>,
    pub types: Vec<String>,
    pub id_prefixes: Vec<String>,
    pub catalogs: Vec<serde_json::Value>,
}

impl Default for AddonManifest {
    fn default() -> Self {
        AddonManifest {
            id: String::from(ADDON_ID),
            version: String::from(env!("CARGO_PKG_VERSION")),
            name: String::from(ADDON_NAME),
            description: String::from(ADDON_DESCRIPTION),
            resources: vec![String::from("stream")],
            types: vec![String::from("movie"), String::from("series")],
            id_prefixes: vec![String::from("tt"), String::from("tmdb")],
            catalogs: vec![],
        }
    }
}
