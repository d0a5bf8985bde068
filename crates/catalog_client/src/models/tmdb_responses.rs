//! Response bodies of the TMDB API, reduced to the fields the resolver reads.

use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct FindResponse {
    #[serde(default)]
    pub movie_results: Vec<FindResult>,
    #[serde(default)]
    pub tv_results: Vec<FindResult>,
}

#[derive(Deserialize, Debug)]
pub struct FindResult {
    pub id: u64,
}

/// Movie and tv details share one shape; movies fill `title`/`release_date` and series fill
/// `name`/`first_air_date`.
#[derive(Deserialize, Debug, Default)]
pub struct DetailsResponse {
    pub title: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
}
