use crate::client::DEFAULT_TIMEOUT_SECS;
use anyhow::{Context, Result};
use std::time::Duration;
use streamscout_common::environment::{
    get_env_var, get_env_var_or, get_parsed_env_var,
    variables::{HTTP_TIMEOUT_SECS, TMDB_API_KEY, TMDB_BASE_URL},
};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Settings to configure a [crate::TmdbMetadataResolver].
#[derive(Debug, Clone)]
pub struct TmdbSettings {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl TmdbSettings {
    /// Create a [TmdbSettings] from the environment variables available to Streamscout. The API
    /// key is required.
    pub fn from_environment() -> Result<Self> {
        let api_key = get_env_var(TMDB_API_KEY)
            .with_context(|| "Could not retrieve the TMDB API key from the environment.")?;
        let timeout = get_parsed_env_var(HTTP_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?;
        Ok(TmdbSettings {
            base_url: get_env_var_or(TMDB_BASE_URL, DEFAULT_TMDB_BASE_URL),
            api_key,
            timeout: Duration::from_secs(timeout),
        })
    }
}
