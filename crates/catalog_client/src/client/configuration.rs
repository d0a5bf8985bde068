use anyhow::Result;
use std::time::Duration;
use streamscout_common::environment::{
    get_env_var, get_env_var_or, get_parsed_env_var,
    variables::{CATALOG_BASE_URL, CATALOG_PRIMARY_KEY, HTTP_TIMEOUT_SECS},
};
use tracing::{info, warn};

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.inmoviebox.com/wefeed-mobile-bff";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings to configure an [crate::HttpCatalogClient].
#[derive(Debug, Clone)]
pub struct CatalogClientSettings {
    pub base_url: String,
    /// Base64-encoded signing key. Without one every request fails before it is sent.
    pub primary_key: Option<String>,
    pub timeout: Duration,
}

impl CatalogClientSettings {
    /// Create a [CatalogClientSettings] from the environment variables available to Streamscout.
    /// A missing primary key is not an error here; it is reported when a request is attempted.
    pub fn from_environment() -> Result<Self> {
        let base_url = get_env_var_or(CATALOG_BASE_URL, DEFAULT_CATALOG_BASE_URL);
        info!(catalog_base_url = %base_url, "Found catalog base URL.");
        let primary_key = match get_env_var(CATALOG_PRIMARY_KEY) {
            Ok(key) if !key.is_empty() => Some(key),
            _ => {
                warn!(
                    "{} is not set; catalog requests will fail.",
                    CATALOG_PRIMARY_KEY
                );
                None
            }
        };
        let timeout = get_parsed_env_var(HTTP_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?;
        Ok(CatalogClientSettings {
            base_url,
            primary_key,
            timeout: Duration::from_secs(timeout),
        })
    }
}

impl Default for CatalogClientSettings {
    fn default() -> Self {
        CatalogClientSettings {
            base_url: String::from(DEFAULT_CATALOG_BASE_URL),
            primary_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
