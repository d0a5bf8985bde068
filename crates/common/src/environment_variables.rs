//! The list of environment variables used throughout the application.

// Catalog environment variables
pub const CATALOG_PRIMARY_KEY: &str = "STREAMSCOUT_CATALOG_PRIMARY_KEY";
pub const CATALOG_BASE_URL: &str = "STREAMSCOUT_CATALOG_BASE_URL";

// Metadata environment variables
pub const TMDB_API_KEY: &str = "STREAMSCOUT_TMDB_API_KEY";
pub const TMDB_BASE_URL: &str = "STREAMSCOUT_TMDB_BASE_URL";

// Matching environment variables
pub const FRANCHISE_KEYWORDS: &str = "STREAMSCOUT_FRANCHISE_KEYWORDS";
pub const SOURCE_NAME: &str = "STREAMSCOUT_SOURCE_NAME";

// Web API environment variables
pub const WEB_HOST: &str = "STREAMSCOUT_WEB_HOST";
pub const WEB_PORT: &str = "STREAMSCOUT_WEB_PORT";

// Miscellaneous
pub const HTTP_TIMEOUT_SECS: &str = "STREAMSCOUT_HTTP_TIMEOUT_SECS";
pub const LOG_FILTER: &str = "STREAMSCOUT_LOG_FILTER";
