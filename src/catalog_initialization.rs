use anyhow::{Context, Result};
use streamscout_catalog_client::{
    CatalogClientSettings, HttpCatalogClient, TmdbMetadataResolver, TmdbSettings,
};
use streamscout_common::environment::{
    get_env_var, get_env_var_or,
    variables::{FRANCHISE_KEYWORDS, SOURCE_NAME},
};
use streamscout_matching::stream_normalizer::DEFAULT_SOURCE_NAME;
use streamscout_matching::{KeywordTable, RelevanceClassifier, StreamNormalizer};
use streamscout_stream_api::StreamResolver;
use tracing::info;

pub type AppStreamResolver = StreamResolver<TmdbMetadataResolver, HttpCatalogClient>;

/// Build the [StreamResolver] and its collaborators from the environment.
pub fn initialize_stream_resolver() -> Result<AppStreamResolver> {
    let catalog = HttpCatalogClient::new(CatalogClientSettings::from_environment()?)
        .context("Could not build the catalog client.")?;
    let metadata = TmdbMetadataResolver::new(TmdbSettings::from_environment()?)
        .context("Could not build the TMDB client.")?;

    let keywords = match get_env_var(FRANCHISE_KEYWORDS) {
        Ok(list) if !list.is_empty() => {
            info!(keywords = %list, "Using configured franchise keywords.");
            KeywordTable::from_list(&list)
        }
        _ => KeywordTable::default(),
    };
    let normalizer = StreamNormalizer::new(&get_env_var_or(SOURCE_NAME, DEFAULT_SOURCE_NAME));

    Ok(StreamResolver::new(
        metadata,
        catalog,
        RelevanceClassifier::new(keywords),
        normalizer,
    ))
}
