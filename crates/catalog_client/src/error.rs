use streamscout_common::signing::SigningError;
use thiserror::Error;

/// Errors raised by a [crate::CatalogClient].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No catalog primary key is configured.")]
    MissingPrimaryKey,

    #[error("Failed to sign the catalog request: {0}")]
    Signing(#[from] SigningError),

    #[error("Could not build the catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog responded with status {0}.")]
    Status(u16),
}

/// Errors raised by a [crate::MetadataResolver].
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Metadata request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Metadata provider responded with status {0}.")]
    Status(u16),
}
