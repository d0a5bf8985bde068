//! Request signing for the catalog API.
//!
//! Every catalog request carries two headers derived from the request itself and the current
//! time: `x-tr-signature`, an HMAC-MD5 over a canonical form of the request, and
//! `x-client-token`, a checksum of the timestamp.

use chrono::Utc;
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use thiserror::Error;
use url::Url;

type HmacMd5 = Hmac<Md5>;

/// `Accept` header value covered by the signature; requests must send exactly this.
pub const ACCEPT: &str = "application/json";
/// `Content-Type` header value covered by the signature; requests must send exactly this.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Errors raised while signing a catalog request.
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("The signing key is not valid base64: {0}")]
    InvalidKey(#[from] base64::DecodeError),

    #[error("The signing key has an unusable length.")]
    InvalidKeyLength,

    #[error("Could not parse the request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// The header values produced by [sign_request].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSignature {
    /// Value for the `x-tr-signature` header.
    pub tr_signature: String,
    /// Value for the `x-client-token` header.
    pub client_token: String,
}

/// Sign a request using the current time.
///
/// `key_b64` is the base64-encoded HMAC key. `body` should be empty for requests without one.
pub fn sign_request(
    key_b64: &str,
    url: &str,
    method: &str,
    body: &str,
) -> Result<RequestSignature, SigningError> {
    sign_request_at(key_b64, url, method, body, Utc::now().timestamp_millis())
}

/// Sign a request as if it were sent at `timestamp` (milliseconds since the Unix epoch).
pub fn sign_request_at(
    key_b64: &str,
    url: &str,
    method: &str,
    body: &str,
    timestamp: i64,
) -> Result<RequestSignature, SigningError> {
    let key = base64::decode(key_b64)?;
    let canonical_url = canonical_url(url)?;
    let timestamp = timestamp.to_string();
    let (body_length, body_hash) = if body.is_empty() {
        (String::new(), String::new())
    } else {
        (body.len().to_string(), md5_hex(body.as_bytes()))
    };

    let canonical = [
        method.to_uppercase().as_str(),
        ACCEPT,
        CONTENT_TYPE,
        body_length.as_str(),
        timestamp.as_str(),
        body_hash.as_str(),
        canonical_url.as_str(),
    ]
    .join("\n");

    let mut mac = HmacMd5::new_from_slice(&key).map_err(|_| SigningError::InvalidKeyLength)?;
    mac.update(canonical.as_bytes());
    let signature = base64::encode(mac.finalize().into_bytes());

    let reversed: String = timestamp.chars().rev().collect();
    Ok(RequestSignature {
        tr_signature: format!("{}|2|{}", timestamp, signature),
        client_token: format!("{},{}", timestamp, md5_hex(reversed.as_bytes())),
    })
}

/// The path of the URL followed by its decoded query parameters, sorted by key.
fn canonical_url(raw: &str) -> Result<String, SigningError> {
    let url = Url::parse(raw)?;
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    // Stable, so repeated keys keep their original order.
    params.sort_by(|a, b| a.0.cmp(&b.0));

    if params.is_empty() {
        return Ok(url.path().to_string());
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    Ok(format!("{}?{}", url.path(), query))
}

fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", Md5::digest(data))
}
