use crate::streamscout_api_error::StreamApiError;
use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest};
use futures_util::future::{err, ok, Ready};
use std::str::FromStr;
use streamscout_catalog_client::MediaId;
use streamscout_matching::MediaType;
use tracing::error;

/// The stream request described by the path of `/stream/{type}/{id}.json`.
pub struct StreamRequest {
    pub media_type: MediaType,
    /// The raw id segment, as sent by the client.
    pub raw_id: String,
    /// `None` when the id is not in a recognized form.
    pub media_id: Option<MediaId>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

struct ParsedId {
    media_id: MediaId,
    season: Option<u32>,
    episode: Option<u32>,
}

/// Parse `tt123`, `tt123:S:E`, `tmdb:123` or `tmdb:123:S:E`. Season and episode numbers that are
/// not numbers are dropped.
fn parse_media_id(raw: &str) -> Option<ParsedId> {
    let mut parts = raw.split(':');
    let head = parts.next()?;
    let media_id = if head == "tmdb" {
        match parts.next() {
            Some(id) if !id.is_empty() => MediaId::Tmdb(String::from(id)),
            _ => return None,
        }
    } else if head.len() > 2 && head.starts_with("tt") {
        MediaId::Imdb(String::from(head))
    } else {
        return None;
    };

    let season = parts.next().and_then(|s| s.parse::<u32>().ok());
    let episode = parts.next().and_then(|e| e.parse::<u32>().ok());
    Some(ParsedId {
        media_id,
        season,
        episode,
    })
}

impl FromRequest for StreamRequest {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let (raw_type, raw_id) = match (req.match_info().get("type"), req.match_info().get("id")) {
            (Some(t), Some(i)) => (t, i),
            _ => {
                error!("The StreamRequest extractor was called on an endpoint without type and id.");
                return err(StreamApiError::internal_server_error().into());
            }
        };
        let media_type = match MediaType::from_str(raw_type) {
            Ok(m) => m,
            Err(_) => {
                return err(StreamApiError::bad_request(
                    format!("Unsupported media type \"{}\".", raw_type).as_str(),
                )
                .into())
            }
        };

        let parsed = parse_media_id(raw_id);
        ok(StreamRequest {
            media_type,
            raw_id: String::from(raw_id),
            season: parsed.as_ref().and_then(|p| p.season),
            episode: parsed.as_ref().and_then(|p| p.episode),
            media_id: parsed.map(|p| p.media_id),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_media_id_reads_plain_imdb_id() {
        // Act
        let actual = parse_media_id("tt1375666").unwrap();

        // Assert
        assert_eq!(MediaId::Imdb(String::from("tt1375666")), actual.media_id);
        assert_eq!(None, actual.season);
        assert_eq!(None, actual.episode);
    }

    #[test]
    fn parse_media_id_reads_imdb_episode() {
        // Act
        let actual = parse_media_id("tt0944947:3:9").unwrap();

        // Assert
        assert_eq!(MediaId::Imdb(String::from("tt0944947")), actual.media_id);
        assert_eq!(Some(3), actual.season);
        assert_eq!(Some(9), actual.episode);
    }

    #[test]
    fn parse_media_id_reads_tmdb_episode() {
        // Act
        let actual = parse_media_id("tmdb:1399:1:2").unwrap();

        // Assert
        assert_eq!(MediaId::Tmdb(String::from("1399")), actual.media_id);
        assert_eq!(Some(1), actual.season);
        assert_eq!(Some(2), actual.episode);
    }

    #[test]
    fn parse_media_id_drops_non_numeric_episode() {
        let actual = parse_media_id("tt0944947:one:two").unwrap();

        assert_eq!(None, actual.season);
        assert_eq!(None, actual.episode);
    }

    #[test]
    fn parse_media_id_returns_none_given_unknown_prefix() {
        assert!(parse_media_id("kitsu:1").is_none());
        assert!(parse_media_id("tt").is_none());
        assert!(parse_media_id("tmdb:").is_none());
        assert!(parse_media_id("").is_none());
    }
}
