use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

/// The kind of work being requested.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
}

/// A single episode of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Episode {
    pub season: u32,
    pub episode: u32,
}

/// The authoritative description of what was requested, resolved from the metadata provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalQuery {
    pub title: String,
    /// Four digit year, or empty when the provider had no date.
    pub year: String,
    pub media_type: MediaType,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

impl CanonicalQuery {
    /// The requested episode, when both a season and an episode number were supplied.
    pub fn episode(&self) -> Option<Episode> {
        match (self.season, self.episode) {
            (Some(season), Some(episode)) => Some(Episode { season, episode }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn media_type_parses_from_lowercase_name() {
        assert_eq!(MediaType::Series, MediaType::from_str("series").unwrap());
        assert_eq!(MediaType::Movie, MediaType::from_str("movie").unwrap());
        assert!(MediaType::from_str("channel").is_err());
    }

    #[test]
    fn episode_returns_none_given_missing_episode_number() {
        // Arrange
        let query = CanonicalQuery {
            title: String::from("Dark"),
            year: String::from("2017"),
            media_type: MediaType::Series,
            season: Some(1),
            episode: None,
        };

        // Act
        let actual = query.episode();

        // Assert
        assert!(actual.is_none());
    }
}
