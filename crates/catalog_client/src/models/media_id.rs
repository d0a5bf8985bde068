use std::fmt::{Display, Formatter};

/// An external identifier for a movie or series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaId {
    /// An IMDb id such as `tt1375666`.
    Imdb(String),
    /// A numeric TMDB id.
    Tmdb(String),
}

impl Display for MediaId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaId::Imdb(id) => write!(f, "{}", id),
            MediaId::Tmdb(id) => write!(f, "tmdb:{}", id),
        }
    }
}
