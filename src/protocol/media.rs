use std::fmt;

use crate::common::types::{ImdbId, TmdbId};

/// Which TMDB collection a catalog id lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to the resolution pipeline. Episodes always carry season and episode numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRequest {
    Movie {
        tmdb_id: TmdbId,
    },
    Episode {
        tmdb_id: TmdbId,
        season: u32,
        episode: u32,
    },
}

impl MediaRequest {
    pub fn movie(tmdb_id: impl Into<String>) -> Self {
        Self::Movie {
            tmdb_id: TmdbId(tmdb_id.into()),
        }
    }

    pub fn episode(tmdb_id: impl Into<String>, season: u32, episode: u32) -> Self {
        Self::Episode {
            tmdb_id: TmdbId(tmdb_id.into()),
            season,
            episode,
        }
    }

    pub fn tmdb_id(&self) -> &TmdbId {
        match self {
            Self::Movie { tmdb_id } | Self::Episode { tmdb_id, .. } => tmdb_id,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Movie { .. } => MediaKind::Movie,
            Self::Episode { .. } => MediaKind::Tv,
        }
    }

    /// Path below the embed base URL: `movie/{id}` or `tv/{id}/{season}-{episode}`.
    pub fn embed_path(&self, imdb_id: &ImdbId) -> String {
        match self {
            Self::Movie { .. } => format!("movie/{}", imdb_id),
            Self::Episode {
                season, episode, ..
            } => format!("tv/{}/{}-{}", imdb_id, season, episode),
        }
    }
}

/// Origin (`scheme://host[:port]`) that serves the rcp/prorcp redirect pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDomain {
    pub scheme: String,
    pub host: String,
}

impl BaseDomain {
    /// Accepts absolute URLs and protocol-relative ones (`//host/path`, read as https).
    pub fn from_url(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let absolute = match raw.strip_prefix("//") {
            Some(rest) => format!("https://{}", rest),
            None => raw.to_string(),
        };
        let url = reqwest::Url::parse(&absolute).ok()?;
        let host = url.host_str().filter(|h| !h.is_empty())?;
        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        Some(Self {
            scheme: url.scheme().to_string(),
            host,
        })
    }

    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.origin(), path.trim_start_matches('/'))
    }
}

impl fmt::Display for BaseDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

/// A directly fetchable media URL plus the referer its host insists on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamCandidate {
    pub media_url: String,
    pub referer: String,
}

/// Lenient integer parse for path segments: leading digits win, the rest is ignored
/// (`"3"` → 3, `"03x"` → 3, `"x3"` → none).
pub fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}
