use serde::{Deserialize, Serialize};

use crate::protocol::media::StreamCandidate;

/// Query for `GET /stream`.
#[derive(Debug, Deserialize)]
pub struct StreamQuery {
    pub url: Option<String>,
    pub referer: Option<String>,
}

/// One resolved stream as handed to clients.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamEntry {
    /// Relative path through this server's `/stream` relay.
    pub url: String,
    pub original_url: String,
    pub referer: String,
}

impl From<&StreamCandidate> for StreamEntry {
    fn from(candidate: &StreamCandidate) -> Self {
        Self {
            url: format!(
                "/stream?url={}&referer={}",
                urlencoding::encode(&candidate.media_url),
                urlencoding::encode(&candidate.referer)
            ),
            original_url: candidate.media_url.clone(),
            referer: candidate.referer.clone(),
        }
    }
}

/// Body of `GET /movie/{id}` and `GET /tv/{id}/{season}/{episode}`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MediaResponse {
    pub tmdb_id: String,
    pub imdb_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
    #[serde(rename = "type")]
    pub kind: String,
    pub streams: Vec<StreamEntry>,
}

#[derive(Debug, Serialize)]
pub struct Usage {
    pub movie: &'static str,
    pub tv: &'static str,
    pub stream: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub usage: Usage,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            usage: Usage {
                movie: "GET /movie/:tmdb_id",
                tv: "GET /tv/:tmdb_id/:season/:episode",
                stream: "GET /stream?url=<stream_url>&referer=<referer>",
            },
        }
    }
}
