//! YouTube Data API v3 (REST, no SDK dependency)

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Metadata of one video, already flattened for the form
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    /// Seconds
    pub duration: u64,
    pub thumbnail: Option<String>,
    pub channel_title: String,
}

#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Carries no URL, the query holds the API key
    #[error("YouTube request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("YouTube responded with {status}: {body}")]
    Status { status: u16, body: String },
}

/// Source of video metadata; the proxy route only sees this trait
#[async_trait]
pub trait VideoMetadataSource: Send + Sync {
    /// `Ok(None)` when the code matches no video
    async fn lookup(&self, code: &str) -> Result<Option<VideoMetadata>, YoutubeError>;
}

// ── Response model ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    snippet: Snippet,
    #[serde(default)]
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

impl From<VideoItem> for VideoMetadata {
    fn from(item: VideoItem) -> Self {
        let Snippet {
            title,
            description,
            channel_title,
            thumbnails,
        } = item.snippet;
        Self {
            title,
            description,
            duration: item
                .content_details
                .map(|d| shared::youtube::parse_iso8601_duration(&d.duration))
                .unwrap_or(0),
            thumbnail: thumbnails.high.or(thumbnails.default).map(|t| t.url),
            channel_title,
        }
    }
}

fn first_video(response: VideoListResponse) -> Option<VideoMetadata> {
    response.items.into_iter().next().map(VideoMetadata::from)
}

// ── Client ──────────────────────────────────────────────────────────

/// `GET {base}/videos?id=&key=&part=snippet,contentDetails`
pub struct YoutubeDataApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YoutubeDataApi {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl VideoMetadataSource for YoutubeDataApi {
    async fn lookup(&self, code: &str) -> Result<Option<VideoMetadata>, YoutubeError> {
        let resp = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("id", code),
                ("key", self.api_key.as_str()),
                ("part", "snippet,contentDetails"),
            ])
            .send()
            .await
            .map_err(|e| YoutubeError::Request(e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(YoutubeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let list: VideoListResponse = resp
            .json()
            .await
            .map_err(|e| YoutubeError::Request(e.without_url()))?;
        Ok(first_video(list))
    }
}
