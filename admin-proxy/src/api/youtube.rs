//! YouTube metadata lookup for the video form

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::youtube::extract_video_code;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    /// Bare video code or any YouTube link
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoLookup {
    pub title: String,
    pub description: String,
    /// Seconds
    pub duration: u64,
    /// Resolved video code
    pub url: String,
    pub thumbnail: Option<String>,
    pub channel_title: String,
}

/// `GET /api/youtube?code=`
pub async fn lookup_video(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> AppResult<Json<VideoLookup>> {
    let code = query
        .code
        .as_deref()
        .and_then(extract_video_code)
        .ok_or_else(|| AppError::new(ErrorCode::VideoCodeMissing))?;

    let metadata = state
        .metadata
        .lookup(&code)
        .await
        .map_err(|e| {
            tracing::warn!(code = %code, error = %e, "YouTube lookup failed");
            AppError::upstream(e.to_string())
        })?
        .ok_or_else(|| {
            AppError::new(ErrorCode::VideoMetadataNotFound).with_detail("code", code.clone())
        })?;

    tracing::debug!(code = %code, title = %metadata.title, "YouTube video resolved");
    Ok(Json(VideoLookup {
        title: metadata.title,
        description: metadata.description,
        duration: metadata.duration,
        url: code,
        thumbnail: metadata.thumbnail,
        channel_title: metadata.channel_title,
    }))
}
