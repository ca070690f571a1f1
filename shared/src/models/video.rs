//! Video Model

use serde::{Deserialize, Serialize};

use crate::reorder::{Parented, Sortable};

/// Draft / published flag shared by modules and videos
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Draft,
    Published,
}

/// Video entity
///
/// The backend mixes camelCase keys with the snake_case `time_in_seconds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// YouTube URL or bare video code
    pub url: String,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "time_in_seconds", default)]
    pub time_in_seconds: Option<u64>,
    #[serde(default)]
    pub course_id: i64,
    pub module_id: i64,
    /// 1-based rank within the module
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Sortable for Video {
    fn id(&self) -> i64 {
        self.id
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

impl Parented for Video {
    fn parent_id(&self) -> i64 {
        self.module_id
    }

    fn set_parent_id(&mut self, parent_id: i64) {
        self.module_id = parent_id;
    }
}

/// Create video payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}

/// Update video payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_seconds: Option<u64>,
}

/// Status-only update (`PUT …/videos/{id}` with `{status}`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VideoStatusUpdate {
    pub status: PublishStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_mixed_case_keys() {
        let json = r#"{
            "id": 7, "title": "Intro", "url": "https://youtu.be/dQw4w9WgXcQ",
            "status": "published", "time_in_seconds": 212,
            "courseId": 1, "moduleId": 3, "order": 2
        }"#;
        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(video.module_id, 3);
        assert_eq!(video.time_in_seconds, Some(212));
        assert_eq!(video.status, PublishStatus::Published);

        let out = serde_json::to_value(&video).unwrap();
        assert_eq!(out["moduleId"], 3);
        assert_eq!(out["time_in_seconds"], 212);
    }

    #[test]
    fn test_video_update_skips_unset() {
        let update = VideoUpdate {
            title: Some("New".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"title":"New"}"#);
    }
}
