//! Course Model

use serde::{Deserialize, Serialize};

use super::module::Module;
use crate::reorder::SiblingList;

/// Course entity (as returned by `GET /courses/{id}` without modules)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// true = enabled for students
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Row of the course listing (`GET /courses`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseListItem {
    #[serde(flatten)]
    pub course: Course,
    /// Distinct students that opened the course
    #[serde(rename = "uniqueAccess", default)]
    pub unique_access: i64,
}

/// Course with its ordered module tree
///
/// Modules (and the videos inside each module) are held in [`SiblingList`]s,
/// so their `order` is always dense `1..N` after deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub modules: SiblingList<Module>,
}

impl CourseDetails {
    pub fn module(&self, module_id: i64) -> Option<&Module> {
        self.modules.get(module_id)
    }

    /// Module that currently holds the given video
    pub fn module_of_video(&self, video_id: i64) -> Option<i64> {
        self.modules
            .iter()
            .find(|m| m.videos.contains(video_id))
            .map(|m| m.id)
    }

    pub fn video_count(&self) -> usize {
        self.modules.iter().map(|m| m.videos.len()).sum()
    }
}

/// Publication state accepted by `POST /courses/{id}/update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Draft,
    #[serde(rename = "inprogress")]
    InProgress,
    Complete,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "inprogress",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image attached to a multipart course form
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Create course payload (sent as multipart form)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseCreate {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<ThumbnailUpload>,
}

/// Update course payload (sent as multipart form)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<ThumbnailUpload>,
}
