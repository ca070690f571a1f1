//! Teacher Model

use serde::{Deserialize, Serialize};

use super::course::ThumbnailUpload;

/// Teacher profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create / update teacher payload (sent as multipart form)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<ThumbnailUpload>,
}
