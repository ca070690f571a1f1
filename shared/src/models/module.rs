//! Module Model

use serde::{Deserialize, Serialize};

use super::video::{PublishStatus, Video};
use crate::reorder::{SiblingList, Sortable};

/// Course module (章节), owns an ordered list of videos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: i64,
    #[serde(default)]
    pub course_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: PublishStatus,
    /// 1-based rank within the course
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub videos: SiblingList<Video>,
}

impl Sortable for Module {
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

/// Create module payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Update module payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleUpdate {
    pub name: String,
    #[serde(default)]
    pub description: String,
}
