//! Reorder payloads for the bulk reorder endpoints

use serde::{Deserialize, Serialize};

/// `{ id, order }` entry of a module reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOrderItem {
    pub id: i64,
    pub order: i32,
}

/// `{ id, order, module_id }` entry of a video reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoOrderItem {
    pub id: i64,
    pub order: i32,
    pub module_id: i64,
}

/// Body of `POST /courses/{id}/modules/reorder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderModulesRequest {
    pub modules: Vec<ModuleOrderItem>,
}

/// Body of `POST /courses/{id}/videos/reorder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderVideosRequest {
    pub videos: Vec<VideoOrderItem>,
}
