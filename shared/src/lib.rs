//! Shared types for the course admin toolkit
//!
//! Wire models of the course administration API, the drag-and-drop reorder
//! engine, error types and small formatting helpers used by both the API
//! client and the admin proxy.

pub mod error;
pub mod models;
pub mod query;
pub mod reorder;
pub mod util;
pub mod youtube;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use query::QueryKey;
pub use reorder::{ReorderOutcome, SiblingList, SortableKey};
