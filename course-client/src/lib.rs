//! Course Client - HTTP client for the course administration API
//!
//! - [`AdminApi`]: typed endpoints (courses, modules, videos, badges, help
//!   content, dashboard) with client-side form validation
//! - [`ReorderService`]: drag-and-drop reordering persisted through the bulk
//!   reorder endpoints, one in-flight reorder per course
//! - [`InvalidationBus`] / [`QueryCache`]: stale-key signals emitted after
//!   every write

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod reorder;
pub mod validation;

pub use api::{AdminApi, Mutation};
pub use cache::{Invalidation, InvalidationBus, InvalidationCause, QueryCache};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, MultipartForm, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http::OneshotHttpClient;
pub use reorder::{DragOutcome, ReorderService};

// Re-export shared types for convenience
pub use shared::{QueryKey, ReorderOutcome, SortableKey};
