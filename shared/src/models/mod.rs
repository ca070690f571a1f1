//! Data models
//!
//! Wire types of the course administration API. All IDs are `i64`.

pub mod badge;
pub mod course;
pub mod dashboard;
pub mod help;
pub mod module;
pub mod reorder;
pub mod teacher;
pub mod user;
pub mod video;

// Re-exports
pub use badge::*;
pub use course::*;
pub use dashboard::*;
pub use help::*;
pub use module::*;
pub use reorder::*;
pub use teacher::*;
pub use user::*;
pub use video::*;
