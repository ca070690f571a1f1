//! Drag-and-drop reorder engine
//!
//! Siblings (modules of a course, videos of a module) live in a
//! [`SiblingList`], whose position is the only source of truth for `order`.
//! A gesture (active item dropped over another item) becomes a new in-memory
//! ordering plus the minimal set of `{id, order[, parent]}` entries whose
//! values changed, ready to be persisted by the bulk reorder endpoints.
//!
//! - [`SiblingList::move_item`]: same-parent reorder
//! - [`move_across`]: item leaves one parent and enters another
//! - [`reorder_modules`] / [`move_video`]: the same operations on a
//!   [`CourseDetails`](crate::models::CourseDetails) tree

mod course;
mod key;
mod list;
mod outcome;

pub use course::{VideoMove, move_video, reorder_modules};
pub use key::SortableKey;
pub use list::{SiblingList, move_across};
pub use outcome::{OrderChange, ParentedOrderChange, ReorderOutcome};

/// Item with an identity and a 1-based rank among its siblings
pub trait Sortable {
    fn id(&self) -> i64;
    fn order(&self) -> i32;
    fn set_order(&mut self, order: i32);
}

/// Sortable item that also records which parent it belongs to
pub trait Parented: Sortable {
    fn parent_id(&self) -> i64;
    fn set_parent_id(&mut self, parent_id: i64);
}
