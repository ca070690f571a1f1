use serde::{Deserialize, Serialize};

use crate::models::{ModuleOrderItem, VideoOrderItem};

/// New rank of one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChange {
    pub id: i64,
    pub order: i32,
}

/// New rank and parent of one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentedOrderChange {
    pub id: i64,
    pub order: i32,
    pub parent_id: i64,
}

/// Result of applying one gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome<C> {
    /// Self-drop, unknown item, or a move that leaves every order intact.
    /// Nothing was mutated and nothing needs persisting.
    Unchanged,
    /// The list was mutated; the entries are the ones to persist
    Moved(Vec<C>),
}

impl<C> ReorderOutcome<C> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    pub fn changes(&self) -> &[C] {
        match self {
            Self::Unchanged => &[],
            Self::Moved(changes) => changes,
        }
    }

    pub fn into_changes(self) -> Vec<C> {
        match self {
            Self::Unchanged => Vec::new(),
            Self::Moved(changes) => changes,
        }
    }

    pub fn map<D>(self, f: impl FnMut(C) -> D) -> ReorderOutcome<D> {
        match self {
            Self::Unchanged => ReorderOutcome::Unchanged,
            Self::Moved(changes) => ReorderOutcome::Moved(changes.into_iter().map(f).collect()),
        }
    }
}

impl From<OrderChange> for ModuleOrderItem {
    fn from(c: OrderChange) -> Self {
        Self {
            id: c.id,
            order: c.order,
        }
    }
}

impl From<ParentedOrderChange> for VideoOrderItem {
    fn from(c: ParentedOrderChange) -> Self {
        Self {
            id: c.id,
            order: c.order,
            module_id: c.parent_id,
        }
    }
}
