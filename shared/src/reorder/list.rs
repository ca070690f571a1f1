use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::outcome::{OrderChange, ParentedOrderChange, ReorderOutcome};
use super::{Parented, Sortable};

/// Ordered siblings with dense `1..N` ranks
///
/// The vector position is authoritative. Every constructor and mutation
/// rewrites `order = position + 1`, so a stored `order` can never drift away
/// from the actual sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SiblingList<T> {
    items: Vec<T>,
}

impl<T> Default for SiblingList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Sortable> SiblingList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from server data: stable sort by the received `order`, then renumber
    pub fn from_items(mut items: Vec<T>) -> Self {
        items.sort_by_key(|item| item.order());
        let mut list = Self { items };
        list.renumber();
        list
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn ids(&self) -> Vec<i64> {
        self.items.iter().map(Sortable::id).collect()
    }

    pub fn orders(&self) -> Vec<i32> {
        self.items.iter().map(Sortable::order).collect()
    }

    /// Mutate one item in place. Its rank is restored afterwards.
    pub fn update(&mut self, id: i64, f: impl FnOnce(&mut T)) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        f(&mut self.items[idx]);
        self.items[idx].set_order(idx as i32 + 1);
        true
    }

    /// Add a newly created item at the end; returns the rank it was given
    pub fn append(&mut self, mut item: T) -> i32 {
        let order = self.items.len() as i32 + 1;
        item.set_order(order);
        self.items.push(item);
        order
    }

    /// Remove an item and close the gap it leaves
    pub fn remove(&mut self, id: i64) -> Option<T> {
        let idx = self.position(id)?;
        let item = self.items.remove(idx);
        self.renumber_from(idx);
        Some(item)
    }

    /// Same-parent move: take `active` out, then insert it at the index
    /// `over` occupies in the remaining list.
    ///
    /// Returns only the items whose rank changed. Self-drops, unknown ids and
    /// moves that change nothing leave the list untouched.
    pub fn move_item(&mut self, active: i64, over: i64) -> ReorderOutcome<OrderChange> {
        if active == over {
            return ReorderOutcome::Unchanged;
        }
        let (Some(from), Some(over_idx)) = (self.position(active), self.position(over)) else {
            return ReorderOutcome::Unchanged;
        };
        // Index of `over` once `active` has been taken out
        let to = if over_idx > from { over_idx - 1 } else { over_idx };
        if to == from {
            return ReorderOutcome::Unchanged;
        }

        let item = self.items.remove(from);
        self.items.insert(to, item);

        let (lo, hi) = (from.min(to), from.max(to));
        self.renumber();
        ReorderOutcome::Moved(
            self.items[lo..=hi]
                .iter()
                .map(|item| OrderChange {
                    id: item.id(),
                    order: item.order(),
                })
                .collect(),
        )
    }

    /// Ranks must be dense `1..N`; exposed for assertions
    pub fn is_dense(&self) -> bool {
        self.items
            .iter()
            .enumerate()
            .all(|(idx, item)| item.order() == idx as i32 + 1)
    }

    pub(crate) fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Two distinct items borrowed mutably at once
    pub(crate) fn pair_mut(&mut self, a: i64, b: i64) -> Option<(&mut T, &mut T)> {
        let ia = self.position(a)?;
        let ib = self.position(b)?;
        if ia == ib {
            return None;
        }
        if ia < ib {
            let (left, right) = self.items.split_at_mut(ib);
            Some((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.items.split_at_mut(ia);
            Some((&mut right[0], &mut left[ib]))
        }
    }

    fn take(&mut self, idx: usize) -> T {
        let item = self.items.remove(idx);
        self.renumber_from(idx);
        item
    }

    fn insert(&mut self, idx: usize, item: T) {
        self.items.insert(idx, item);
        self.renumber_from(idx);
    }

    fn renumber(&mut self) {
        self.renumber_from(0);
    }

    fn renumber_from(&mut self, start: usize) {
        for (idx, item) in self.items.iter_mut().enumerate().skip(start) {
            item.set_order(idx as i32 + 1);
        }
    }
}

/// Cross-parent move: `active` leaves `source` and is inserted into `target`
/// at the index `over` currently occupies, adopting `target_parent` as its
/// parent.
///
/// Both lists are renumbered. The returned entries are the moved item, the
/// `target` items pushed down, and the `source` items pulled up to close the
/// gap; each carries the parent it ends up in. If `active` is not in
/// `source` or `over` is not in `target`, neither list is touched.
pub fn move_across<T: Parented>(
    source: &mut SiblingList<T>,
    target: &mut SiblingList<T>,
    target_parent: i64,
    active: i64,
    over: i64,
) -> ReorderOutcome<ParentedOrderChange> {
    let (Some(from), Some(to)) = (source.position(active), target.position(over)) else {
        return ReorderOutcome::Unchanged;
    };

    let mut item = source.take(from);
    item.set_parent_id(target_parent);
    target.insert(to, item);

    let entry = |item: &T| ParentedOrderChange {
        id: item.id(),
        order: item.order(),
        parent_id: item.parent_id(),
    };
    let mut changes: Vec<ParentedOrderChange> = target.items[to..].iter().map(entry).collect();
    changes.extend(source.items[from..].iter().map(entry));
    ReorderOutcome::Moved(changes)
}

impl<T: Serialize> Serialize for SiblingList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for SiblingList<T>
where
    T: Sortable + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_items)
    }
}

impl<T: Sortable> FromIterator<T> for SiblingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a SiblingList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
