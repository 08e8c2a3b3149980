#![forbid(unsafe_code)]

//! Flat-list reorder engine.
//!
//! A list widget reorders its items with [`reorder`](crate::array::reorder),
//! then hands the before/after snapshots to [`calculate_order_updates`] to get
//! the minimal set of position writes a persistence layer must apply.
//!
//! # Diff semantics
//!
//! Two modes exist:
//!
//! - [`OrderUpdateMode::Index`] (default): every item whose slot changed gets
//!   `new_position` equal to its index in the new snapshot.
//! - [`OrderUpdateMode::LegacySortedPositions`]: the stored `position` values of
//!   the changed items are sorted ascending and handed back out in new-snapshot
//!   order. Older callers that persisted sparse positions depend on this; the
//!   result is not always equal to the new index.
//!
//! In both modes an item counts as "changed" when the old snapshot has a
//! different id (or nothing) at the same index.

use rustc_hash::FxHashSet;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry in a reorderable list.
///
/// `position` is caller-maintained metadata; during a move the slice index is
/// authoritative. `data` is never read by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "D: Deserialize<'de> + Default"))
)]
pub struct Item<D = ()> {
    pub id: String,
    pub position: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: D,
}

impl Item<()> {
    /// Create an item without a payload.
    #[must_use]
    pub fn new(id: impl Into<String>, position: i64) -> Self {
        Self::with_data(id, position, ())
    }
}

impl<D> Item<D> {
    /// Create an item carrying an application payload.
    #[must_use]
    pub fn with_data(id: impl Into<String>, position: i64, data: D) -> Self {
        Self {
            id: id.into(),
            position,
            data,
        }
    }
}

/// A position write produced by the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderUpdate {
    pub id: String,
    pub new_position: i64,
    /// `true` if the item existed in the old snapshot (it was moved), `false`
    /// if it is new to this list (it was inserted).
    pub moved: bool,
}

/// Which diff semantics [`calculate_order_updates_with`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrderUpdateMode {
    /// `new_position` is the item's index in the new snapshot.
    #[default]
    Index,
    /// Reassign the changed items' stored positions, sorted ascending.
    LegacySortedPositions,
}

/// Position updates for every item whose slot changed, using index semantics.
#[must_use]
pub fn calculate_order_updates<D>(
    old_items: &[Item<D>],
    new_items: &[Item<D>],
) -> Vec<OrderUpdate> {
    calculate_order_updates_with(OrderUpdateMode::Index, old_items, new_items)
}

/// Position updates for every item whose slot changed.
///
/// Updates are returned in new-snapshot order.
#[must_use]
pub fn calculate_order_updates_with<D>(
    mode: OrderUpdateMode,
    old_items: &[Item<D>],
    new_items: &[Item<D>],
) -> Vec<OrderUpdate> {
    let previous: FxHashSet<&str> = old_items.iter().map(|item| item.id.as_str()).collect();
    let changed: Vec<(usize, &Item<D>)> = new_items
        .iter()
        .enumerate()
        .filter(|(index, item)| old_items.get(*index).is_none_or(|old| old.id != item.id))
        .collect();

    let positions: Vec<i64> = match mode {
        OrderUpdateMode::Index => changed
            .iter()
            .map(|(index, _)| i64::try_from(*index).unwrap_or(i64::MAX))
            .collect(),
        OrderUpdateMode::LegacySortedPositions => {
            let mut stale: Vec<i64> = changed.iter().map(|(_, item)| item.position).collect();
            stale.sort_unstable();
            stale
        }
    };

    changed
        .into_iter()
        .zip(positions)
        .map(|((_, item), new_position)| OrderUpdate {
            id: item.id.clone(),
            new_position,
            moved: previous.contains(item.id.as_str()),
        })
        .collect()
}

/// Rewrite each item's `position` to its index.
///
/// Convenience for callers that keep `position` dense after applying updates.
pub fn normalize_positions<D>(items: &mut [Item<D>]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.position = i64::try_from(index).unwrap_or(i64::MAX);
    }
}
