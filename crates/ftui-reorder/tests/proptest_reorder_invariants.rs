//! Property-based invariant tests for array reorder and the list diff.
//!
//! 1. `reorder` is a permutation of its input
//! 2. `reorder` leaves the input untouched and round-trips in range
//! 3. Out-of-range `start` is a no-op; oversized `end` appends
//! 4. Index-mode updates, applied to the new snapshot, make positions dense
//! 5. Items whose slot did not change never appear in the diff
//! 6. Both diff modes select the same items

use ftui_reorder::list::{
    Item, OrderUpdateMode, calculate_order_updates, calculate_order_updates_with,
};
use ftui_reorder::reorder;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn ids_strategy() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(any::<u16>(), 0..40)
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    (1usize..30, prop::collection::vec(0i64..1000, 30)).prop_map(|(len, positions)| {
        (0..len)
            .map(|i| Item::new(format!("item{i}"), positions[i]))
            .collect()
    })
}

// ═══════════════════════════════════════════════════════════════════════
// 1-3. Array reorder
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reorder_is_permutation(items in ids_strategy(), start in 0usize..50, end in 0usize..50) {
        let moved = reorder(&items, start, end);
        prop_assert_eq!(moved.len(), items.len());
        let mut a = items.clone();
        let mut b = moved;
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn reorder_round_trips(items in ids_strategy(), start in 0usize..40, end in 0usize..40) {
        prop_assume!(start < items.len() && end < items.len());
        let snapshot = items.clone();
        let moved = reorder(&items, start, end);
        prop_assert_eq!(&items, &snapshot);
        prop_assert_eq!(moved[end], items[start]);
        prop_assert_eq!(reorder(&moved, end, start), items);
    }

    #[test]
    fn reorder_clamps(items in ids_strategy(), start in 0usize..50, extra in 0usize..50) {
        if start >= items.len() {
            prop_assert_eq!(reorder(&items, start, 0), items);
        } else {
            let moved = reorder(&items, start, items.len() + extra);
            prop_assert_eq!(moved.last(), items.get(start));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4-6. List diff
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn index_updates_make_positions_dense(
        old in items_strategy(),
        start in 0usize..30,
        end in 0usize..30,
    ) {
        let mut new = reorder(&old, start, end);
        let updates = calculate_order_updates(&old, &new);
        for update in &updates {
            prop_assert!(update.moved);
            let item = new.iter_mut().find(|item| item.id == update.id).unwrap();
            item.position = update.new_position;
        }
        for (index, item) in new.iter().enumerate() {
            if old[index].id != item.id {
                prop_assert_eq!(item.position, index as i64);
            }
        }
    }

    #[test]
    fn unchanged_slots_are_not_updated(
        old in items_strategy(),
        start in 0usize..30,
        end in 0usize..30,
    ) {
        let new = reorder(&old, start, end);
        let updates = calculate_order_updates(&old, &new);
        for (index, item) in new.iter().enumerate() {
            let listed = updates.iter().any(|update| update.id == item.id);
            prop_assert_eq!(listed, old[index].id != item.id);
        }
    }

    #[test]
    fn modes_select_the_same_items(
        old in items_strategy(),
        start in 0usize..30,
        end in 0usize..30,
    ) {
        let new = reorder(&old, start, end);
        let index = calculate_order_updates_with(OrderUpdateMode::Index, &old, &new);
        let legacy =
            calculate_order_updates_with(OrderUpdateMode::LegacySortedPositions, &old, &new);
        let index_ids: Vec<&str> = index.iter().map(|update| update.id.as_str()).collect();
        let legacy_ids: Vec<&str> = legacy.iter().map(|update| update.id.as_str()).collect();
        prop_assert_eq!(index_ids, legacy_ids);
        prop_assert!(
            legacy
                .windows(2)
                .all(|pair| pair[0].new_position <= pair[1].new_position)
        );
    }
}
