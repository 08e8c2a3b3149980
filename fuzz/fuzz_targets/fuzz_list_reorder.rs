#![no_main]

use ftui_reorder::{Item, OrderUpdateMode, calculate_order_updates_with, move_item, reorder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<i16>, u8, u8, bool)| {
    let (positions, start, end, legacy) = input;
    let (start, end) = (usize::from(start), usize::from(end));

    let old: Vec<Item> = positions
        .iter()
        .take(256)
        .enumerate()
        .map(|(i, p)| Item::new(format!("i{i}"), i64::from(*p)))
        .collect();

    let new = reorder(&old, start, end);
    assert_eq!(new.len(), old.len(), "reorder changed length");

    let mut in_place = old.clone();
    let changed = move_item(&mut in_place, start, end);
    assert_eq!(in_place, new, "in-place and copying moves disagree");
    assert_eq!(changed, in_place != old, "change flag is wrong");

    let mode = if legacy {
        OrderUpdateMode::LegacySortedPositions
    } else {
        OrderUpdateMode::Index
    };
    let updates = calculate_order_updates_with(mode, &old, &new);
    for update in &updates {
        assert!(update.moved, "reorder never inserts");
        if mode == OrderUpdateMode::Index {
            let index = new
                .iter()
                .position(|item| item.id == update.id)
                .expect("update for unknown id");
            assert_eq!(update.new_position, index as i64);
        }
    }
    let stale = new
        .iter()
        .enumerate()
        .filter(|(i, item)| old[*i].id != item.id)
        .count();
    assert_eq!(updates.len(), stale, "diff missed or invented a change");
});
