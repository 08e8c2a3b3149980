#![no_main]

use std::sync::Arc;

use arbitrary::Arbitrary;
use ftui_reorder::{
    BoardState, Card, Column, DragLocation, DropKind, DropResult, apply_drag_result,
    try_apply_drag_result, validate_board,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    columns: Vec<u8>,
    gestures: Vec<Gesture>,
}

#[derive(Debug, Arbitrary)]
enum Gesture {
    Card {
        from: u8,
        start: u8,
        to: u8,
        end: u8,
        honest: bool,
    },
    Column {
        start: u8,
        end: u8,
    },
    Cancel {
        column: bool,
    },
    // Column ids the board does not have, and missing ids.
    Stray {
        start: u8,
        end: u8,
        missing_source: bool,
    },
}

fn build(sizes: &[u8]) -> Arc<BoardState> {
    let mut next = 0usize;
    let mut columns = Vec::new();
    let mut cards = Vec::new();
    for (c, size) in sizes.iter().take(8).enumerate() {
        let size = usize::from(size % 12);
        let ids: Vec<String> = (next..next + size).map(|n| format!("c{n}")).collect();
        next += size;
        cards.extend(ids.iter().map(|id| Card::new(id.as_str(), id.as_str())));
        columns.push(Column::new(format!("k{c}"), "", ids));
    }
    BoardState::new(columns, cards).into_shared()
}

fn resolve(state: &BoardState, gesture: &Gesture) -> Option<DropResult> {
    let drop = match *gesture {
        Gesture::Card {
            from,
            start,
            to,
            end,
            honest,
        } => {
            let len = state.columns.len();
            if len == 0 {
                return None;
            }
            let from = &state.columns[usize::from(from) % len];
            let to = &state.columns[usize::from(to) % len];
            let start = usize::from(start);
            let draggable = match from.card_ids.get(start) {
                Some(id) if honest => id.to_string(),
                _ => "intruder".to_string(),
            };
            DropResult::card(
                draggable,
                DragLocation::in_column(from.id.clone(), start),
                DragLocation::in_column(to.id.clone(), usize::from(end)),
            )
        }
        Gesture::Column { start, end } => {
            let start = usize::from(start);
            let id = state
                .columns
                .get(start)
                .map(|column| column.id.to_string())
                .unwrap_or_default();
            DropResult::column(id, start, usize::from(end))
        }
        Gesture::Cancel { column } => {
            let kind = if column { DropKind::Column } else { DropKind::Card };
            DropResult::cancelled(kind, "c0", DragLocation::at(0))
        }
        Gesture::Stray {
            start,
            end,
            missing_source,
        } => {
            let source = if missing_source {
                DragLocation::at(usize::from(start))
            } else {
                DragLocation::in_column("nowhere", usize::from(start))
            };
            let destination = DragLocation::in_column("k0", usize::from(end));
            DropResult::card("c0", source, destination)
        }
    };
    Some(drop)
}

fn sorted_ids(state: &BoardState) -> Vec<String> {
    let mut ids: Vec<String> = state.card_ids().map(ToString::to_string).collect();
    ids.sort();
    ids
}

fuzz_target!(|input: Input| {
    let initial = build(&input.columns);
    let expected = sorted_ids(&initial);
    let mut state = Arc::clone(&initial);

    for gesture in input.gestures.iter().take(64) {
        let Some(drop) = resolve(&state, gesture) else {
            continue;
        };
        let next = apply_drag_result(&state, &drop);

        // Post-conditions that must always hold:
        assert!(Arc::ptr_eq(&state.cards, &next.cards), "card map replaced");
        assert_eq!(
            next.columns.len(),
            state.columns.len(),
            "column count changed"
        );
        assert_eq!(sorted_ids(&next), expected, "card ids lost or duplicated");
        assert!(validate_board(&next).is_ok(), "board invariants broken");
        if drop.is_cancelled() || drop.is_same_slot() {
            assert!(Arc::ptr_eq(&state, &next), "no-op allocated a new snapshot");
        }

        // A drop that validates must change the board the same way.
        if let Ok(strict) = try_apply_drag_result(&state, &drop) {
            let a: Vec<_> = strict.card_ids().collect();
            let b: Vec<_> = next.card_ids().collect();
            assert_eq!(a, b, "strict and permissive paths disagree");
        }

        state = next;
    }
});
