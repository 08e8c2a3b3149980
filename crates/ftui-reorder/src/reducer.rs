#![forbid(unsafe_code)]

//! Board reducer: `(snapshot, drop) -> snapshot`.
//!
//! [`apply_drag_result`] is the single entry point the drag adapter calls once
//! per gesture. It dispatches to one of three transitions:
//!
//! | Drop | Transition |
//! |------|------------|
//! | `destination == None` | none (cancelled) |
//! | `Column` | [`reorder_columns`] |
//! | `Card`, same column | [`reorder_card_in_column`] |
//! | `Card`, different columns | [`move_card_between_columns`] |
//!
//! # Invariants
//!
//! 1. Every no-op returns the input `Arc` itself (`Arc::ptr_eq` holds).
//! 2. Accepted transitions reuse the `cards` map `Arc` and every column `Arc`
//!    they did not touch.
//! 3. Card transitions preserve the multiset of card ids across all columns
//!    and never change the column order.
//! 4. Column transitions never change any column's `card_ids`.
//!
//! # Failure Modes
//!
//! The reducer does not validate. Anything it cannot act on is a no-op:
//!
//! | Input | Result |
//! |-------|--------|
//! | Unknown column id | unchanged |
//! | `column_id` missing on a card location | unchanged |
//! | Source index past the end | unchanged |
//! | Dragged id not at the source slot (cross-column) | unchanged |
//! | Destination index past the end | clamped to append |
//!
//! Use [`crate::validate::try_apply_drag_result`] to reject these loudly.

use std::sync::Arc;

use crate::array::move_item;
use crate::board::{BoardState, ColumnId};
use crate::drop::{DragLocation, DropKind, DropResult};

/// Why a transition left the snapshot unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Noop {
    Cancelled,
    SameSlot,
    MissingColumnId,
    UnknownColumn,
    SourceOutOfRange,
    DraggableMismatch,
}

impl Noop {
    #[cfg(feature = "tracing")]
    const fn as_str(self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::SameSlot => "same_slot",
            Self::MissingColumnId => "missing_column_id",
            Self::UnknownColumn => "unknown_column",
            Self::SourceOutOfRange => "source_out_of_range",
            Self::DraggableMismatch => "draggable_mismatch",
        }
    }
}

type Transition<C, K> = Result<BoardState<C, K>, Noop>;

/// Log fields describing the gesture behind a transition.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
struct Trace<'a> {
    kind: &'static str,
    target: Option<&'a str>,
    from: usize,
    to: Option<usize>,
}

/// Apply one gesture to a board snapshot.
///
/// Returns the input `Arc` unchanged for cancelled gestures, same-slot drops,
/// and descriptors that reference nothing on the board.
#[must_use]
pub fn apply_drag_result<C, K: Clone>(
    state: &Arc<BoardState<C, K>>,
    result: &DropResult,
) -> Arc<BoardState<C, K>> {
    let transition = match result.destination.as_ref() {
        None => Err(Noop::Cancelled),
        Some(to) => match result.kind {
            DropKind::Column => columns_moved(state, result.source.index, to.index),
            DropKind::Card => card_moved(state, &result.source, to, &result.draggable_id),
        },
    };
    let trace = Trace {
        kind: result.kind.as_str(),
        target: Some(result.draggable_id.as_str()),
        from: result.source.index,
        to: result.destination.as_ref().map(|to| to.index),
    };
    finish(state, transition, trace)
}

/// Move a card within one column.
#[must_use]
pub fn reorder_card_in_column<C, K: Clone>(
    state: &Arc<BoardState<C, K>>,
    column_id: &str,
    start: usize,
    end: usize,
) -> Arc<BoardState<C, K>> {
    let transition = card_reordered(state, column_id, start, end);
    let trace = Trace {
        kind: "card",
        target: Some(column_id),
        from: start,
        to: Some(end),
    };
    finish(state, transition, trace)
}

/// Move `card_id` from `source` to `destination`.
///
/// When both locations name the same column this behaves as
/// [`reorder_card_in_column`].
#[must_use]
pub fn move_card_between_columns<C, K: Clone>(
    state: &Arc<BoardState<C, K>>,
    source: &DragLocation,
    destination: &DragLocation,
    card_id: &str,
) -> Arc<BoardState<C, K>> {
    let transition = card_moved(state, source, destination, card_id);
    let trace = Trace {
        kind: "card",
        target: Some(card_id),
        from: source.index,
        to: Some(destination.index),
    };
    finish(state, transition, trace)
}

/// Move a column to a new board position.
#[must_use]
pub fn reorder_columns<C, K>(
    state: &Arc<BoardState<C, K>>,
    start: usize,
    end: usize,
) -> Arc<BoardState<C, K>> {
    let transition = columns_moved(state, start, end);
    let trace = Trace {
        kind: "column",
        target: None,
        from: start,
        to: Some(end),
    };
    finish(state, transition, trace)
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

fn finish<C, K>(
    state: &Arc<BoardState<C, K>>,
    transition: Transition<C, K>,
    trace: Trace<'_>,
) -> Arc<BoardState<C, K>> {
    match transition {
        Ok(next) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "board.drop",
                kind = trace.kind,
                target = trace.target,
                from = trace.from,
                to = trace.to,
                outcome = "applied",
                cards = next.card_count()
            );
            #[cfg(not(feature = "tracing"))]
            let _ = trace;
            Arc::new(next)
        }
        Err(noop) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                message = "board.drop",
                kind = trace.kind,
                target = trace.target,
                from = trace.from,
                to = trace.to,
                outcome = "unchanged",
                reason = noop.as_str()
            );
            #[cfg(not(feature = "tracing"))]
            let _ = (noop, trace);
            Arc::clone(state)
        }
    }
}

fn card_moved<C, K: Clone>(
    state: &BoardState<C, K>,
    source: &DragLocation,
    destination: &DragLocation,
    card_id: &str,
) -> Transition<C, K> {
    let (Some(from), Some(to)) = (&source.column_id, &destination.column_id) else {
        return Err(Noop::MissingColumnId);
    };
    if from == to {
        card_reordered(state, from.as_str(), source.index, destination.index)
    } else {
        card_transferred(state, from, source.index, to, destination.index, card_id)
    }
}

fn card_reordered<C, K: Clone>(
    state: &BoardState<C, K>,
    column_id: &str,
    start: usize,
    end: usize,
) -> Transition<C, K> {
    if start == end {
        return Err(Noop::SameSlot);
    }
    let slot = state.column_index(column_id).ok_or(Noop::UnknownColumn)?;
    let column = &state.columns[slot];
    if start >= column.card_ids.len() {
        return Err(Noop::SourceOutOfRange);
    }

    let mut card_ids = column.card_ids.clone();
    if !move_item(&mut card_ids, start, end) {
        return Err(Noop::SameSlot);
    }

    let mut columns = state.columns.clone();
    columns[slot] = Arc::new(column.with_card_ids(card_ids));
    Ok(BoardState {
        columns,
        cards: Arc::clone(&state.cards),
    })
}

fn card_transferred<C, K: Clone>(
    state: &BoardState<C, K>,
    from: &ColumnId,
    start: usize,
    to: &ColumnId,
    end: usize,
    card_id: &str,
) -> Transition<C, K> {
    let from_slot = state
        .column_index(from.as_str())
        .ok_or(Noop::UnknownColumn)?;
    let to_slot = state.column_index(to.as_str()).ok_or(Noop::UnknownColumn)?;
    let source = &state.columns[from_slot];
    let target = &state.columns[to_slot];

    let Some(moving) = source.card_ids.get(start) else {
        return Err(Noop::SourceOutOfRange);
    };
    if moving != card_id {
        return Err(Noop::DraggableMismatch);
    }

    let mut source_ids = source.card_ids.clone();
    let moving = source_ids.remove(start);
    let mut target_ids = Vec::with_capacity(target.card_ids.len() + 1);
    target_ids.extend_from_slice(&target.card_ids);
    target_ids.insert(end.min(target_ids.len()), moving);

    let mut columns = state.columns.clone();
    columns[from_slot] = Arc::new(source.with_card_ids(source_ids));
    columns[to_slot] = Arc::new(target.with_card_ids(target_ids));
    Ok(BoardState {
        columns,
        cards: Arc::clone(&state.cards),
    })
}

fn columns_moved<C, K>(state: &BoardState<C, K>, start: usize, end: usize) -> Transition<C, K> {
    if start == end {
        return Err(Noop::SameSlot);
    }
    if start >= state.columns.len() {
        return Err(Noop::SourceOutOfRange);
    }
    let mut columns = state.columns.clone();
    if !move_item(&mut columns, start, end) {
        return Err(Noop::SameSlot);
    }
    Ok(BoardState {
        columns,
        cards: Arc::clone(&state.cards),
    })
}
