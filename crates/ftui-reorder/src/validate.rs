#![forbid(unsafe_code)]

//! Strict validation around the permissive reducer.
//!
//! The reducer treats anything it cannot act on as a no-op. Hosts that would
//! rather fail loudly (importers, replay tools, tests) run the checks here
//! first. The reducer itself stays total; nothing in this module mutates.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::board::{BoardState, CardId, ColumnId};
use crate::drop::{DragLocation, DropKind, DropResult};
use crate::reducer::apply_drag_result;

/// Structural problems in a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("duplicate column id {column}")]
    DuplicateColumn { column: ColumnId },

    #[error("card {card} appears in column {first} and again in column {second}")]
    DuplicateCard {
        card: CardId,
        first: ColumnId,
        second: ColumnId,
    },

    #[error("column {column} references card {card} which has no entry")]
    DanglingCard { column: ColumnId, card: CardId },
}

/// Reasons a drop descriptor cannot be applied to a particular board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropError {
    #[error("{kind} drop is missing a column id on its {side} location")]
    MissingColumnId {
        kind: &'static str,
        side: &'static str,
    },

    #[error("unknown column {column}")]
    UnknownColumn { column: ColumnId },

    #[error("source index {index} out of range (len {len})")]
    SourceOutOfRange { index: usize, len: usize },

    #[error("destination index {index} out of range (max {max})")]
    DestinationOutOfRange { index: usize, max: usize },

    #[error("dragged {kind} {expected} does not match {found} at the source slot")]
    DraggableMismatch {
        kind: &'static str,
        expected: String,
        found: String,
    },
}

/// Check the snapshot invariants: unique column ids, each card id in at most
/// one slot, and every referenced card present in the card map.
pub fn validate_board<C, K>(state: &BoardState<C, K>) -> Result<(), BoardError> {
    let mut columns: FxHashSet<&ColumnId> = FxHashSet::default();
    for column in &state.columns {
        if !columns.insert(&column.id) {
            return Err(BoardError::DuplicateColumn {
                column: column.id.clone(),
            });
        }
    }

    let mut seen: FxHashMap<&CardId, &ColumnId> = FxHashMap::default();
    for column in &state.columns {
        for card in &column.card_ids {
            if let Some(first) = seen.insert(card, &column.id) {
                return Err(BoardError::DuplicateCard {
                    card: card.clone(),
                    first: first.clone(),
                    second: column.id.clone(),
                });
            }
            if !state.cards.contains_key(card) {
                return Err(BoardError::DanglingCard {
                    column: column.id.clone(),
                    card: card.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Check that `result` references real slots on `state`.
///
/// Cancelled gestures always pass. Same-slot drops pass if the slot exists.
pub fn validate_drop<C, K>(state: &BoardState<C, K>, result: &DropResult) -> Result<(), DropError> {
    let Some(destination) = result.destination.as_ref() else {
        return Ok(());
    };
    match result.kind {
        DropKind::Column => {
            let len = state.columns.len();
            let column = state
                .columns
                .get(result.source.index)
                .ok_or(DropError::SourceOutOfRange {
                    index: result.source.index,
                    len,
                })?;
            if column.id != result.draggable_id.as_str() {
                return Err(DropError::DraggableMismatch {
                    kind: "column",
                    expected: result.draggable_id.clone(),
                    found: column.id.to_string(),
                });
            }
            check_destination(destination.index, len.saturating_sub(1))
        }
        DropKind::Card => {
            let from = column_of(state, &result.source, "source")?;
            let to = column_of(state, destination, "destination")?;
            let source_ids = &state.columns[from].card_ids;
            let found = source_ids
                .get(result.source.index)
                .ok_or(DropError::SourceOutOfRange {
                    index: result.source.index,
                    len: source_ids.len(),
                })?;
            if found != result.draggable_id.as_str() {
                return Err(DropError::DraggableMismatch {
                    kind: "card",
                    expected: result.draggable_id.clone(),
                    found: found.to_string(),
                });
            }
            let target_len = state.columns[to].card_ids.len();
            // Within a column the card leaves first, so the last slot is len - 1.
            let max = if from == to {
                target_len.saturating_sub(1)
            } else {
                target_len
            };
            check_destination(destination.index, max)
        }
    }
}

/// Validate `result` against `state`, then apply it.
pub fn try_apply_drag_result<C, K: Clone>(
    state: &Arc<BoardState<C, K>>,
    result: &DropResult,
) -> Result<Arc<BoardState<C, K>>, DropError> {
    if let Err(err) = validate_drop(state, result) {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            message = "board.drop.rejected",
            kind = result.kind.as_str(),
            draggable_id = %result.draggable_id,
            error = %err
        );
        return Err(err);
    }
    Ok(apply_drag_result(state, result))
}

fn column_of<C, K>(
    state: &BoardState<C, K>,
    location: &DragLocation,
    side: &'static str,
) -> Result<usize, DropError> {
    let id = location
        .column_id
        .as_ref()
        .ok_or(DropError::MissingColumnId { kind: "card", side })?;
    state
        .column_index(id.as_str())
        .ok_or_else(|| DropError::UnknownColumn { column: id.clone() })
}

fn check_destination(index: usize, max: usize) -> Result<(), DropError> {
    if index > max {
        return Err(DropError::DestinationOutOfRange { index, max });
    }
    Ok(())
}
