#![forbid(unsafe_code)]

//! JSON loading for boards and recorded gesture traces.
//!
//! A loaded board is validated before it is returned, so the reducer only
//! ever sees snapshots that satisfy the board invariants. Traces are not
//! validated up front; replay them with [`crate::reorder::drive`] or apply
//! them one by one through [`crate::reorder::try_apply_drag_result`].

use std::sync::Arc;

use serde::de::DeserializeOwned;

use ftui_reorder::{BoardState, DropResult, ScriptedDragSource, validate_board};

use crate::Result;

/// Decode and validate a board snapshot.
pub fn board_from_json<C, K>(json: &str) -> Result<Arc<BoardState<C, K>>>
where
    C: DeserializeOwned + Default,
    K: DeserializeOwned + Default,
{
    let state: BoardState<C, K> = serde_json::from_str(json)?;
    validate_board(&state)?;
    Ok(state.into_shared())
}

/// Decode a JSON array of drop descriptors into a replayable source.
pub fn trace_from_json(json: &str) -> Result<ScriptedDragSource> {
    let drops: Vec<DropResult> = serde_json::from_str(json)?;
    Ok(drops.into_iter().collect())
}

/// Encode a board snapshot.
pub fn board_to_json<C, K>(state: &BoardState<C, K>) -> Result<String>
where
    C: serde::Serialize,
    K: serde::Serialize,
{
    Ok(serde_json::to_string(state)?)
}
