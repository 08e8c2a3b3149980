#![forbid(unsafe_code)]

//! FrankenTUI drag-and-drop facade crate.
//!
//! This crate provides the stable surface area for hosts. It re-exports the
//! geometry toolkit and the reorder engines, adds a unified [`Error`] for the
//! strict paths, and offers a lightweight prelude.

mod error;
#[cfg(feature = "serde")]
pub mod load;

pub use error::{Error, Result};

// --- Geometry re-exports ---------------------------------------------------

pub use ftui_dnd_core::autoscroll::{AutoScrollConfig, ScrollStep};
pub use ftui_dnd_core::geometry::{
    Bounds, Edge, EdgeDistances, EdgeScan, HorizontalDrop, NearEdge, Point, VerticalDrop,
};

// --- Engine re-exports -----------------------------------------------------

pub use ftui_reorder::{
    BoardError, BoardState, Card, CardId, Column, ColumnId, DragEventSource, DragLocation,
    DropError, DropKind, DropResult, Item, OrderUpdate, OrderUpdateMode, ScriptedDragSource,
};

/// Apply a drop only if it validates against `state`.
///
/// Same as [`ftui_reorder::try_apply_drag_result`], with the facade error.
pub fn apply_strict<C, K: Clone>(
    state: &std::sync::Arc<BoardState<C, K>>,
    result: &DropResult,
) -> Result<std::sync::Arc<BoardState<C, K>>> {
    Ok(ftui_reorder::try_apply_drag_result(state, result)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AutoScrollConfig, BoardState, Bounds, Card, Column, DragEventSource, DragLocation,
        DropKind, DropResult, Edge, Error, Item, Point, Result, apply_strict,
    };

    pub use ftui_dnd_core::geometry::{
        closest_edge, horizontal_drop_position, is_near_edge, is_point_in_rect,
        vertical_drop_position,
    };
    pub use ftui_reorder::{apply_drag_result, calculate_order_updates, reorder};
}

pub use ftui_dnd_core as core;
pub use ftui_reorder as reorder;
