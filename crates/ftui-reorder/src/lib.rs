#![forbid(unsafe_code)]

//! Reorder engines for FrankenTUI drag-and-drop.
//!
//! # Role in FrankenTUI drag-and-drop
//! `ftui-reorder` owns the state transitions. Adapters translate pointer or
//! keyboard gestures into [`DropResult`] descriptors; this crate turns those
//! descriptors into new list orders and new board snapshots.
//!
//! # Primary responsibilities
//! - **Array reorder**: [`array::reorder`] and [`array::move_item`], the
//!   remove-then-insert primitive everything else builds on.
//! - **Flat lists**: [`list::calculate_order_updates`] diffs two snapshots into
//!   the minimal set of position writes.
//! - **Boards**: [`BoardState`] is a normalized, `Arc`-shared snapshot;
//!   [`apply_drag_result`] is the pure reducer over it.
//! - **Validation**: [`validate`] rejects malformed boards and drops for hosts
//!   that want errors instead of silent no-ops.
//! - **Sources**: [`DragEventSource`] decouples the reducer from whatever
//!   produces gestures.
//!
//! # How it fits in the system
//! Geometry (edge proximity, drop-side classification) lives in
//! `ftui-dnd-core` and is never consulted here. The `ftui-dnd` facade
//! re-exports both crates with a shared error type.
//!
//! # Feature flags
//! - `serde`: derive `Serialize`/`Deserialize` on boards, descriptors, and
//!   order updates.
//! - `tracing`: structured events for applied, skipped, and rejected drops.

pub mod array;
pub mod board;
pub mod drop;
pub mod list;
pub mod reducer;
pub mod source;
pub mod validate;

pub use array::{move_item, reorder};
pub use board::{BoardState, Card, CardId, CardMap, Column, ColumnId};
pub use drop::{DragLocation, DropKind, DropResult};
pub use list::{
    Item, OrderUpdate, OrderUpdateMode, calculate_order_updates, calculate_order_updates_with,
    normalize_positions,
};
pub use reducer::{
    apply_drag_result, move_card_between_columns, reorder_card_in_column, reorder_columns,
};
pub use source::{DragEventSource, ScriptedDragSource, drive};
pub use validate::{BoardError, DropError, try_apply_drag_result, validate_board, validate_drop};
