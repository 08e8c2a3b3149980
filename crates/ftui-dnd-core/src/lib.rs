#![forbid(unsafe_code)]

//! Core: drop-target geometry and auto-scroll ramps.
//!
//! # Role in FrankenTUI drag-and-drop
//! `ftui-dnd-core` is the geometry layer. It has no notion of lists, boards, or
//! pointer events; it answers questions about points and rectangles that the
//! hit-testing adapter and the auto-scroll loop ask while a drag is active.
//!
//! # Primary responsibilities
//! - **Geometry**: edge distances, closest edge, edge proximity, containment,
//!   centers, and before/after classification for drop indicators.
//! - **Auto-scroll**: [`AutoScrollConfig`] maps edge proximity to a
//!   [`ScrollStep`].
//!
//! # How it fits in the system
//! The reorder engines (`ftui-reorder`) consume plain drop descriptors and never
//! look at geometry. Adapters use this crate to turn pointer coordinates into
//! those descriptors, which keeps the engines independent of any rendering
//! surface.

pub mod autoscroll;
pub mod geometry;

pub use autoscroll::{AutoScrollConfig, ScrollStep};
pub use geometry::{
    Bounds, Edge, EdgeDistances, EdgeScan, HorizontalDrop, NearEdge, Point, VerticalDrop,
};
