#![forbid(unsafe_code)]

//! Drop descriptors.
//!
//! A [`DropResult`] is the only thing the board reducer learns about a
//! gesture. The hit-testing adapter builds one when a drag ends (or is
//! cancelled) and the reducer turns it into the next board snapshot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::ColumnId;

/// What was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DropKind {
    Card,
    Column,
}

impl DropKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Column => "column",
        }
    }
}

/// A slot on the board.
///
/// `column_id` is `None` for column-level locations, where `index` is the
/// column's position in the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DragLocation {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub column_id: Option<ColumnId>,
    pub index: usize,
}

impl DragLocation {
    /// Card slot `index` within `column`.
    #[must_use]
    pub fn in_column(column: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            column_id: Some(column.into()),
            index,
        }
    }

    /// Column slot `index` in the board.
    #[must_use]
    pub const fn at(index: usize) -> Self {
        Self {
            column_id: None,
            index,
        }
    }
}

/// Summary of a completed or cancelled gesture.
///
/// `destination == None` means the gesture was cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DropResult {
    pub kind: DropKind,
    /// Card id for [`DropKind::Card`], column id for [`DropKind::Column`].
    pub draggable_id: String,
    pub source: DragLocation,
    #[cfg_attr(feature = "serde", serde(default))]
    pub destination: Option<DragLocation>,
}

impl DropResult {
    /// A card dropped at `destination`.
    #[must_use]
    pub fn card(
        draggable_id: impl Into<String>,
        source: DragLocation,
        destination: DragLocation,
    ) -> Self {
        Self {
            kind: DropKind::Card,
            draggable_id: draggable_id.into(),
            source,
            destination: Some(destination),
        }
    }

    /// A column dropped at board position `to`.
    #[must_use]
    pub fn column(draggable_id: impl Into<String>, from: usize, to: usize) -> Self {
        Self {
            kind: DropKind::Column,
            draggable_id: draggable_id.into(),
            source: DragLocation::at(from),
            destination: Some(DragLocation::at(to)),
        }
    }

    /// A gesture that ended without a drop target.
    #[must_use]
    pub fn cancelled(
        kind: DropKind,
        draggable_id: impl Into<String>,
        source: DragLocation,
    ) -> Self {
        Self {
            kind,
            draggable_id: draggable_id.into(),
            source,
            destination: None,
        }
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.destination.is_none()
    }

    /// Whether source and destination are the same slot.
    #[must_use]
    pub fn is_same_slot(&self) -> bool {
        self.destination.as_ref() == Some(&self.source)
    }
}
