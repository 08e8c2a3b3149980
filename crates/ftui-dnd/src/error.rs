#![forbid(unsafe_code)]

//! Unified error type for the drag-and-drop facade.
//!
//! The engines themselves are total and never fail. Errors only arise from
//! the strict paths: validating a board, validating a drop, or decoding input.

use thiserror::Error;

use ftui_reorder::{BoardError, DropError};

/// Standard result type for ftui-dnd APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for hosts that use the strict paths.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("rejected drop: {0}")]
    Drop(#[from] DropError),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error came from a malformed board snapshot.
    #[must_use]
    pub const fn is_board(&self) -> bool {
        matches!(self, Self::Board(_))
    }

    /// Whether the error came from a drop descriptor.
    #[must_use]
    pub const fn is_drop(&self) -> bool {
        matches!(self, Self::Drop(_))
    }
}
