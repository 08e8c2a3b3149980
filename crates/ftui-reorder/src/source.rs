#![forbid(unsafe_code)]

//! Drag event sources.
//!
//! [`DragEventSource`] is the seam between hit-testing and the reducer. A
//! terminal adapter, a web adapter, or a recorded trace only has to yield
//! [`DropResult`] values; the reducer never sees pointer events.
//!
//! # Invariants
//!
//! 1. [`drive`] applies drops strictly in the order the source yields them,
//!    each against the snapshot produced by the previous one.
//! 2. A source that yields nothing leaves the snapshot reference-identical.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::board::BoardState;
use crate::drop::DropResult;
use crate::reducer::apply_drag_result;

/// Anything that produces completed (or cancelled) gestures.
pub trait DragEventSource {
    /// Next finished gesture, or `None` when no gesture is pending.
    fn next_drop(&mut self) -> Option<DropResult>;
}

impl<S: DragEventSource + ?Sized> DragEventSource for &mut S {
    fn next_drop(&mut self) -> Option<DropResult> {
        (**self).next_drop()
    }
}

/// A FIFO of pre-recorded gestures, for replay and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDragSource {
    pending: VecDeque<DropResult>,
}

impl ScriptedDragSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a gesture at the back.
    pub fn push(&mut self, drop: DropResult) {
        self.pending.push_back(drop);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FromIterator<DropResult> for ScriptedDragSource {
    fn from_iter<I: IntoIterator<Item = DropResult>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}

impl DragEventSource for ScriptedDragSource {
    fn next_drop(&mut self) -> Option<DropResult> {
        self.pending.pop_front()
    }
}

/// Drain `source`, applying each gesture in order.
#[must_use]
pub fn drive<S, C, K>(mut source: S, state: &Arc<BoardState<C, K>>) -> Arc<BoardState<C, K>>
where
    S: DragEventSource,
    K: Clone,
{
    let mut current = Arc::clone(state);
    #[cfg(feature = "tracing")]
    let mut applied = 0usize;
    while let Some(drop) = source.next_drop() {
        current = apply_drag_result(&current, &drop);
        #[cfg(feature = "tracing")]
        {
            applied += 1;
        }
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "board.drive",
        gestures = applied,
        changed = !Arc::ptr_eq(state, &current)
    );
    current
}
