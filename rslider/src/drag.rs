//! Drag session state machine.
//!
//! Two states: [`DragState::Idle`] and [`DragState::Dragging`]. A session
//! owns the captured pointer stream exclusively; events from any other
//! pointer are ignored until the session ends.

use tracing::trace;

use crate::{
    geometry::Geometry,
    pointer::PointerId,
    px::Px,
    selection::{Handle, SelectionState},
};

/// Current drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No handle is captured.
    #[default]
    Idle,
    /// `handle` follows pointer `pointer_id`.
    Dragging {
        /// The handle being dragged.
        handle: Handle,
        /// The captured pointer stream.
        pointer_id: PointerId,
    },
}

/// Drives [`SelectionState`] from a captured pointer.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a session is active (the "sliding" visual state).
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The pointer currently captured, if any.
    pub fn captured_pointer(&self) -> Option<PointerId> {
        match self.state {
            DragState::Dragging { pointer_id, .. } => Some(pointer_id),
            DragState::Idle => None,
        }
    }

    /// Starts a session for `handle`. Ignored when disabled or when a
    /// session is already active. Returns whether capture was acquired.
    pub fn press(&mut self, handle: Handle, pointer_id: PointerId, disabled: bool) -> bool {
        if disabled || self.is_dragging() {
            return false;
        }
        trace!(?handle, pointer_id, "drag start");
        self.state = DragState::Dragging { handle, pointer_id };
        true
    }

    /// Applies a move of `pointer_id` to `x`. Returns whether the selection
    /// changed.
    pub fn drag_to(
        &self,
        pointer_id: PointerId,
        x: Px,
        geometry: &Geometry,
        selection: &mut SelectionState,
    ) -> bool {
        let DragState::Dragging {
            handle,
            pointer_id: captured,
        } = self.state
        else {
            return false;
        };
        if captured != pointer_id {
            return false;
        }
        let Some(index) = geometry.pixel_to_index(x) else {
            return false;
        };
        selection.set_from_drag(handle, index)
    }

    /// Ends the session if `pointer_id` holds it. Up and cancel share this
    /// path. Returns whether a session ended.
    pub fn release(&mut self, pointer_id: PointerId) -> bool {
        if self.captured_pointer() != Some(pointer_id) {
            return false;
        }
        trace!(pointer_id, "drag end");
        self.state = DragState::Idle;
        true
    }

    /// Drops any active session regardless of pointer.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
