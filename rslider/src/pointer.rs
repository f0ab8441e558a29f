//! Pointer input delivered by the host.
//!
//! Hosts translate their native pointer and click events into
//! [`PointerEvent`]s and feed them, in delivery order, to
//! [`crate::Slider::handle_pointer`]. Which slider part an event targets is
//! either known to the host (it dispatched on the handle element) or
//! resolved with [`crate::Slider::hit_test`].

use std::time::Instant;

use crate::{px::PxPosition, selection::Handle};

/// Identifier of one pointer stream (mouse, pen or a single touch).
pub type PointerId = u64;

/// The part of the slider an event was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A draggable handle.
    Handle(Handle),
    /// The tick scale below the track.
    Scale,
    /// Anywhere else on the slider container.
    Track,
}

/// The kind of pointer activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventContent {
    /// A button or touch went down over `target`.
    Down(PointerTarget),
    /// The pointer moved.
    Move,
    /// The button or touch was released.
    Up,
    /// The platform aborted the pointer stream.
    Cancel,
    /// A completed click over `target`.
    Click(PointerTarget),
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// When the event occurred; debounce windows are measured from it.
    pub timestamp: Instant,
    /// Which pointer stream produced it.
    pub pointer_id: PointerId,
    /// Pointer position in the same space as the track metrics.
    pub position: PxPosition,
    /// What happened.
    pub content: PointerEventContent,
}

impl PointerEvent {
    /// Creates an event stamped with the current time.
    pub fn new(pointer_id: PointerId, position: PxPosition, content: PointerEventContent) -> Self {
        Self::at(Instant::now(), pointer_id, position, content)
    }

    /// Creates an event with an explicit timestamp.
    pub fn at(
        timestamp: Instant,
        pointer_id: PointerId,
        position: PxPosition,
        content: PointerEventContent,
    ) -> Self {
        Self {
            timestamp,
            pointer_id,
            position,
            content,
        }
    }
}
