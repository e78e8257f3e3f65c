//! Input model: mouse buttons, box input regions, and the gesture state machine.
//!
//! `BoxPart` identifies which region of a box received a pointer-down; the
//! header and the resize handle are disjoint regions, so one event can start
//! at most one gesture. `InputState` is the active gesture tracked between
//! pointer-down and pointer-up, carrying the context needed to compute the
//! next geometry from each pointer-move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::BoxId;
use crate::transform::{Point, Size};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Region of a box that received a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxPart {
    /// The label band along the top edge; starts a drag.
    Header,
    /// The square in the bottom-right corner; starts a resize.
    ResizeHandle,
    /// Anywhere else inside the box; selects only.
    Body,
    /// The close button in the top-right corner; deletes the box.
    DeleteButton,
}

/// Internal state for the input state machine.
///
/// Only one gesture exists process-wide, so at most one box is ever being
/// dragged or resized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a box by its header.
    Dragging {
        /// Id of the box being dragged.
        id: BoxId,
        /// Pointer position at the previous event. Deltas are taken against
        /// this, then it advances, so clamped moves never accumulate drift.
        last_pointer: Point,
    },
    /// The user is resizing a box by its bottom-right handle.
    Resizing {
        /// Id of the box being resized.
        id: BoxId,
        /// Pointer position at the start of the resize.
        start_pointer: Point,
        /// Box size at the start of the resize.
        start_size: Size,
    },
}

impl InputState {
    /// The box the active gesture is operating on, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<BoxId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Size for the current pointer during a resize: the starting size plus
    /// the total pointer travel, per axis. Minimums are applied by the store.
    #[must_use]
    pub fn resized(start_size: Size, start_pointer: Point, pointer: Point) -> Size {
        let d = pointer.delta_from(start_pointer);
        Size::new(start_size.width + d.x, start_size.height + d.y)
    }
}
