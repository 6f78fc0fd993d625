use serde::{Deserialize, Serialize};
use window_manager::{Position, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Active title-bar drag. `grab_offset` is the pointer's distance from the window's top-left
/// corner when the drag started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub grab_offset: PointerPosition,
}

impl DragSession {
    /// Window position for a pointer sample. Only the vertical axis is clamped, so a window can
    /// never be dragged above the top edge but may leave the screen sideways.
    pub fn position_for(&self, pointer: PointerPosition) -> Position {
        Position {
            x: pointer.x - self.grab_offset.x,
            y: (pointer.y - self.grab_offset.y).max(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    /// Index into the start-button rotation.
    pub start_cursor: usize,
}
