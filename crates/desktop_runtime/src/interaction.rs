//! Title-bar drag handling.
//!
//! A drag is a `focus` at pointer-down, one `move` per pointer sample, and nothing at
//! pointer-up. The manager itself never clamps; the drag controller keeps windows below the
//! top edge.

use window_manager::{Clock, WindowEvent, WindowId, WindowManager};

use crate::model::{DragSession, InteractionState, PointerPosition};

/// Starts dragging `window_id`, raising and focusing it.
///
/// Minimized, closed, or unknown windows cannot be grabbed; the call is then a no-op.
pub fn begin_drag<C, K: Clock>(
    manager: &mut WindowManager<C, K>,
    interaction: &mut InteractionState,
    window_id: &WindowId,
    pointer: PointerPosition,
) -> Vec<WindowEvent> {
    let Some(window) = manager.window(window_id).filter(|w| w.is_visible()) else {
        return Vec::new();
    };
    let grab_offset = PointerPosition {
        x: pointer.x - window.position.x,
        y: pointer.y - window.position.y,
    };

    interaction.dragging = Some(DragSession {
        window_id: window_id.clone(),
        grab_offset,
    });
    manager.focus(window_id)
}

/// Applies one pointer sample to the active drag, if any.
///
/// The session is dropped when its window has been closed underneath it.
pub fn update_drag<C, K: Clock>(
    manager: &mut WindowManager<C, K>,
    interaction: &mut InteractionState,
    pointer: PointerPosition,
) -> Vec<WindowEvent> {
    let Some(session) = interaction.dragging.as_ref() else {
        return Vec::new();
    };
    if !manager.state().is_open(&session.window_id) {
        interaction.dragging = None;
        return Vec::new();
    }

    let position = session.position_for(pointer);
    manager.move_window(&session.window_id, position)
}

pub fn end_drag(interaction: &mut InteractionState) {
    interaction.dragging = None;
}
