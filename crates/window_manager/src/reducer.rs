//! Window actions, emitted events, and transition logic for the window manager.

use serde::{Deserialize, Serialize};

use crate::model::{
    AppId, OpenWindowRequest, Position, Size, Window, WindowId, WindowManagerState,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_windows`] to mutate [`WindowManagerState`].
pub enum WindowAction<C> {
    /// Open a window, or focus it when `window_id` already names an open window.
    Open {
        /// Resolved window id (caller-supplied or synthesized by the store).
        window_id: WindowId,
        /// Hosted application type.
        app_id: AppId,
        /// Title; the app id is used when absent.
        title: Option<String>,
        /// Opaque hosted-application payload.
        content: C,
        /// Initial top-left corner; defaults to `(100, 100)`.
        position: Option<Position>,
        /// Initial size; defaults to `400x300`.
        size: Option<Size>,
    },
    /// Tombstone a window and drop it from the stacking order.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise, un-minimize and focus a window.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Hide a window from the desktop surface while keeping its taskbar slot.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Un-minimize a window and raise it to the front.
    Restore {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Overwrite a window's top-left corner.
    Move {
        /// Window to move.
        window_id: WindowId,
        /// New top-left corner, applied unclamped.
        position: Position,
    },
    /// Overwrite a window's size.
    Resize {
        /// Window to resize.
        window_id: WindowId,
        /// New size, applied unvalidated.
        size: Size,
    },
}

impl<C> WindowAction<C> {
    /// Builds an [`WindowAction::Open`] from a request whose id has already been resolved.
    pub fn open(window_id: WindowId, app_id: AppId, request: OpenWindowRequest<C>) -> Self {
        Self::Open {
            window_id,
            app_id,
            title: request.title,
            content: request.content,
            position: request.position,
            size: request.size,
        }
    }

    /// Window the action targets.
    pub fn window_id(&self) -> &WindowId {
        match self {
            Self::Open { window_id, .. }
            | Self::Close { window_id }
            | Self::Focus { window_id }
            | Self::Minimize { window_id }
            | Self::Restore { window_id }
            | Self::Move { window_id, .. }
            | Self::Resize { window_id, .. } => window_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// State changes reported by [`reduce_windows`] for the presentation layer to react to.
pub enum WindowEvent {
    /// A new window entry was created (or a tombstone was replaced).
    Opened(WindowId),
    /// A window was tombstoned.
    Closed(WindowId),
    /// Focus moved to (or was re-asserted on) a window.
    Focused(WindowId),
    /// No window holds focus any more.
    FocusCleared,
    /// A window was minimized.
    Minimized(WindowId),
    /// A minimized window was brought back.
    Restored(WindowId),
    /// A window's position changed.
    Moved(WindowId),
    /// A window's size changed.
    Resized(WindowId),
}

/// Applies a [`WindowAction`] to the window-manager state and returns the resulting events.
///
/// Every action is total: an id that is unknown or tombstoned turns the action into a no-op that
/// leaves `state` untouched and returns no events. The same holds for minimizing a window that is
/// already minimized and for moving or resizing a window to the geometry it already has. All mutation happens after the target has been
/// resolved, so observers never see a half-applied action.
pub fn reduce_windows<C>(
    state: &mut WindowManagerState<C>,
    action: WindowAction<C>,
) -> Vec<WindowEvent> {
    let mut events = Vec::new();
    match action {
        WindowAction::Open {
            window_id,
            app_id,
            title,
            content,
            position,
            size,
        } => {
            if state.is_open(&window_id) {
                raise_window(state, &window_id, &mut events);
                return events;
            }

            let window = Window {
                id: window_id.clone(),
                title: title.unwrap_or_else(|| app_id.to_string()),
                app_id,
                content,
                position: position.unwrap_or_default(),
                size: size.unwrap_or_default(),
                z_index: state.next_z_index,
                is_minimized: false,
                is_closed: false,
            };
            // A tombstone with the same id is replaced in place so it keeps its taskbar slot.
            match state.windows.iter_mut().find(|w| w.id == window_id) {
                Some(tombstone) => *tombstone = window,
                None => state.windows.push(window),
            }
            events.push(WindowEvent::Opened(window_id.clone()));
            raise_window(state, &window_id, &mut events);
        }
        WindowAction::Close { window_id } => {
            let Some(window) = state.open_window_mut(&window_id) else {
                return events;
            };
            window.is_closed = true;
            state.order.retain(|id| *id != window_id);
            events.push(WindowEvent::Closed(window_id.clone()));
            if state.focused_window_id.as_ref() == Some(&window_id) {
                refocus_topmost(state, &window_id, &mut events);
            }
        }
        WindowAction::Focus { window_id } => {
            raise_window(state, &window_id, &mut events);
        }
        WindowAction::Minimize { window_id } => {
            let Some(window) = state
                .open_window_mut(&window_id)
                .filter(|w| !w.is_minimized)
            else {
                return events;
            };
            window.is_minimized = true;
            events.push(WindowEvent::Minimized(window_id.clone()));
            if state.focused_window_id.as_ref() == Some(&window_id) {
                refocus_topmost(state, &window_id, &mut events);
            }
        }
        WindowAction::Restore { window_id } => {
            let Some(window) = state.open_window(&window_id) else {
                return events;
            };
            if window.is_minimized {
                events.push(WindowEvent::Restored(window_id.clone()));
            }
            raise_window(state, &window_id, &mut events);
        }
        WindowAction::Move {
            window_id,
            position,
        } => {
            let Some(window) = state
                .open_window_mut(&window_id)
                .filter(|w| w.position != position)
            else {
                return events;
            };
            window.position = position;
            events.push(WindowEvent::Moved(window_id));
        }
        WindowAction::Resize { window_id, size } => {
            let Some(window) = state
                .open_window_mut(&window_id)
                .filter(|w| w.size != size)
            else {
                return events;
            };
            window.size = size;
            events.push(WindowEvent::Resized(window_id));
        }
    }

    events
}

/// Gives `window_id` a fresh z-index, moves it to the front of `order` and focuses it.
///
/// Returns `false` (leaving `state` untouched) when the window is unknown or closed.
fn raise_window<C>(
    state: &mut WindowManagerState<C>,
    window_id: &WindowId,
    events: &mut Vec<WindowEvent>,
) -> bool {
    let z_index = state.next_z_index;
    let Some(window) = state.open_window_mut(window_id) else {
        return false;
    };
    window.is_minimized = false;
    window.z_index = z_index;
    state.next_z_index = z_index + 1;

    state.order.retain(|id| id != window_id);
    state.order.push(window_id.clone());
    state.focused_window_id = Some(window_id.clone());
    events.push(WindowEvent::Focused(window_id.clone()));
    true
}

/// Moves focus to the topmost non-minimized window in `order` other than `leaving`.
fn refocus_topmost<C>(
    state: &mut WindowManagerState<C>,
    leaving: &WindowId,
    events: &mut Vec<WindowEvent>,
) {
    let next = state
        .order
        .iter()
        .rev()
        .filter(|id| *id != leaving)
        .find(|id| state.open_window(id).is_some_and(|w| !w.is_minimized))
        .cloned();

    match next {
        Some(window_id) => {
            state.focused_window_id = Some(window_id.clone());
            events.push(WindowEvent::Focused(window_id));
        }
        None => {
            state.focused_window_id = None;
            events.push(WindowEvent::FocusCleared);
        }
    }
}
