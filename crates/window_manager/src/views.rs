//! Read-only views derived from [`WindowManagerState`] on demand.

use crate::model::{Window, WindowId, WindowManagerState};

/// Every window that is not tombstoned, in first-insertion order.
pub fn open_windows<C>(state: &WindowManagerState<C>) -> Vec<&Window<C>> {
    state.windows.iter().filter(|w| w.is_open()).collect()
}

/// Open, non-minimized windows in stacking order (back to front), i.e. natural paint order.
pub fn visible_windows<C>(state: &WindowManagerState<C>) -> Vec<&Window<C>> {
    state
        .order
        .iter()
        .filter_map(|id| state.open_window(id))
        .filter(|w| !w.is_minimized)
        .collect()
}

pub fn minimized_windows<C>(state: &WindowManagerState<C>) -> Vec<&Window<C>> {
    state
        .windows
        .iter()
        .filter(|w| w.is_open() && w.is_minimized)
        .collect()
}

/// Taskbar entries: all open windows, minimized ones included so they can be restored.
pub fn taskbar_windows<C>(state: &WindowManagerState<C>) -> Vec<&Window<C>> {
    open_windows(state)
}

pub fn focused_window<C>(state: &WindowManagerState<C>) -> Option<&Window<C>> {
    state
        .focused_window_id()
        .and_then(|id| state.open_window(id))
}

/// Whether `window_id` is focused and on screen (the taskbar's "pressed" state).
pub fn is_window_active<C>(state: &WindowManagerState<C>, window_id: &WindowId) -> bool {
    focused_window(state).is_some_and(|w| w.id == *window_id && !w.is_minimized)
}

pub fn top_visible_window<C>(state: &WindowManagerState<C>) -> Option<&Window<C>> {
    state
        .order
        .iter()
        .rev()
        .filter_map(|id| state.open_window(id))
        .find(|w| !w.is_minimized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{AppId, OpenWindowRequest},
        reducer::{reduce_windows, WindowAction},
    };

    fn state_with(ids: &[&str]) -> WindowManagerState<()> {
        let mut state = WindowManagerState::new();
        for id in ids {
            reduce_windows(
                &mut state,
                WindowAction::open(WindowId::from(*id), AppId::from("app"), OpenWindowRequest::new(())),
            );
        }
        state
    }

    fn ids(windows: Vec<&Window<()>>) -> Vec<&str> {
        windows.into_iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn visible_windows_follow_stacking_order_not_insertion_order() {
        let mut state = state_with(&["a", "b", "c"]);
        reduce_windows(&mut state, WindowAction::Focus { window_id: WindowId::from("a") });

        assert_eq!(ids(visible_windows(&state)), vec!["b", "c", "a"]);
        assert_eq!(ids(open_windows(&state)), vec!["a", "b", "c"]);
    }

    #[test]
    fn minimized_windows_stay_on_taskbar_but_leave_the_surface() {
        let mut state = state_with(&["a", "b"]);
        reduce_windows(&mut state, WindowAction::Minimize { window_id: WindowId::from("b") });

        assert_eq!(ids(visible_windows(&state)), vec!["a"]);
        assert_eq!(ids(minimized_windows(&state)), vec!["b"]);
        assert_eq!(ids(taskbar_windows(&state)), vec!["a", "b"]);
        assert_eq!(top_visible_window(&state).map(|w| w.id.as_str()), Some("a"));
    }

    #[test]
    fn active_window_requires_focus() {
        let mut state = state_with(&["a", "b"]);
        assert!(is_window_active(&state, &WindowId::from("b")));
        assert!(!is_window_active(&state, &WindowId::from("a")));

        reduce_windows(&mut state, WindowAction::Minimize { window_id: WindowId::from("b") });
        assert!(!is_window_active(&state, &WindowId::from("b")));
        assert!(is_window_active(&state, &WindowId::from("a")));

        reduce_windows(&mut state, WindowAction::Minimize { window_id: WindowId::from("a") });
        assert_eq!(focused_window(&state), None);
        assert_eq!(top_visible_window(&state), None);
    }
}
