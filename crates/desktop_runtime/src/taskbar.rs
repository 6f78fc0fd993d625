//! Taskbar and window-body click rules.

use window_manager::{views, WindowAction, WindowId, WindowManagerState};

use crate::{
    apps::{start_rotation, DesktopApp},
    model::InteractionState,
};

/// Action for a taskbar button press: minimized windows are restored, the focused window is
/// left alone, anything else is focused.
pub fn taskbar_activation<C>(
    state: &WindowManagerState<C>,
    window_id: &WindowId,
) -> Option<WindowAction<C>> {
    let window = state.open_window(window_id)?;
    if window.is_minimized {
        return Some(WindowAction::Restore {
            window_id: window_id.clone(),
        });
    }
    if state.focused_window_id() == Some(window_id) {
        return None;
    }
    Some(WindowAction::Focus {
        window_id: window_id.clone(),
    })
}

/// Clicking inside a window focuses it unless it already has focus.
pub fn window_click_action<C>(
    state: &WindowManagerState<C>,
    window_id: &WindowId,
) -> Option<WindowAction<C>> {
    let window = state.open_window(window_id)?;
    let focused = views::is_window_active(state, &window.id);
    (!focused).then(|| WindowAction::Focus {
        window_id: window_id.clone(),
    })
}

/// Next app for the start button, advancing the rotation.
pub fn next_start_app(interaction: &mut InteractionState) -> Option<DesktopApp> {
    let rotation = start_rotation();
    if rotation.is_empty() {
        return None;
    }
    let app = rotation[interaction.start_cursor % rotation.len()];
    interaction.start_cursor = (interaction.start_cursor + 1) % rotation.len();
    Some(app)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use window_manager::{reduce_windows, AppId, OpenWindowRequest};

    use super::*;

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

    #[test]
    fn taskbar_restores_minimized_focuses_background_and_ignores_focused() {
        let mut state = state_with(&["a", "b", "c"]);
        reduce_windows(&mut state, WindowAction::Minimize { window_id: WindowId::from("a") });

        assert_eq!(
            taskbar_activation(&state, &WindowId::from("a")),
            Some(WindowAction::Restore { window_id: WindowId::from("a") })
        );
        assert_eq!(
            taskbar_activation(&state, &WindowId::from("b")),
            Some(WindowAction::Focus { window_id: WindowId::from("b") })
        );
        assert_eq!(taskbar_activation(&state, &WindowId::from("c")), None);
        assert_eq!(taskbar_activation(&state, &WindowId::from("missing")), None);
    }

    #[test]
    fn window_click_only_focuses_unfocused_windows() {
        let state = state_with(&["a", "b"]);

        assert_eq!(window_click_action(&state, &WindowId::from("b")), None);
        assert_eq!(
            window_click_action(&state, &WindowId::from("a")),
            Some(WindowAction::Focus { window_id: WindowId::from("a") })
        );
    }

    #[test]
    fn start_button_cycles_through_rotation() {
        let mut interaction = InteractionState::default();

        let picks: Vec<_> = (0..3).filter_map(|_| next_start_app(&mut interaction)).collect();

        assert_eq!(
            picks,
            vec![DesktopApp::Messenger, DesktopApp::SecretFolder, DesktopApp::Messenger]
        );
    }
}
