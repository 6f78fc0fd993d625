//! Runtime provider and context wiring for the window manager.
//!
//! The provider owns the single [`WindowManager`] for the session and hands out a `Copy` context
//! through Leptos context. Every command funnels through one apply path, so commands are applied
//! one at a time in arrival order and observers only ever see complete transitions.

use leptos::*;
use window_manager::{
    views, AppId, OpenWindowRequest, Position, Size, Window, WindowAction, WindowEvent, WindowId,
    WindowManager,
};

use crate::{
    apps::{default_open_request, AppContent, CatalogError, DesktopApp, DesktopIcon},
    effect_executor, interaction,
    model::{InteractionState, PointerPosition},
    taskbar,
};

/// Window record as seen by the presentation layer.
pub type DesktopWindow = Window<AppContent>;

#[derive(Clone, Copy)]
/// Leptos context for reading window-manager state and issuing window commands.
pub struct WindowManagerContext {
    /// Reactive window-manager store.
    pub manager: RwSignal<WindowManager<AppContent>>,
    /// Reactive drag and start-button state.
    pub interaction: RwSignal<InteractionState>,
    /// Events emitted by applied commands, drained by the effect executor.
    pub events: RwSignal<Vec<WindowEvent>>,
}

impl Default for WindowManagerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManagerContext {
    /// Creates the context signals with an empty desktop.
    pub fn new() -> Self {
        Self {
            manager: create_rw_signal(WindowManager::new()),
            interaction: create_rw_signal(InteractionState::default()),
            events: create_rw_signal(Vec::new()),
        }
    }

    /// Runs one command against a copy of the store and commits it only if it changed anything.
    ///
    /// Commands report no events exactly when they were no-ops, so a stale id never wakes
    /// subscribers.
    fn apply<R>(
        &self,
        command: impl FnOnce(
            &mut WindowManager<AppContent>,
            &mut InteractionState,
        ) -> (R, Vec<WindowEvent>),
    ) -> R {
        let mut manager = self.manager.get_untracked();
        let mut ui = self.interaction.get_untracked();
        let previous_ui = ui.clone();

        let (result, new_events) = command(&mut manager, &mut ui);

        if !new_events.is_empty() {
            self.manager.set(manager);
            self.events.update(|queue| queue.extend(new_events));
        }
        if ui != previous_ui {
            self.interaction.set(ui);
        }
        result
    }

    /// Applies a raw [`WindowAction`].
    pub fn dispatch(&self, action: WindowAction<AppContent>) {
        self.apply(|manager, _| ((), manager.dispatch(action)));
    }

    /// Opens a window (or focuses it, when the request names an open window) and returns its id.
    pub fn open(&self, app_id: impl Into<AppId>, request: OpenWindowRequest<AppContent>) -> WindowId {
        let app_id = app_id.into();
        self.apply(move |manager, _| manager.open_with_events(app_id, request))
    }

    pub fn close(&self, window_id: &WindowId) {
        self.apply(|manager, _| ((), manager.close(window_id)));
    }

    pub fn focus(&self, window_id: &WindowId) {
        self.apply(|manager, _| ((), manager.focus(window_id)));
    }

    pub fn minimize(&self, window_id: &WindowId) {
        self.apply(|manager, _| ((), manager.minimize(window_id)));
    }

    pub fn restore(&self, window_id: &WindowId) {
        self.apply(|manager, _| ((), manager.restore(window_id)));
    }

    pub fn move_window(&self, window_id: &WindowId, position: Position) {
        self.apply(|manager, _| ((), manager.move_window(window_id, position)));
    }

    pub fn resize(&self, window_id: &WindowId, size: Size) {
        self.apply(|manager, _| ((), manager.resize(window_id, size)));
    }

    /// Opens a built-in app at its catalog geometry.
    pub fn launch(&self, app: DesktopApp) -> WindowId {
        self.open(app.app_id(), default_open_request(app))
    }

    /// Opens a built-in app named by its string id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownApp`] when `app_id` is not in the catalog.
    pub fn launch_by_id(&self, app_id: &str) -> Result<WindowId, CatalogError> {
        let app = app_id.parse::<DesktopApp>()?;
        Ok(self.launch(app))
    }

    /// Handles a desktop-icon double click.
    pub fn activate_desktop_icon(&self, icon: &DesktopIcon) -> Option<WindowId> {
        match icon.launches {
            Some(app) => Some(self.launch(app)),
            None => {
                logging::log!("{} is not available yet", icon.label);
                None
            }
        }
    }

    /// Handles a taskbar button press for `window_id`.
    pub fn activate_taskbar_button(&self, window_id: &WindowId) {
        self.apply(|manager, _| {
            let events = taskbar::taskbar_activation(manager.state(), window_id)
                .map(|action| manager.dispatch(action))
                .unwrap_or_default();
            ((), events)
        });
    }

    /// Handles a click anywhere inside a window.
    pub fn click_window(&self, window_id: &WindowId) {
        self.apply(|manager, _| {
            let events = taskbar::window_click_action(manager.state(), window_id)
                .map(|action| manager.dispatch(action))
                .unwrap_or_default();
            ((), events)
        });
    }

    /// Handles the start button by opening the next app in the rotation.
    pub fn press_start(&self) -> Option<WindowId> {
        self.apply(|manager, ui| match taskbar::next_start_app(ui) {
            Some(app) => {
                let (window_id, events) =
                    manager.open_with_events(app.app_id(), default_open_request(app));
                (Some(window_id), events)
            }
            None => (None, Vec::new()),
        })
    }

    pub fn begin_drag(&self, window_id: &WindowId, pointer: PointerPosition) {
        self.apply(|manager, ui| ((), interaction::begin_drag(manager, ui, window_id, pointer)));
    }

    pub fn update_drag(&self, pointer: PointerPosition) {
        self.apply(|manager, ui| ((), interaction::update_drag(manager, ui, pointer)));
    }

    pub fn end_drag(&self) {
        self.apply(|_, ui| {
            interaction::end_drag(ui);
            ((), Vec::new())
        });
    }

    /// Windows to paint on the desktop, back to front.
    pub fn visible_windows(&self) -> Signal<Vec<DesktopWindow>> {
        let manager = self.manager;
        Signal::derive(move || {
            manager.with(|m| views::visible_windows(m.state()).into_iter().cloned().collect())
        })
    }

    /// Windows with a taskbar button, minimized ones included.
    pub fn taskbar_windows(&self) -> Signal<Vec<DesktopWindow>> {
        let manager = self.manager;
        Signal::derive(move || {
            manager.with(|m| views::taskbar_windows(m.state()).into_iter().cloned().collect())
        })
    }

    pub fn focused_window_id(&self) -> Signal<Option<WindowId>> {
        let manager = self.manager;
        Signal::derive(move || manager.with(|m| m.focused_window_id().cloned()))
    }

    /// Back-to-front stacking order of open windows.
    pub fn window_order(&self) -> Signal<Vec<WindowId>> {
        let manager = self.manager;
        Signal::derive(move || manager.with(|m| m.order().to_vec()))
    }

    /// Reactive lookup of a single window; tombstones resolve to `None`.
    pub fn window(&self, window_id: WindowId) -> Signal<Option<DesktopWindow>> {
        let manager = self.manager;
        Signal::derive(move || manager.with(|m| m.state().open_window(&window_id).cloned()))
    }

    /// Whether the taskbar button for `window_id` should render pressed.
    pub fn is_window_active(&self, window_id: WindowId) -> Signal<bool> {
        let manager = self.manager;
        Signal::derive(move || manager.with(|m| views::is_window_active(m.state(), &window_id)))
    }
}

/// Creates a [`WindowManagerContext`], provides it to descendants, and starts the event executor.
pub fn provide_window_manager() -> WindowManagerContext {
    let runtime = WindowManagerContext::new();
    provide_context(runtime);
    effect_executor::install(runtime);
    runtime
}

#[component]
/// Provides [`WindowManagerContext`] to descendant components.
pub fn WindowManagerProvider(children: Children) -> impl IntoView {
    provide_window_manager();
    children().into_view()
}

/// Returns the current [`WindowManagerContext`].
///
/// # Panics
///
/// Panics if called outside [`WindowManagerProvider`].
pub fn use_window_manager() -> WindowManagerContext {
    use_context::<WindowManagerContext>().expect("WindowManagerContext not provided")
}
