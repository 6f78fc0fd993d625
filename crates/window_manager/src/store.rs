//! Owned window-manager store.
//!
//! [`WindowManager`] is the single writer of a [`WindowManagerState`]. It is constructed
//! explicitly and handed to whatever owns the UI event loop; every mutation goes through the
//! command methods below (or [`WindowManager::dispatch`]), one at a time, in arrival order.

use crate::{
    clock::{Clock, SystemClock},
    model::{AppId, OpenWindowRequest, Position, Size, Window, WindowId, WindowManagerState},
    reducer::{reduce_windows, WindowAction, WindowEvent},
    views,
};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowManager<C, K = SystemClock> {
    state: WindowManagerState<C>,
    clock: K,
}

impl<C, K: Default> Default for WindowManager<C, K> {
    fn default() -> Self {
        Self {
            state: WindowManagerState::default(),
            clock: K::default(),
        }
    }
}

impl<C> WindowManager<C> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, K: Clock> WindowManager<C, K> {
    pub fn with_clock(clock: K) -> Self {
        Self {
            state: WindowManagerState::default(),
            clock,
        }
    }

    pub fn state(&self) -> &WindowManagerState<C> {
        &self.state
    }

    pub fn into_state(self) -> WindowManagerState<C> {
        self.state
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Applies one action. See [`reduce_windows`].
    pub fn dispatch(&mut self, action: WindowAction<C>) -> Vec<WindowEvent> {
        reduce_windows(&mut self.state, action)
    }

    /// Opens a window for `app_id` and returns its id.
    ///
    /// When the request carries the id of a window that is already open, that window is focused
    /// instead and its id is returned. Without an id, one is synthesized from the app id and the
    /// current time.
    pub fn open(&mut self, app_id: impl Into<AppId>, request: OpenWindowRequest<C>) -> WindowId {
        self.open_with_events(app_id, request).0
    }

    /// Same as [`WindowManager::open`], also returning the events the open produced.
    pub fn open_with_events(
        &mut self,
        app_id: impl Into<AppId>,
        mut request: OpenWindowRequest<C>,
    ) -> (WindowId, Vec<WindowEvent>) {
        let app_id = app_id.into();
        let window_id = match request.window_id.take() {
            Some(window_id) => window_id,
            None => synthesize_window_id(&self.state, &app_id, self.clock.now_millis()),
        };
        let events = self.dispatch(WindowAction::open(window_id.clone(), app_id, request));
        (window_id, events)
    }

    pub fn close(&mut self, window_id: &WindowId) -> Vec<WindowEvent> {
        self.dispatch(WindowAction::Close {
            window_id: window_id.clone(),
        })
    }

    pub fn focus(&mut self, window_id: &WindowId) -> Vec<WindowEvent> {
        self.dispatch(WindowAction::Focus {
            window_id: window_id.clone(),
        })
    }

    pub fn minimize(&mut self, window_id: &WindowId) -> Vec<WindowEvent> {
        self.dispatch(WindowAction::Minimize {
            window_id: window_id.clone(),
        })
    }

    pub fn restore(&mut self, window_id: &WindowId) -> Vec<WindowEvent> {
        self.dispatch(WindowAction::Restore {
            window_id: window_id.clone(),
        })
    }

    pub fn move_window(&mut self, window_id: &WindowId, position: Position) -> Vec<WindowEvent> {
        self.dispatch(WindowAction::Move {
            window_id: window_id.clone(),
            position,
        })
    }

    pub fn resize(&mut self, window_id: &WindowId, size: Size) -> Vec<WindowEvent> {
        self.dispatch(WindowAction::Resize {
            window_id: window_id.clone(),
            size,
        })
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&Window<C>> {
        self.state.window(window_id)
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.state.focused_window_id()
    }

    pub fn order(&self) -> &[WindowId] {
        &self.state.order
    }

    pub fn open_windows(&self) -> Vec<&Window<C>> {
        views::open_windows(&self.state)
    }

    pub fn visible_windows(&self) -> Vec<&Window<C>> {
        views::visible_windows(&self.state)
    }

    pub fn taskbar_windows(&self) -> Vec<&Window<C>> {
        views::taskbar_windows(&self.state)
    }
}

/// Builds `"{app_id}-{now_millis}"`, suffixed with `-2`, `-3`, ... if that id was ever used.
///
/// Tombstones count as used, so a synthesized id never resurrects a closed window.
pub fn synthesize_window_id<C>(
    state: &WindowManagerState<C>,
    app_id: &AppId,
    now_millis: u64,
) -> WindowId {
    let base = format!("{app_id}-{now_millis}");
    let candidate = WindowId(base.clone());
    if state.window(&candidate).is_none() {
        return candidate;
    }

    let mut suffix: u64 = 2;
    loop {
        let candidate = WindowId(format!("{base}-{suffix}"));
        if state.window(&candidate).is_none() {
            return candidate;
        }
        suffix += 1;
    }
}
