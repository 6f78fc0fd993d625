use std::fmt;

use serde::{Deserialize, Serialize};

/// Stacking value handed to the first raised window.
pub const INITIAL_Z_INDEX: u64 = 1000;
pub const DEFAULT_WINDOW_POSITION: Position = Position { x: 100, y: 100 };
pub const DEFAULT_WINDOW_SIZE: Size = Size {
    width: 400,
    height: 300,
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for WindowId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Hosted application type. Only used for bookkeeping and id synthesis.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppId(pub String);

impl AppId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AppId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for AppId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        DEFAULT_WINDOW_POSITION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        DEFAULT_WINDOW_SIZE
    }
}

/// One open or formerly-open window.
///
/// `content` is the hosted application's payload. The manager stores it and hands it back
/// unchanged; it never looks inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window<C> {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub content: C,
    pub position: Position,
    pub size: Size,
    pub z_index: u64,
    pub is_minimized: bool,
    /// Tombstone flag. Closed windows stay in [`WindowManagerState::windows`] so stale ids
    /// resolve to "closed" instead of "unknown".
    pub is_closed: bool,
}

impl<C> Window<C> {
    pub fn is_open(&self) -> bool {
        !self.is_closed
    }

    pub fn is_visible(&self) -> bool {
        !self.is_closed && !self.is_minimized
    }
}

/// Canonical window-manager state.
///
/// `windows` is keyed by [`Window::id`] (ids are unique) and keeps first-insertion order, which is
/// the order taskbar entries are listed in. `order` is the back-to-front stacking sequence of open
/// windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowManagerState<C> {
    pub windows: Vec<Window<C>>,
    pub order: Vec<WindowId>,
    pub next_z_index: u64,
    pub focused_window_id: Option<WindowId>,
}

impl<C> Default for WindowManagerState<C> {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            order: Vec::new(),
            next_z_index: INITIAL_Z_INDEX,
            focused_window_id: None,
        }
    }
}

impl<C> WindowManagerState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a window by id, tombstones included.
    pub fn window(&self, window_id: &WindowId) -> Option<&Window<C>> {
        self.windows.iter().find(|w| w.id == *window_id)
    }

    /// Looks up a window by id, skipping tombstones.
    pub fn open_window(&self, window_id: &WindowId) -> Option<&Window<C>> {
        self.window(window_id).filter(|w| w.is_open())
    }

    pub fn is_open(&self, window_id: &WindowId) -> bool {
        self.open_window(window_id).is_some()
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.focused_window_id.as_ref()
    }

    pub(crate) fn open_window_mut(&mut self, window_id: &WindowId) -> Option<&mut Window<C>> {
        self.windows
            .iter_mut()
            .find(|w| w.id == *window_id && w.is_open())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest<C> {
    /// Caller-chosen id. Reusing the id of an open window focuses it instead of opening a second
    /// one; `None` lets the store synthesize `"{app_id}-{unix_millis}"`.
    pub window_id: Option<WindowId>,
    /// Falls back to the app id when absent.
    pub title: Option<String>,
    pub content: C,
    pub position: Option<Position>,
    pub size: Option<Size>,
}

impl<C> OpenWindowRequest<C> {
    pub fn new(content: C) -> Self {
        Self {
            window_id: None,
            title: None,
            content,
            position: None,
            size: None,
        }
    }

    pub fn with_window_id(mut self, window_id: impl Into<WindowId>) -> Self {
        self.window_id = Some(window_id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}
